//! Answer bookkeeping for the per-article knowledge checks.

use std::collections::HashMap;

use crate::models::Article;

/// Quiz progress for a single article.
///
/// One answer slot per question, sized at construction and never resized.
/// Once `revealed` is set, slots are frozen until [`QuizBook::reset_quiz`].
struct ArticleQuiz {
    correct: Vec<usize>,
    option_counts: Vec<usize>,
    answers: Vec<Option<usize>>,
    revealed: bool,
}

impl ArticleQuiz {
    fn new(article: &Article) -> Self {
        Self {
            correct: article.questions.iter().map(|q| q.correct_answer).collect(),
            option_counts: article.questions.iter().map(|q| q.options.len()).collect(),
            answers: vec![None; article.questions.len()],
            revealed: false,
        }
    }

    fn reset(&mut self) {
        self.answers = vec![None; self.correct.len()];
        self.revealed = false;
    }

    fn score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.correct.iter())
            .filter(|(answer, correct)| *answer == &Some(**correct))
            .count()
    }
}

/// Answer and reveal state for every article quiz, keyed by article id.
///
/// Articles are fully independent: mutating one never touches another.
/// Unknown article ids and out-of-range indices are caller bugs and panic
/// rather than being coerced.
pub struct QuizBook {
    quizzes: HashMap<String, ArticleQuiz>,
}

impl QuizBook {
    /// Build all-unanswered state for every article.
    pub fn new(articles: &[Article]) -> Self {
        let quizzes = articles
            .iter()
            .map(|article| (article.id.clone(), ArticleQuiz::new(article)))
            .collect();
        Self { quizzes }
    }

    /// Record a choice for one question. Last write wins. Ignored while the
    /// article's feedback is revealed.
    pub fn select_answer(&mut self, article_id: &str, question: usize, option: usize) {
        let quiz = self.quiz_mut(article_id);
        assert!(
            question < quiz.answers.len(),
            "question index {} out of range for article '{}'",
            question,
            article_id
        );
        assert!(
            option < quiz.option_counts[question],
            "option index {} out of range for question {} of article '{}'",
            option,
            question,
            article_id
        );
        if quiz.revealed {
            return;
        }
        quiz.answers[question] = Some(option);
    }

    /// Show correctness feedback and freeze the article's answers.
    pub fn check_answers(&mut self, article_id: &str) {
        self.quiz_mut(article_id).revealed = true;
    }

    /// Clear every slot back to unanswered and hide feedback. The only way
    /// out of the revealed state.
    pub fn reset_quiz(&mut self, article_id: &str) {
        self.quiz_mut(article_id).reset();
    }

    /// Count of questions whose recorded answer matches the correct option.
    /// Unanswered questions never count.
    pub fn calculate_score(&self, article_id: &str) -> usize {
        self.quiz(article_id).score()
    }

    pub fn is_revealed(&self, article_id: &str) -> bool {
        self.quiz(article_id).revealed
    }

    /// True once every question has an answer; gates the submit action.
    pub fn is_complete(&self, article_id: &str) -> bool {
        self.quiz(article_id).answers.iter().all(Option::is_some)
    }

    pub fn answer(&self, article_id: &str, question: usize) -> Option<usize> {
        self.quiz(article_id).answers[question]
    }

    pub fn answered_count(&self, article_id: &str) -> usize {
        self.quiz(article_id)
            .answers
            .iter()
            .filter(|a| a.is_some())
            .count()
    }

    pub fn question_count(&self, article_id: &str) -> usize {
        self.quiz(article_id).answers.len()
    }

    fn quiz(&self, article_id: &str) -> &ArticleQuiz {
        self.quizzes
            .get(article_id)
            .unwrap_or_else(|| panic!("unknown article id '{}'", article_id))
    }

    fn quiz_mut(&mut self, article_id: &str) -> &mut ArticleQuiz {
        self.quizzes
            .get_mut(article_id)
            .unwrap_or_else(|| panic!("unknown article id '{}'", article_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn article(id: &str, correct: &[usize]) -> Article {
        Article {
            id: id.to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            image_url: String::new(),
            read_time: "5 min read".to_string(),
            link: String::new(),
            questions: correct
                .iter()
                .map(|&answer| Question {
                    prompt: "Prompt".to_string(),
                    options: vec![
                        "A".to_string(),
                        "B".to_string(),
                        "C".to_string(),
                        "D".to_string(),
                    ],
                    correct_answer: answer,
                })
                .collect(),
        }
    }

    fn book() -> QuizBook {
        QuizBook::new(&[
            article("article1", &[1, 2, 1, 2]),
            article("article2", &[0, 3]),
        ])
    }

    #[test]
    fn test_fresh_state_is_unanswered() {
        let book = book();
        assert_eq!(book.question_count("article1"), 4);
        assert_eq!(book.answered_count("article1"), 0);
        assert!(!book.is_revealed("article1"));
        assert!(!book.is_complete("article1"));
        assert_eq!(book.calculate_score("article1"), 0);
    }

    #[test]
    fn test_last_selection_wins() {
        let mut book = book();
        book.select_answer("article1", 0, 3);
        book.select_answer("article1", 0, 1);
        assert_eq!(book.answer("article1", 0), Some(1));
        // Other slots are untouched.
        for question in 1..4 {
            assert_eq!(book.answer("article1", question), None);
        }
        book.check_answers("article1");
        assert_eq!(book.calculate_score("article1"), 1);
    }

    #[test]
    fn test_scoring_scenario() {
        let mut book = book();
        for (question, option) in [1, 0, 1, 2].into_iter().enumerate() {
            book.select_answer("article1", question, option);
        }
        assert!(book.is_complete("article1"));
        book.check_answers("article1");
        assert_eq!(book.calculate_score("article1"), 3);
    }

    #[test]
    fn test_unanswered_scores_zero() {
        let mut book = book();
        book.check_answers("article1");
        assert_eq!(book.calculate_score("article1"), 0);
    }

    #[test]
    fn test_full_marks() {
        let mut book = book();
        for (question, option) in [1, 2, 1, 2].into_iter().enumerate() {
            book.select_answer("article1", question, option);
        }
        book.check_answers("article1");
        assert_eq!(book.calculate_score("article1"), 4);
    }

    #[test]
    fn test_score_is_pure() {
        let mut book = book();
        book.select_answer("article1", 0, 1);
        let first = book.calculate_score("article1");
        assert_eq!(first, book.calculate_score("article1"));
        assert_eq!(first, 1);
    }

    #[test]
    fn test_reveal_freezes_answers() {
        let mut book = book();
        book.select_answer("article1", 0, 1);
        book.check_answers("article1");
        book.select_answer("article1", 0, 3);
        book.select_answer("article1", 1, 2);
        assert_eq!(book.answer("article1", 0), Some(1));
        assert_eq!(book.answer("article1", 1), None);
        assert_eq!(book.calculate_score("article1"), 1);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut book = book();
        for (question, option) in [1, 0, 1, 2].into_iter().enumerate() {
            book.select_answer("article1", question, option);
        }
        book.check_answers("article1");
        book.reset_quiz("article1");

        assert!(!book.is_revealed("article1"));
        assert_eq!(book.answered_count("article1"), 0);
        assert_eq!(book.question_count("article1"), 4);
        assert_eq!(book.calculate_score("article1"), 0);

        // Usable again after the reset.
        book.select_answer("article1", 2, 1);
        assert_eq!(book.answer("article1", 2), Some(1));
    }

    #[test]
    fn test_articles_are_independent() {
        let mut book = book();
        book.select_answer("article1", 0, 1);
        book.check_answers("article1");

        assert!(!book.is_revealed("article2"));
        assert_eq!(book.answered_count("article2"), 0);

        book.select_answer("article2", 1, 3);
        assert_eq!(book.answer("article2", 1), Some(3));
        assert_eq!(book.answer("article1", 0), Some(1));

        book.reset_quiz("article1");
        assert_eq!(book.answer("article2", 1), Some(3));
    }

    #[test]
    #[should_panic(expected = "unknown article id")]
    fn test_unknown_article_panics() {
        let mut book = book();
        book.select_answer("nope", 0, 0);
    }

    #[test]
    #[should_panic(expected = "question index")]
    fn test_question_out_of_range_panics() {
        let mut book = book();
        book.select_answer("article2", 2, 0);
    }

    #[test]
    #[should_panic(expected = "option index")]
    fn test_option_out_of_range_panics() {
        let mut book = book();
        book.select_answer("article1", 0, 4);
    }

    #[test]
    #[should_panic(expected = "option index")]
    fn test_indices_checked_even_when_revealed() {
        let mut book = book();
        book.check_answers("article1");
        book.select_answer("article1", 0, 4);
    }
}
