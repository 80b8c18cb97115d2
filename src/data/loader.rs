use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::SiteContent;

const EMBEDDED_CONTENT: &str = include_str!("../../content.json");

/// Error type for content loading and validation.
#[derive(Debug)]
pub enum LoadError {
    /// Error reading the content file.
    Io(io::Error),
    /// Error parsing the content JSON.
    Parse(serde_json::Error),
    /// The content has no articles.
    NoArticles,
    /// Two articles share the same id.
    DuplicateArticleId(String),
    /// An article has no questions.
    NoQuestions(String),
    /// A question has fewer than two options.
    TooFewOptions { article: String, question: usize },
    /// A question's correct answer does not index into its options.
    AnswerOutOfRange { article: String, question: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read content: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse content: {}", e),
            LoadError::NoArticles => write!(f, "content must have at least one article"),
            LoadError::DuplicateArticleId(id) => {
                write!(f, "duplicate article id '{}'", id)
            }
            LoadError::NoQuestions(id) => {
                write!(f, "article '{}' has no questions", id)
            }
            LoadError::TooFewOptions { article, question } => {
                write!(
                    f,
                    "question {} of article '{}' needs at least two options",
                    question + 1,
                    article
                )
            }
            LoadError::AnswerOutOfRange { article, question } => {
                write!(
                    f,
                    "question {} of article '{}' has a correct answer outside its options",
                    question + 1,
                    article
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load the content compiled into the binary.
pub fn load_embedded_content() -> Result<SiteContent, LoadError> {
    parse_content(EMBEDDED_CONTENT)
}

/// Load content from a JSON file, overriding the built-in copy.
pub fn load_content_from_json<P: AsRef<Path>>(path: P) -> Result<SiteContent, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_content(&json)
}

fn parse_content(json: &str) -> Result<SiteContent, LoadError> {
    let content: SiteContent = serde_json::from_str(json)?;
    validate(&content)?;
    Ok(content)
}

/// Reject malformed quiz data before the terminal is taken over.
fn validate(content: &SiteContent) -> Result<(), LoadError> {
    if content.articles.is_empty() {
        return Err(LoadError::NoArticles);
    }

    let mut seen_ids = HashSet::new();
    for article in &content.articles {
        if !seen_ids.insert(article.id.as_str()) {
            return Err(LoadError::DuplicateArticleId(article.id.clone()));
        }
        if article.questions.is_empty() {
            return Err(LoadError::NoQuestions(article.id.clone()));
        }
        for (index, question) in article.questions.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(LoadError::TooFewOptions {
                    article: article.id.clone(),
                    question: index,
                });
            }
            if question.correct_answer >= question.options.len() {
                return Err(LoadError::AnswerOutOfRange {
                    article: article.id.clone(),
                    question: index,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Question};

    fn article(id: &str, questions: Vec<Question>) -> Article {
        Article {
            id: id.to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            image_url: String::new(),
            read_time: "5 min read".to_string(),
            link: String::new(),
            questions,
        }
    }

    fn question(options: usize, correct: usize) -> Question {
        Question {
            prompt: "Prompt".to_string(),
            options: (0..options).map(|i| format!("Option {}", i)).collect(),
            correct_answer: correct,
        }
    }

    fn content_with(articles: Vec<Article>) -> SiteContent {
        let mut content = load_embedded_content().unwrap();
        content.articles = articles;
        content
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = load_embedded_content().unwrap();
        assert_eq!(content.articles.len(), 2);
        assert_eq!(content.targets.len(), 7);
        assert_eq!(content.faqs.len(), 5);
        assert_eq!(content.impact.regions.len(), 5);
        assert!(content.articles.iter().all(|a| a.questions.len() == 4));
    }

    #[test]
    fn test_rejects_no_articles() {
        let content = content_with(Vec::new());
        assert!(matches!(validate(&content), Err(LoadError::NoArticles)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let content = content_with(vec![
            article("a", vec![question(4, 0)]),
            article("a", vec![question(4, 0)]),
        ]);
        assert!(matches!(
            validate(&content),
            Err(LoadError::DuplicateArticleId(_))
        ));
    }

    #[test]
    fn test_rejects_empty_quiz() {
        let content = content_with(vec![article("a", Vec::new())]);
        assert!(matches!(validate(&content), Err(LoadError::NoQuestions(_))));
    }

    #[test]
    fn test_rejects_single_option_question() {
        let content = content_with(vec![article("a", vec![question(1, 0)])]);
        assert!(matches!(
            validate(&content),
            Err(LoadError::TooFewOptions { .. })
        ));
    }

    #[test]
    fn test_rejects_answer_out_of_range() {
        let content = content_with(vec![article("a", vec![question(4, 4)])]);
        assert!(matches!(
            validate(&content),
            Err(LoadError::AnswerOutOfRange { question: 0, .. })
        ));
    }
}
