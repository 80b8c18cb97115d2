use crate::models::{Article, Screen, Section, SiteContent};
use crate::quiz::QuizBook;
use crate::theme::Theme;

const LOADING_STEP: u16 = 2;
// ~3 seconds at the 50ms tick cadence, like the original confirmation timeout.
const SENT_TICKS: u16 = 60;

/// Fields of the contact form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> ContactField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> ContactField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Contact form state: field values, focus, and the transient sent state.
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
    pub editing: bool,
    sent_ticks: u16,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            focus: ContactField::Name,
            editing: false,
            sent_ticks: 0,
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Submit is allowed only with every field filled and a plausible email.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.contains('@')
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn sent(&self) -> bool {
        self.sent_ticks > 0
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.focus = ContactField::Name;
        self.editing = false;
    }
}

/// All mutable UI state for the site. Views read it, input handlers call
/// its methods; nothing else mutates it.
pub struct App {
    pub content: SiteContent,
    pub screen: Screen,
    pub section: Section,
    pub dark_mode: bool,
    pub quizzes: QuizBook,
    pub contact: ContactForm,
    pub faq_cursor: usize,
    pub faq_expanded: Option<usize>,
    loading_progress: u16,
    scroll: [u16; Section::ALL.len()],
    article_index: usize,
    question_cursor: usize,
    option_cursor: usize,
}

impl App {
    pub fn new(content: SiteContent) -> Self {
        let quizzes = QuizBook::new(&content.articles);

        Self {
            content,
            screen: Screen::Loading,
            section: Section::Home,
            dark_mode: false,
            quizzes,
            contact: ContactForm::new(),
            faq_cursor: 0,
            faq_expanded: None,
            loading_progress: 0,
            scroll: [0; Section::ALL.len()],
            article_index: 0,
            question_cursor: 0,
            option_cursor: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::dark()
        } else {
            Theme::light()
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Advance cosmetic timers: the loading bar and the contact confirmation.
    pub fn on_tick(&mut self) {
        match self.screen {
            Screen::Loading => {
                if self.loading_progress >= 100 {
                    self.screen = Screen::Site;
                } else {
                    self.loading_progress = (self.loading_progress + LOADING_STEP).min(100);
                }
            }
            Screen::Site => {
                if self.contact.sent_ticks > 0 {
                    self.contact.sent_ticks -= 1;
                    if self.contact.sent_ticks == 0 {
                        self.contact.clear();
                    }
                }
            }
        }
    }

    pub fn loading_progress(&self) -> u16 {
        self.loading_progress
    }

    pub fn skip_loading(&mut self) {
        self.loading_progress = 100;
        self.screen = Screen::Site;
    }

    // --- Section navigation ---

    pub fn next_section(&mut self) {
        self.section = self.section.next();
    }

    pub fn previous_section(&mut self) {
        self.section = self.section.previous();
    }

    pub fn jump_to_section(&mut self, index: usize) {
        if let Some(section) = Section::from_index(index) {
            self.section = section;
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll[self.section.index()]
    }

    pub fn scroll_down(&mut self) {
        let max = self.max_scroll();
        let offset = &mut self.scroll[self.section.index()];
        *offset = (*offset + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        let offset = &mut self.scroll[self.section.index()];
        *offset = offset.saturating_sub(1);
    }

    // Rough per-section content heights; overshoot is harmless, the
    // paragraph just runs out of lines.
    fn max_scroll(&self) -> u16 {
        let content = &self.content;
        let lines = match self.section {
            Section::Home | Section::Learn | Section::Faq | Section::Contact => 0,
            Section::Overview => content.overview.stats.len() * 4 + 16,
            Section::Targets => content.targets.len() * 4 + 4,
            Section::Explore => {
                content.impact.cards.len() * 4
                    + content.impact.regions.len() * 2
                    + content.impact.successes.len() * 2
                    + content.impact.challenges.len() * 2
                    + content.impact.connections.len() * 3
                    + 20
            }
            Section::GetInvolved => {
                content.involvement.individual_actions.len() * 2
                    + content.involvement.community_initiatives.len() * 2
                    + content.involvement.organizations.len() * 4
                    + content.involvement.interest_areas.len()
                    + 16
            }
            Section::About => content.about.members.len() * 5 + 16,
        };
        lines as u16
    }

    // --- FAQ accordion ---

    pub fn faq_next(&mut self) {
        if self.faq_cursor + 1 < self.content.faqs.len() {
            self.faq_cursor += 1;
        }
    }

    pub fn faq_previous(&mut self) {
        self.faq_cursor = self.faq_cursor.saturating_sub(1);
    }

    /// Expand the entry under the cursor, or collapse it if already open.
    pub fn toggle_faq(&mut self) {
        if self.faq_expanded == Some(self.faq_cursor) {
            self.faq_expanded = None;
        } else {
            self.faq_expanded = Some(self.faq_cursor);
        }
    }

    // --- Learn tab ---

    pub fn current_article(&self) -> &Article {
        &self.content.articles[self.article_index]
    }

    pub fn article_index(&self) -> usize {
        self.article_index
    }

    pub fn question_cursor(&self) -> usize {
        self.question_cursor
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn next_article(&mut self) {
        self.article_index = (self.article_index + 1) % self.content.articles.len();
        self.question_cursor = 0;
        self.sync_option_cursor();
    }

    pub fn previous_article(&mut self) {
        let count = self.content.articles.len();
        self.article_index = (self.article_index + count - 1) % count;
        self.question_cursor = 0;
        self.sync_option_cursor();
    }

    pub fn next_question(&mut self) {
        let count = self.current_article().questions.len();
        self.question_cursor = (self.question_cursor + 1) % count;
        self.sync_option_cursor();
    }

    pub fn previous_question(&mut self) {
        let count = self.current_article().questions.len();
        self.question_cursor = (self.question_cursor + count - 1) % count;
        self.sync_option_cursor();
    }

    pub fn option_down(&mut self) {
        let count = self.current_option_count();
        self.option_cursor = (self.option_cursor + 1) % count;
    }

    pub fn option_up(&mut self) {
        let count = self.current_option_count();
        self.option_cursor = (self.option_cursor + count - 1) % count;
    }

    /// Record the highlighted option for the current question, then move to
    /// the next question. Ignored once feedback is revealed.
    pub fn confirm_option(&mut self) {
        let article_id = self.current_article().id.clone();
        if self.quizzes.is_revealed(&article_id) {
            return;
        }
        self.quizzes
            .select_answer(&article_id, self.question_cursor, self.option_cursor);
        if self.question_cursor + 1 < self.current_article().questions.len() {
            self.next_question();
        }
    }

    /// Reveal feedback, but only once every question is answered.
    pub fn submit_quiz(&mut self) {
        let article_id = self.current_article().id.clone();
        if self.quizzes.is_complete(&article_id) && !self.quizzes.is_revealed(&article_id) {
            self.quizzes.check_answers(&article_id);
        }
    }

    pub fn reset_quiz(&mut self) {
        let article_id = self.current_article().id.clone();
        self.quizzes.reset_quiz(&article_id);
        self.question_cursor = 0;
        self.sync_option_cursor();
    }

    fn current_option_count(&self) -> usize {
        self.current_article().questions[self.question_cursor]
            .options
            .len()
    }

    // Keep the highlight on the recorded answer when revisiting a question.
    fn sync_option_cursor(&mut self) {
        let article_id = &self.content.articles[self.article_index].id;
        self.option_cursor = self
            .quizzes
            .answer(article_id, self.question_cursor)
            .unwrap_or(0);
    }

    // --- Contact form ---

    pub fn start_contact_edit(&mut self) {
        if !self.contact.sent() {
            self.contact.editing = true;
        }
    }

    pub fn stop_contact_edit(&mut self) {
        self.contact.editing = false;
    }

    pub fn contact_focus_next(&mut self) {
        self.contact.focus = self.contact.focus.next();
    }

    pub fn contact_focus_previous(&mut self) {
        self.contact.focus = self.contact.focus.previous();
    }

    pub fn contact_input(&mut self, c: char) {
        let focus = self.contact.focus;
        self.contact.field_mut(focus).push(c);
    }

    pub fn contact_backspace(&mut self) {
        let focus = self.contact.focus;
        self.contact.field_mut(focus).pop();
    }

    /// Returns true if the message was accepted.
    pub fn submit_contact(&mut self) -> bool {
        if !self.contact.is_complete() {
            return false;
        }
        self.contact.sent_ticks = SENT_TICKS;
        self.contact.editing = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_embedded_content;

    fn app() -> App {
        App::new(load_embedded_content().unwrap())
    }

    #[test]
    fn test_loading_completes() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Loading);
        for _ in 0..50 {
            app.on_tick();
        }
        assert_eq!(app.screen, Screen::Loading);
        assert_eq!(app.loading_progress(), 100);
        app.on_tick();
        assert_eq!(app.screen, Screen::Site);
    }

    #[test]
    fn test_skip_loading() {
        let mut app = app();
        app.skip_loading();
        assert_eq!(app.screen, Screen::Site);
    }

    #[test]
    fn test_theme_follows_toggle() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::light());
        app.toggle_dark_mode();
        assert_eq!(app.theme(), Theme::dark());
    }

    #[test]
    fn test_section_jump_ignores_bad_index() {
        let mut app = app();
        app.jump_to_section(2);
        assert_eq!(app.section, Section::Targets);
        app.jump_to_section(99);
        assert_eq!(app.section, Section::Targets);
    }

    #[test]
    fn test_scroll_is_per_section() {
        let mut app = app();
        app.jump_to_section(Section::Targets.index());
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.scroll(), 2);
        app.jump_to_section(Section::Overview.index());
        assert_eq!(app.scroll(), 0);
        app.jump_to_section(Section::Targets.index());
        assert_eq!(app.scroll(), 2);
    }

    #[test]
    fn test_faq_toggle_collapses() {
        let mut app = app();
        app.faq_next();
        app.toggle_faq();
        assert_eq!(app.faq_expanded, Some(1));
        app.toggle_faq();
        assert_eq!(app.faq_expanded, None);
    }

    #[test]
    fn test_confirm_option_records_and_advances() {
        let mut app = app();
        app.option_down();
        app.confirm_option();
        assert_eq!(app.quizzes.answer("article1", 0), Some(1));
        assert_eq!(app.question_cursor(), 1);
        assert_eq!(app.option_cursor(), 0);
    }

    #[test]
    fn test_submit_requires_all_answers() {
        let mut app = app();
        app.confirm_option();
        app.submit_quiz();
        assert!(!app.quizzes.is_revealed("article1"));

        for _ in 0..3 {
            app.confirm_option();
        }
        app.submit_quiz();
        assert!(app.quizzes.is_revealed("article1"));
    }

    #[test]
    fn test_reset_returns_to_first_question() {
        let mut app = app();
        for _ in 0..4 {
            app.confirm_option();
        }
        app.submit_quiz();
        app.reset_quiz();
        assert!(!app.quizzes.is_revealed("article1"));
        assert_eq!(app.question_cursor(), 0);
        assert_eq!(app.quizzes.answered_count("article1"), 0);
    }

    #[test]
    fn test_article_switch_keeps_other_quiz() {
        let mut app = app();
        app.confirm_option();
        app.next_article();
        assert_eq!(app.article_index(), 1);
        assert_eq!(app.quizzes.answer("article1", 0), Some(0));
        assert_eq!(app.quizzes.answered_count("article2"), 0);
        app.next_article();
        assert_eq!(app.article_index(), 0);
    }

    #[test]
    fn test_option_cursor_follows_recorded_answer() {
        let mut app = app();
        app.option_down();
        app.option_down();
        app.confirm_option();
        app.previous_question();
        assert_eq!(app.option_cursor(), 2);
    }

    #[test]
    fn test_contact_flow() {
        let mut app = app();
        app.skip_loading();
        app.start_contact_edit();
        assert!(app.contact.editing);

        for c in "Ada".chars() {
            app.contact_input(c);
        }
        assert!(!app.submit_contact());

        app.contact_focus_next();
        for c in "ada@example.org".chars() {
            app.contact_input(c);
        }
        app.contact_focus_next();
        app.contact_input('S');
        app.contact_focus_next();
        app.contact_input('M');
        assert!(app.submit_contact());
        assert!(app.contact.sent());
        assert!(!app.contact.editing);

        for _ in 0..SENT_TICKS {
            app.on_tick();
        }
        assert!(!app.contact.sent());
        assert!(app.contact.name.is_empty());
        assert!(app.contact.message.is_empty());
    }

    #[test]
    fn test_contact_backspace() {
        let mut app = app();
        app.start_contact_edit();
        app.contact_input('a');
        app.contact_input('b');
        app.contact_backspace();
        assert_eq!(app.contact.name, "a");
    }
}
