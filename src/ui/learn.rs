use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Article;

const PROMPT_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let article = app.current_article();
    let revealed = app.quizzes.is_revealed(&article.id);

    render_article_panel(frame, chunks[0], app, article);
    if revealed {
        render_results(frame, chunks[1], app, article);
    } else {
        render_question(frame, chunks[1], app, article);
    }
    render_controls(frame, chunks[2], app, article, revealed);
}

fn option_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn render_article_panel(frame: &mut Frame, area: Rect, app: &App, article: &Article) {
    let theme = app.theme();

    let content = vec![
        Line::from(vec![
            Span::styled(
                article.title.as_str(),
                Style::default().fg(theme.accent).bold(),
            ),
            Span::styled(
                format!("  ·  {}", article.read_time),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::from(Span::styled(
            article.description.as_str(),
            Style::default().fg(theme.fg),
        )),
        Line::from(Span::styled(
            article.link.as_str(),
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            format!(
                "Article {}/{}  ·  h/l to switch",
                app.article_index() + 1,
                app.content.articles.len()
            ),
            Style::default().fg(theme.muted),
        )),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Learn About SDG 16 ")
            .borders(Borders::ALL)
            .border_style(theme.border)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_question(frame: &mut Frame, area: Rect, app: &App, article: &Article) {
    let theme = app.theme();
    let question_index = app.question_cursor();
    let question = &article.questions[question_index];
    let answered = app.quizzes.answered_count(&article.id);
    let total = article.questions.len();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    let progress = Paragraph::new(format!(
        "Question {}/{}  ·  Answered {}/{}",
        question_index + 1,
        total,
        answered,
        total
    ))
    .alignment(Alignment::Right)
    .fg(theme.muted);
    frame.render_widget(progress, chunks[0]);

    let prompt = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: true })
        .fg(theme.fg)
        .bold();
    frame.render_widget(prompt, chunks[1]);

    let recorded = app.quizzes.answer(&article.id, question_index);
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);
    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == app.option_cursor();
        let is_recorded = recorded == Some(index);

        let mut style = if is_cursor {
            Style::default().fg(theme.accent).bold()
        } else {
            Style::default().fg(theme.muted)
        };
        if is_recorded {
            style = style.fg(theme.selection_fg).bg(theme.selection_bg);
        }
        let marker = if is_cursor { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), chunks[2]);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App, article: &Article) {
    let theme = app.theme();
    let score = app.quizzes.calculate_score(&article.id);
    let total = article.questions.len();
    let perfect = score == total;

    let chunks = Layout::vertical([Constraint::Length(5), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    let message = if perfect {
        "Perfect score! You have a great understanding of this topic."
    } else {
        "Great attempt! Review the answers to learn more about this important topic."
    };
    let score_color = if perfect { theme.success } else { theme.accent };

    let summary = vec![
        Line::from(Span::styled(
            format!("Your Score: {}/{}", score, total),
            Style::default().fg(score_color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.fg))),
    ];
    frame.render_widget(
        Paragraph::new(summary).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.border),
        ),
        chunks[0],
    );

    let lines: Vec<Line> = article
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let chosen = app.quizzes.answer(&article.id, index);
            let is_correct = chosen == Some(question.correct_answer);
            let (symbol, color) = if is_correct {
                ("+", theme.success)
            } else {
                ("-", theme.error)
            };
            let chosen_label = chosen
                .map(|option| option_label(option).to_string())
                .unwrap_or_else(|| "·".to_string());

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    truncate_prompt(&question.prompt),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(
                    format!("  you: {}", chosen_label),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!("  correct: {}", option_label(question.correct_answer)),
                    Style::default().fg(theme.success),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1))),
        chunks[1],
    );
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App, article: &Article, revealed: bool) {
    let theme = app.theme();
    let text = if revealed {
        "h/l article  ·  r try again  ·  q quit".to_string()
    } else if app.quizzes.is_complete(&article.id) {
        "j/k options  ·  enter select  ·  n/p questions  ·  s submit answers".to_string()
    } else {
        let remaining =
            article.questions.len() - app.quizzes.answered_count(&article.id);
        format!(
            "j/k options  ·  enter select  ·  n/p questions  ·  {} left to answer",
            remaining
        )
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(theme.muted);
    frame.render_widget(widget, area);
}

fn truncate_prompt(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > PROMPT_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(PROMPT_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
