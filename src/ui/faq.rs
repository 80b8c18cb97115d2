use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Frequently Asked Questions",
            Style::default().fg(theme.accent).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Find answers to common questions about SDG 16",
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for (index, faq) in app.content.faqs.iter().enumerate() {
        let expanded = app.faq_expanded == Some(index);
        let is_cursor = app.faq_cursor == index;

        let marker = if expanded { "v" } else { ">" };
        let style = if is_cursor {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection_bg)
                .bold()
        } else if expanded {
            Style::default().fg(theme.accent).bold()
        } else {
            Style::default().fg(theme.fg)
        };

        lines.push(Line::from(Span::styled(
            format!(" {} {}", marker, faq.question),
            style,
        )));
        if expanded {
            lines.push(Line::from(Span::styled(
                format!("   {}", faq.answer),
                Style::default().fg(theme.muted),
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, chunks[0]);

    let controls = Paragraph::new("j/k move  ·  enter expand/collapse")
        .alignment(Alignment::Center)
        .fg(theme.muted);
    frame.render_widget(controls, chunks[1]);
}
