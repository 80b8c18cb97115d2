use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Key SDG 16 Targets",
            Style::default().fg(theme.accent).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for (index, target) in app.content.targets.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                target.title.as_str(),
                Style::default().fg(theme.fg).bold(),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", target.description),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}
