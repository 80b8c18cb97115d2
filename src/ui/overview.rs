use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let overview = &app.content.overview;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Peace, Justice and Strong Institutions",
            Style::default().fg(theme.accent).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(overview.intro.as_str()),
        Line::from(""),
    ];

    for card in &overview.stats {
        lines.push(Line::from(Span::styled(
            card.title.as_str(),
            Style::default().fg(theme.fg).bold(),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", card.stat),
                Style::default().fg(theme.accent).bold(),
            ),
            Span::styled(
                format!("  {}", card.detail),
                Style::default().fg(theme.muted),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Why This Matters",
        Style::default().fg(theme.accent).bold(),
    )));
    lines.push(Line::from(overview.why_it_matters.as_str()));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .fg(theme.fg)
        .scroll((app.scroll(), 0))
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}
