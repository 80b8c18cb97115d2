use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let about = &app.content.about;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "About Our Team",
            Style::default().fg(theme.accent).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(about.blurb.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Our Mission",
            Style::default().fg(theme.accent).bold(),
        )),
        Line::from(about.mission.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Team Members",
            Style::default().fg(theme.accent).bold(),
        )),
        Line::from(""),
    ];

    for member in &about.members {
        lines.push(Line::from(vec![
            Span::styled(member.name.as_str(), Style::default().fg(theme.fg).bold()),
            Span::styled(
                format!("  ·  {}", member.group),
                Style::default().fg(theme.muted),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  Reg. No. {}", member.reg_no),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", member.email),
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .fg(theme.fg)
        .scroll((app.scroll(), 0))
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}
