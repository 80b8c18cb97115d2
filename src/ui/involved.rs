use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let involvement = &app.content.involvement;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Get Involved",
            Style::default().fg(theme.accent).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Ways you can contribute to promoting peace, justice, and strong institutions",
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "Individual Actions",
            Style::default().fg(theme.accent).bold(),
        )),
    ];

    for action in &involvement.individual_actions {
        lines.push(Line::from(vec![
            Span::styled("  + ", Style::default().fg(theme.success)),
            Span::styled(action.as_str(), Style::default().fg(theme.fg)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Community Initiatives",
        Style::default().fg(theme.accent).bold(),
    )));
    for initiative in &involvement.community_initiatives {
        lines.push(Line::from(vec![
            Span::styled("  + ", Style::default().fg(theme.success)),
            Span::styled(initiative.as_str(), Style::default().fg(theme.fg)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Organizations to Support",
        Style::default().fg(theme.accent).bold(),
    )));
    for org in &involvement.organizations {
        lines.push(Line::from(Span::styled(
            org.name.as_str(),
            Style::default().fg(theme.fg).bold(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", org.description),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", org.website),
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Join Our Network",
        Style::default().fg(theme.accent).bold(),
    )));
    lines.push(Line::from(Span::styled(
        "Sign up to receive updates about SDG 16 initiatives and opportunities to get involved.",
        Style::default().fg(theme.fg),
    )));
    lines.push(Line::from(Span::styled(
        format!("Areas of interest: {}", involvement.interest_areas.join(" · ")),
        Style::default().fg(theme.muted),
    )));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}
