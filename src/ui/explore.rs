use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let impact = &app.content.impact;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Global Impact",
            Style::default().fg(theme.accent).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "How SDG 16 is transforming societies and institutions worldwide",
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for card in &impact.cards {
        lines.push(Line::from(Span::styled(
            card.title.as_str(),
            Style::default().fg(theme.fg).bold(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", card.description),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Regional Progress Indicators",
        Style::default().fg(theme.accent).bold(),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "{:<16}{:>18}{:>16}{:>13}",
            "Region", "Corruption Index", "Justice Access", "Peace Index"
        ),
        Style::default().fg(theme.fg).bold(),
    )));
    for row in &impact.regions {
        lines.push(Line::from(Span::styled(
            format!(
                "{:<16}{:>18}{:>16}{:>13}",
                row.region,
                format!("{}/100", row.corruption_index),
                format!("{}/100", row.justice_access),
                format!("{}/100", row.peace_index)
            ),
            Style::default().fg(theme.fg),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Success Stories",
        Style::default().fg(theme.success).bold(),
    )));
    for story in &impact.successes {
        lines.push(Line::from(vec![
            Span::styled("  + ", Style::default().fg(theme.success)),
            Span::styled(story.as_str(), Style::default().fg(theme.fg)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Challenges Ahead",
        Style::default().fg(theme.error).bold(),
    )));
    for challenge in &impact.challenges {
        lines.push(Line::from(vec![
            Span::styled("  - ", Style::default().fg(theme.error)),
            Span::styled(challenge.as_str(), Style::default().fg(theme.fg)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Connections to Other Goals",
        Style::default().fg(theme.accent).bold(),
    )));
    for connection in &impact.connections {
        lines.push(Line::from(Span::styled(
            connection.sdg.as_str(),
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", connection.description),
            Style::default().fg(theme.muted),
        )));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}
