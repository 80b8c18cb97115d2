use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let hero = &app.content.hero;

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(hero.heading.len() as u16),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .margin(2)
    .split(area);

    let heading: Vec<Line> = hero
        .heading
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let color = if index % 2 == 0 { theme.accent } else { theme.fg };
            Line::from(Span::styled(
                word.as_str(),
                Style::default().fg(color).bold(),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        chunks[1],
    );

    let subtitle = Paragraph::new(hero.subtitle.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(theme.fg);
    frame.render_widget(subtitle, chunks[3]);

    render_stats(frame, chunks[5], app);

    let hint = Paragraph::new("tab to explore the sections above")
        .alignment(Alignment::Center)
        .fg(theme.muted);
    frame.render_widget(hint, chunks[6]);
}

fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let stats = &app.content.hero.stats;
    if stats.is_empty() {
        return;
    }

    let columns =
        Layout::horizontal(vec![Constraint::Fill(1); stats.len()]).split(area);

    for (stat, column) in stats.iter().zip(columns.iter()) {
        let content = vec![
            Line::from(Span::styled(
                stat.value.as_str(),
                Style::default().fg(theme.accent).bold(),
            )),
            Line::from(Span::styled(
                stat.label.as_str(),
                Style::default().fg(theme.muted),
            )),
        ];
        let card = Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border),
        );
        frame.render_widget(card, *column);
    }
}
