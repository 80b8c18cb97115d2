use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.content.site.brand.as_str(),
            Style::default().fg(theme.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Building Peace & Justice",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "any key to skip",
            Style::default().fg(theme.muted),
        )),
    ];

    let banner = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(banner, rows[1]);

    let bar_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(48),
        Constraint::Fill(1),
    ])
    .split(rows[2])[1];

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" Loading "),
        )
        .gauge_style(Style::default().fg(theme.accent))
        .percent(app.loading_progress())
        .label(format!("{}%", app.loading_progress()));
    frame.render_widget(gauge, bar_area);
}
