use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Section;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let mode = if app.dark_mode { "dark" } else { "light" };

    let title_line = Line::from(vec![
        Span::styled(
            format!(" {}", app.content.site.title),
            Style::default().fg(theme.accent).bold(),
        ),
        Span::styled(
            format!("   [{} mode]", mode),
            Style::default().fg(theme.muted),
        ),
    ]);

    let mut tab_spans: Vec<Span> = vec![Span::raw(" ")];
    for (index, section) in Section::ALL.iter().enumerate() {
        let style = if *section == app.section {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection_bg)
                .bold()
        } else {
            Style::default().fg(theme.muted)
        };
        tab_spans.push(Span::styled(
            format!(" {}:{} ", index + 1, section.label()),
            style,
        ));
        tab_spans.push(Span::raw(" "));
    }

    let widget = Paragraph::new(vec![title_line, Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border),
    );
    frame.render_widget(widget, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let site = &app.content.site;

    let content = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} · {}", site.brand, site.footer_note),
                Style::default().fg(theme.fg),
            ),
            Span::styled(
                "   tab/1-9 sections · t theme · q quit",
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", site.copyright),
            Style::default().fg(theme.muted),
        )),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border),
    );
    frame.render_widget(widget, area);
}
