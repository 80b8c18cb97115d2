use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, ContactField};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_channels(frame, chunks[0], app);

    if app.contact.sent() {
        render_confirmation(frame, chunks[1], app);
    } else {
        render_form(frame, chunks[1], app);
    }

    let hint = if app.contact.sent() {
        ""
    } else if app.contact.editing {
        "type to fill the field  ·  tab/down next  ·  enter next (sends from Message)  ·  esc done"
    } else {
        "enter to edit the form  ·  every field is required before sending"
    };
    let controls = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(theme.muted);
    frame.render_widget(controls, chunks[2]);
}

fn render_channels(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let mut content = vec![Line::from(Span::styled(
        "Get in Touch",
        Style::default().fg(theme.accent).bold(),
    ))];
    for channel in &app.content.contact.channels {
        content.push(Line::from(vec![
            Span::styled(
                format!("{}: ", channel.label),
                Style::default().fg(theme.muted),
            ),
            Span::styled(channel.value.as_str(), Style::default().fg(theme.fg)),
        ]));
    }

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let form = &app.contact;

    let mut lines = vec![Line::from("")];
    for field in ContactField::ALL {
        let focused = form.focus == field;
        let marker = if focused { ">" } else { " " };
        let label_style = if focused {
            Style::default().fg(theme.accent).bold()
        } else {
            Style::default().fg(theme.muted)
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), label_style),
            Span::styled(format!("{:<9}", field.label()), label_style),
            Span::styled(form.field(field), Style::default().fg(theme.fg)),
        ];
        if focused && form.editing {
            spans.push(Span::styled("_", Style::default().fg(theme.accent)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_confirmation(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Message sent!",
            Style::default().fg(theme.success).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thank you for reaching out. We'll get back to you soon.",
            Style::default().fg(theme.fg),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
