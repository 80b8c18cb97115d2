mod about;
mod contact;
mod explore;
mod faq;
mod home;
mod involved;
mod learn;
mod loading;
mod overview;
mod shell;
mod targets;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::{Screen, Section};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = frame.area();
    frame.render_widget(Block::default().bg(theme.bg), area);

    if app.screen == Screen::Loading {
        loading::render(frame, area, app);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .split(area);

    shell::render_header(frame, chunks[0], app);

    match app.section {
        Section::Home => home::render(frame, chunks[1], app),
        Section::Overview => overview::render(frame, chunks[1], app),
        Section::Targets => targets::render(frame, chunks[1], app),
        Section::Explore => explore::render(frame, chunks[1], app),
        Section::Learn => learn::render(frame, chunks[1], app),
        Section::GetInvolved => involved::render(frame, chunks[1], app),
        Section::Faq => faq::render(frame, chunks[1], app),
        Section::About => about::render(frame, chunks[1], app),
        Section::Contact => contact::render(frame, chunks[1], app),
    }

    shell::render_footer(frame, chunks[2], app);
}
