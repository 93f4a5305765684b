//! View rendering dispatch.

pub mod agents;
pub mod dashboard;
pub mod help;
pub mod helpers;
pub mod patients;
pub mod reports;
pub mod settings;
pub mod sites;
pub mod trials;

pub use helpers::{centered_rect, is_compact, list_detail_layout, search_bar_layout};

use crate::nav::Page;
use crate::notifications::NotificationLevel;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_page {
        Page::Dashboard => dashboard::render(f, app, layout[1]),
        Page::Trials => trials::render(f, app, layout[1]),
        Page::Sites => sites::render(f, app, layout[1]),
        Page::Agents => agents::render(f, app, layout[1]),
        Page::Patients => patients::render(f, app, layout[1]),
        Page::Reports => reports::render(f, app, layout[1]),
        Page::Settings => settings::render(f, app, layout[1]),
        Page::Help => help::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if let Some(form) = &app.form {
        let overlay = centered_rect(f.size(), 70, 70);
        form.render(f, overlay, &app.theme);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let title = format!(
        "TRIALDECK | {} | {}",
        app.active_page.title(),
        app.active_page.description()
    );
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let help = match app.active_page {
        Page::Agents => {
            "j/k move • t start/pause • x stop • y sync all • c configure • n new • / search • q quit"
        }
        Page::Trials | Page::Sites | Page::Patients => {
            "j/k move • n new • / search • Tab switch page • 1-8 jump • q quit"
        }
        _ => "Tab switch page • 1-8 jump • R reset session • ? help • q quit",
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "OK",
        };
        let color = match note.level {
            NotificationLevel::Info => app.theme.info,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
