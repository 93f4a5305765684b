//! Settings view: profile and preferences from the loaded config.

use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let label = Style::default().fg(app.theme.text_dim);
    let value = Style::default().fg(app.theme.text);

    let profile = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Full name: ", label),
            Span::styled(app.config.profile.full_name.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Email: ", label),
            Span::styled(app.config.profile.email.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Role: ", label),
            Span::styled(app.config.profile.role.clone(), value),
        ]),
    ])
    .block(Block::default().title("Profile").borders(Borders::ALL));
    f.render_widget(profile, sections[0]);

    let prefs = &app.config.notifications;
    let notifications = Paragraph::new(vec![
        toggle_line("Enrollment alerts", prefs.enrollment_alerts, app),
        toggle_line("Site issues", prefs.site_issues, app),
        toggle_line("Agent status changes", prefs.agent_status_changes, app),
        toggle_line("Weekly digest", prefs.weekly_digest, app),
    ])
    .block(
        Block::default()
            .title("Notifications")
            .borders(Borders::ALL),
    );
    f.render_widget(notifications, sections[1]);

    let integrations = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("A2A Protocol: ", label),
            Span::styled("connected", Style::default().fg(app.theme.success)),
        ]),
        Line::from(vec![
            Span::styled("MCP Integration: ", label),
            Span::styled("connected", Style::default().fg(app.theme.success)),
        ]),
        Line::from(vec![
            Span::styled("Auto-sync: ", label),
            Span::styled(
                format!("every {} ms", app.config.refresh_interval_ms),
                value,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Settings are read from the config file; edit it and restart to change them.",
            Style::default().fg(app.theme.text_muted),
        )),
    ])
    .block(Block::default().title("Integrations").borders(Borders::ALL));
    f.render_widget(integrations, sections[2]);
}

fn toggle_line<'a>(name: &'a str, enabled: bool, app: &App) -> Line<'a> {
    let (marker, style) = if enabled {
        ("[on] ", Style::default().fg(app.theme.success))
    } else {
        ("[off] ", Style::default().fg(app.theme.text_muted))
    };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(name, Style::default().fg(app.theme.text)),
    ])
}
