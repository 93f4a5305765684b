//! Trials list view.

use crate::state::{App, InputMode};
use crate::theme::trial_status_color;
use crate::views::helpers::{is_compact, list_detail_layout, search_bar_layout};
use crate::widgets::{DetailPanel, ProgressBar, SearchBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use trialdeck_core::Trial;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (search_area, body) = search_bar_layout(area);
    SearchBar {
        placeholder: "Search trials...",
        query: &app.trial_view.search_query,
        active: app.mode == InputMode::Search,
        active_style: Style::default().fg(app.theme.border_focus),
        inactive_style: Style::default().fg(app.theme.text_muted),
    }
    .render(f, search_area);

    let trials = app.visible_trials();
    if trials.is_empty() {
        let empty = Paragraph::new("No trials found matching your search.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Trials").borders(Borders::ALL));
        f.render_widget(empty, body);
        return;
    }

    let (list_area, detail_area) = list_detail_layout(body, is_compact(area));

    let items: Vec<ListItem> = trials
        .iter()
        .map(|trial| {
            let status_style =
                Style::default().fg(trial_status_color(trial.status, &app.theme));
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", trial.id), Style::default().fg(app.theme.text_dim)),
                Span::raw(format!(" {:<40}", trial.name)),
                Span::styled(format!(" [{}]", trial.status), status_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = &app.trial_view.selected {
        if let Some(index) = trials.iter().position(|t| t.id.as_str() == selected.as_str()) {
            state.select(Some(index));
        }
    }

    let list = List::new(items)
        .block(Block::default().title("Trials").borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let selected = app
        .trial_view
        .selected
        .as_ref()
        .and_then(|id| trials.iter().find(|t| t.id.as_str() == id.as_str()).copied());
    render_detail_panel(f, app, detail_area, selected);
}

fn render_detail_panel(f: &mut Frame<'_>, app: &App, area: Rect, trial: Option<&Trial>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut fields = Vec::new();
    if let Some(trial) = trial {
        fields.push(("Trial ID", trial.id.to_string()));
        fields.push(("Name", trial.name.clone()));
        fields.push(("Phase", trial.phase.clone()));
        fields.push(("Status", trial.status.to_string()));
        fields.push(("Sponsor", trial.sponsor.clone()));
        fields.push(("Indication", trial.indication.clone()));
        fields.push(("Protocol", trial.protocol.clone()));
        fields.push((
            "Enrollment",
            format!("{} / {}", trial.enrolled, trial.target),
        ));
        fields.push(("Sites", trial.sites.to_string()));
        fields.push(("Started", trial.start_date.format("%b %Y").to_string()));
        if let Some(end) = trial.end_date {
            fields.push(("Ends", end.format("%b %Y").to_string()));
        }
    }

    DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
    }
    .render(f, chunks[0]);

    if let Some(trial) = trial {
        ProgressBar {
            title: format!("Progress {}%", trial.progress),
            value: trial.progress as f32,
            max: 100.0,
            thresholds: (50.0, 85.0),
            low_style: Style::default().fg(app.theme.warning),
            mid_style: Style::default().fg(app.theme.primary),
            high_style: Style::default().fg(app.theme.success),
        }
        .render(f, chunks[1]);
    }
}
