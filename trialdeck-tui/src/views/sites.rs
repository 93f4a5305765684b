//! Sites list view.

use crate::state::{App, InputMode};
use crate::theme::{site_status_color, utilization_color};
use crate::views::helpers::{is_compact, list_detail_layout, search_bar_layout};
use crate::widgets::{DetailPanel, ProgressBar, SearchBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use trialdeck_core::{metrics, Site};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (search_area, body) = search_bar_layout(area);
    SearchBar {
        placeholder: "Search sites...",
        query: &app.site_view.search_query,
        active: app.mode == InputMode::Search,
        active_style: Style::default().fg(app.theme.border_focus),
        inactive_style: Style::default().fg(app.theme.text_muted),
    }
    .render(f, search_area);

    let sites = app.visible_sites();
    if sites.is_empty() {
        let empty = Paragraph::new("No sites found matching your search.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Sites").borders(Borders::ALL));
        f.render_widget(empty, body);
        return;
    }

    let (list_area, detail_area) = list_detail_layout(body, is_compact(area));

    let items: Vec<ListItem> = sites
        .iter()
        .map(|site| {
            let status_style = Style::default().fg(site_status_color(site.status, &app.theme));
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", site.name)),
                Span::styled(
                    format!(" {:<18}", site.location),
                    Style::default().fg(app.theme.text_dim),
                ),
                Span::styled(format!(" [{}]", site.status.label()), status_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = &app.site_view.selected {
        if let Some(index) = sites.iter().position(|s| s.id.as_str() == selected.as_str()) {
            state.select(Some(index));
        }
    }

    let list = List::new(items)
        .block(Block::default().title("Sites").borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let selected = app
        .site_view
        .selected
        .as_ref()
        .and_then(|id| sites.iter().find(|s| s.id.as_str() == id.as_str()).copied());
    render_detail_panel(f, app, detail_area, selected);
}

fn render_detail_panel(f: &mut Frame<'_>, app: &App, area: Rect, site: Option<&Site>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut fields = Vec::new();
    if let Some(site) = site {
        fields.push(("Site ID", site.id.to_string()));
        fields.push(("Name", site.name.clone()));
        fields.push(("Location", site.location.clone()));
        fields.push(("Status", site.status.label().to_string()));
        fields.push(("Last sync", site.last_sync.clone()));
        fields.push((
            "Enrollment",
            format!("{} / {}", site.enrolled, site.capacity),
        ));
        fields.push(("PI", site.principal_investigator.clone()));
        let trials: Vec<&str> = site.trials.iter().map(|t| t.as_str()).collect();
        fields.push(("Trials", trials.join(", ")));
    }

    DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
    }
    .render(f, chunks[0]);

    if let Some(site) = site {
        let percent = metrics::capacity_percent(site.enrolled, site.capacity);
        let color = utilization_color(percent as f32, &app.theme);
        ProgressBar {
            title: format!("Capacity {}%", percent),
            value: site.enrolled as f32,
            max: site.capacity as f32,
            thresholds: (70.0, 90.0),
            low_style: Style::default().fg(app.theme.success),
            mid_style: Style::default().fg(app.theme.warning),
            high_style: Style::default().fg(color),
        }
        .render(f, chunks[1]);
    }
}
