//! Patients view: a table when wide, a list with detail when compact.

use crate::state::{App, InputMode};
use crate::theme::patient_status_color;
use crate::views::helpers::{is_compact, list_detail_layout, search_bar_layout};
use crate::widgets::{DetailPanel, SearchBar};
use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame,
};
use trialdeck_core::Patient;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (search_area, body) = search_bar_layout(area);
    SearchBar {
        placeholder: "Search patients...",
        query: &app.patient_view.search_query,
        active: app.mode == InputMode::Search,
        active_style: Style::default().fg(app.theme.border_focus),
        inactive_style: Style::default().fg(app.theme.text_muted),
    }
    .render(f, search_area);

    let patients = app.visible_patients();
    if patients.is_empty() {
        let empty = Paragraph::new("No patients found matching your search.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Patients").borders(Borders::ALL));
        f.render_widget(empty, body);
        return;
    }

    if is_compact(area) {
        render_compact(f, app, body, &patients);
    } else {
        render_table(f, app, body, &patients);
    }
}

fn render_table(f: &mut Frame<'_>, app: &App, area: Rect, patients: &[&Patient]) {
    let header = Row::new(vec![
        "Subject", "Site", "Trial", "Status", "Enrolled", "Last", "Next", "Progress",
    ])
    .style(Style::default().fg(app.theme.text_dim));

    let rows: Vec<Row> = patients
        .iter()
        .map(|patient| {
            let status_style =
                Style::default().fg(patient_status_color(patient.status, &app.theme));
            Row::new(vec![
                Span::raw(patient.subject_id.clone()),
                Span::raw(patient.site.clone()),
                Span::raw(patient.trial.to_string()),
                Span::styled(patient.status.to_string(), status_style),
                Span::raw(format_date(Some(patient.enrollment_date))),
                Span::raw(format_date(Some(patient.last_visit))),
                Span::raw(format_date(patient.next_visit)),
                Span::raw(format!("{}%", patient.completion_rate)),
            ])
        })
        .collect();

    let mut state = TableState::default();
    if let Some(selected) = &app.patient_view.selected {
        if let Some(index) = patients.iter().position(|p| p.id.as_str() == selected.as_str()) {
            state.select(Some(index));
        }
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(18),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(13),
            Constraint::Length(13),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(Block::default().title("Patients").borders(Borders::ALL))
    .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_compact(f: &mut Frame<'_>, app: &App, area: Rect, patients: &[&Patient]) {
    let (list_area, detail_area) = list_detail_layout(area, true);

    let items: Vec<ListItem> = patients
        .iter()
        .map(|patient| {
            let status_style =
                Style::default().fg(patient_status_color(patient.status, &app.theme));
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<14}", patient.subject_id)),
                Span::styled(
                    format!(" {:<18}", patient.site),
                    Style::default().fg(app.theme.text_dim),
                ),
                Span::styled(format!(" [{}]", patient.status), status_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = &app.patient_view.selected {
        if let Some(index) = patients.iter().position(|p| p.id.as_str() == selected.as_str()) {
            state.select(Some(index));
        }
    }

    let list = List::new(items)
        .block(Block::default().title("Patients").borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut fields = Vec::new();
    if let Some(patient) = app
        .patient_view
        .selected
        .as_ref()
        .and_then(|id| patients.iter().find(|p| p.id.as_str() == id.as_str()))
    {
        fields.push(("Subject", patient.subject_id.clone()));
        fields.push(("Site", patient.site.clone()));
        fields.push(("Trial", patient.trial.to_string()));
        fields.push(("Status", patient.status.to_string()));
        fields.push(("Enrolled", format_date(Some(patient.enrollment_date))));
        fields.push(("Last visit", format_date(Some(patient.last_visit))));
        fields.push(("Next visit", format_date(patient.next_visit)));
        fields.push(("Progress", format!("{}%", patient.completion_rate)));
    }

    DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
    }
    .render(f, detail_area);
}

fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => "-".to_string(),
    }
}
