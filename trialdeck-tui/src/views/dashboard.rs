//! Dashboard overview: headline metrics, top trials, coordination panels,
//! and the enrollment chart.

use crate::state::App;
use crate::theme::{agent_status_color, site_status_color, trial_status_color};
use crate::views::helpers::is_compact;
use crate::widgets::MetricTile;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};
use trialdeck_core::{fixtures, metrics};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let compact = is_compact(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(9),
        ])
        .split(area);

    render_metric_row(f, app, rows[0]);

    if compact {
        let stacked = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);
        render_trials_panel(f, app, stacked[0]);
        render_status_panels(f, app, stacked[1], true);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        render_trials_panel(f, app, columns[0]);
        render_status_panels(f, app, columns[1], false);
    }

    render_enrollment_chart(f, app, rows[2]);
}

fn render_metric_row(f: &mut Frame<'_>, app: &App, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    MetricTile {
        title: "Active Trials".to_string(),
        value: metrics::active_trial_count(app.store.trials()).to_string(),
        caption: "across all phases".to_string(),
        value_style: Style::default().fg(app.theme.primary),
        caption_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, tiles[0]);

    MetricTile {
        title: "Total Enrolled".to_string(),
        value: metrics::total_enrolled(app.store.trials()).to_string(),
        caption: "participants".to_string(),
        value_style: Style::default().fg(app.theme.success),
        caption_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, tiles[1]);

    MetricTile {
        title: "Active Sites".to_string(),
        value: metrics::active_site_count(app.store.sites()).to_string(),
        caption: "connected".to_string(),
        value_style: Style::default().fg(app.theme.info),
        caption_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, tiles[2]);

    MetricTile {
        title: "Agents Active".to_string(),
        value: metrics::active_agent_count(app.store.agents()).to_string(),
        caption: "online or processing".to_string(),
        value_style: Style::default().fg(app.theme.secondary),
        caption_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, tiles[3]);
}

fn render_trials_panel(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .store
        .trials()
        .iter()
        .take(4)
        .map(|trial| {
            let status_style =
                Style::default().fg(trial_status_color(trial.status, &app.theme));
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", trial.id),
                    Style::default().fg(app.theme.text_dim),
                ),
                Span::raw(format!(" {:<36}", trial.name)),
                Span::styled(format!("[{}] ", trial.status), status_style),
                Span::styled(
                    format!("{:>3}%", trial.progress),
                    Style::default().fg(app.theme.text),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title("Active Trials [2]")
            .borders(Borders::ALL),
    );
    f.render_widget(widget, area);
}

fn render_status_panels(f: &mut Frame<'_>, app: &App, area: Rect, compact: bool) {
    let direction = if compact {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let panels = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let agent_lines: Vec<Line> = app
        .store
        .agents()
        .iter()
        .map(|agent| {
            let status_style = Style::default().fg(agent_status_color(agent.status, &app.theme));
            Line::from(vec![
                Span::styled("● ", status_style),
                Span::raw(format!("{:<26}", agent.name)),
                Span::styled(agent.status.to_string(), status_style),
            ])
        })
        .collect();
    let agents_panel = Paragraph::new(agent_lines).block(
        Block::default()
            .title("Agent Status [4]")
            .borders(Borders::ALL),
    );
    f.render_widget(agents_panel, panels[0]);

    let site_lines: Vec<Line> = app
        .store
        .sites()
        .iter()
        .take(6)
        .map(|site| {
            let status_style = Style::default().fg(site_status_color(site.status, &app.theme));
            Line::from(vec![
                Span::styled("● ", status_style),
                Span::raw(format!("{:<22}", site.name)),
                Span::styled(site.status.label().to_string(), status_style),
            ])
        })
        .collect();
    let sites_panel = Paragraph::new(site_lines).block(
        Block::default()
            .title("Site Coordination [3]")
            .borders(Borders::ALL),
    );
    f.render_widget(sites_panel, panels[1]);
}

fn render_enrollment_chart(f: &mut Frame<'_>, app: &App, area: Rect) {
    let series = fixtures::enrollment_series();
    let data: Vec<(&str, u64)> = series
        .iter()
        .map(|point| (point.month, point.enrolled as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Enrollment Progress (cumulative)")
                .borders(Borders::ALL),
        )
        .data(&data)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(app.theme.primary))
        .value_style(Style::default().fg(app.theme.text));
    f.render_widget(chart, area);
}
