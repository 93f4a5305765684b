//! Agent network view.

use crate::state::{App, InputMode};
use crate::theme::{agent_kind_color, agent_status_color};
use crate::views::helpers::{is_compact, list_detail_layout, search_bar_layout};
use crate::widgets::{DetailPanel, MetricTile, SearchBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use trialdeck_core::{metrics, Agent, AgentConfig, AgentKind};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    render_metric_row(f, app, rows[0]);

    let (search_area, body) = search_bar_layout(rows[1]);
    SearchBar {
        placeholder: "Search agents...",
        query: &app.agent_view.search_query,
        active: app.mode == InputMode::Search,
        active_style: Style::default().fg(app.theme.border_focus),
        inactive_style: Style::default().fg(app.theme.text_muted),
    }
    .render(f, search_area);

    let agents = app.visible_agents();
    if agents.is_empty() {
        let empty = Paragraph::new("No agents found matching your search.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("All Agents").borders(Borders::ALL));
        f.render_widget(empty, body);
        return;
    }

    let (list_area, detail_area) = list_detail_layout(body, is_compact(area));

    let items: Vec<ListItem> = agents
        .iter()
        .map(|agent| {
            let kind_style = Style::default().fg(agent_kind_color(agent.kind, &app.theme));
            let status_style = Style::default().fg(agent_status_color(agent.status, &app.theme));
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<28}", agent.name)),
                Span::styled(format!(" {:<4}", agent.kind), kind_style),
                Span::styled(format!(" ({})", agent.status), status_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if let Some(selected) = &app.agent_view.selected {
        if let Some(index) = agents.iter().position(|a| a.id.as_str() == selected.as_str()) {
            state.select(Some(index));
        }
    }

    let list = List::new(items)
        .block(Block::default().title("All Agents").borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let selected = app
        .agent_view
        .selected
        .as_ref()
        .and_then(|id| agents.iter().find(|a| a.id.as_str() == id.as_str()).copied());
    render_detail_panel(f, app, detail_area, selected);
}

fn render_metric_row(f: &mut Frame<'_>, app: &App, area: Rect) {
    let agents = app.store.agents();
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
        title: "A2A Agents".to_string(),
        value: metrics::agent_count_by_kind(agents, AgentKind::A2a).to_string(),
        caption: "agent-to-agent".to_string(),
        value_style: Style::default().fg(app.theme.warning),
        caption_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, tiles[0]);

    MetricTile {
        title: "MCP Agents".to_string(),
        value: metrics::agent_count_by_kind(agents, AgentKind::Mcp).to_string(),
        caption: "context protocol".to_string(),
        value_style: Style::default().fg(app.theme.primary),
        caption_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, tiles[1]);

    MetricTile {
        title: "Active Now".to_string(),
        value: metrics::active_agent_count(agents).to_string(),
        caption: "online or processing".to_string(),
        value_style: Style::default().fg(app.theme.success),
        caption_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, tiles[2]);

    MetricTile {
        title: "Messages Processed".to_string(),
        value: metrics::total_messages_processed(agents).to_string(),
        caption: "all agents".to_string(),
        value_style: Style::default().fg(app.theme.info),
        caption_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, tiles[3]);
}

fn render_detail_panel(f: &mut Frame<'_>, app: &App, area: Rect, agent: Option<&Agent>) {
    let mut fields = Vec::new();
    if let Some(agent) = agent {
        fields.push(("Agent ID", agent.id.to_string()));
        fields.push(("Name", agent.name.clone()));
        fields.push(("Type", agent.kind.to_string()));
        fields.push(("Status", agent.status.to_string()));
        fields.push(("Description", agent.description.clone()));
        fields.push(("Last message", agent.last_message.clone()));
        fields.push(("Messages", agent.messages_processed.to_string()));
        fields.push(("Uptime", agent.uptime.clone()));
        fields.push(("Capabilities", agent.capabilities.join(", ")));
        fields.push(("Configuration", configuration_summary(&agent.configuration)));
    }

    DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
    }
    .render(f, area);
}

fn configuration_summary(configuration: &Option<AgentConfig>) -> String {
    match configuration {
        None => "defaults".to_string(),
        Some(AgentConfig::A2a(config)) => format!(
            "A2A: timeout {}ms, {} retries, batch {}",
            config.timeout_ms, config.retry_attempts, config.batch_size
        ),
        Some(AgentConfig::Mcp(config)) => format!(
            "MCP: context {}, max tokens {}, temp {}",
            config.context_window, config.max_tokens, config.temperature
        ),
    }
}
