//! Help view: resources, FAQs, and support links.

use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const RESOURCES: [(&str, &str); 4] = [
    ("Documentation", "Comprehensive guides for using TrialDeck"),
    ("Video Tutorials", "Step-by-step video walkthroughs"),
    ("API Reference", "Technical documentation for integrations"),
    ("Contact Support", "Get help from our support team"),
];

const FAQS: [(&str, &str); 5] = [
    (
        "How do I add a new trial site?",
        "Open the Sites page and press 'n'. Fill in the required information including \
         location, principal investigator, and trial assignments.",
    ),
    (
        "What is the difference between A2A and MCP agents?",
        "A2A (Agent-to-Agent) agents handle direct communication between systems, while \
         MCP (Model Context Protocol) agents provide contextual AI assistance for \
         clinical decisions.",
    ),
    (
        "How often does data sync occur?",
        "By default, data syncs every 5 minutes. You can adjust this in the config file \
         or trigger manual syncs from the Agents page with 'y'.",
    ),
    (
        "How do I generate custom reports?",
        "Open the Reports page to review the report catalog. Custom report generation \
         is handled outside the dashboard.",
    ),
    (
        "Does anything persist between sessions?",
        "Only the active page. Trials, sites, agents, and patients reset to seed data \
         on every launch; press 'R' to reset mid-session.",
    ),
];

const SUPPORT_PROFILE_URL: &str = "https://www.linkedin.com/company/trialdeck";
const SUPPORT_EMAIL: &str = "mailto:support@trialdeck.dev";

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    let resource_lines: Vec<Line> = RESOURCES
        .iter()
        .map(|(title, description)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<18}", title),
                    Style::default()
                        .fg(app.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(app.theme.text_dim)),
            ])
        })
        .collect();
    let resources = Paragraph::new(resource_lines)
        .block(Block::default().title("Resources").borders(Borders::ALL));
    f.render_widget(resources, sections[0]);

    let mut faq_lines: Vec<Line> = Vec::new();
    for (question, answer) in FAQS {
        faq_lines.push(Line::from(Span::styled(
            question,
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )));
        faq_lines.push(Line::from(Span::styled(
            answer,
            Style::default().fg(app.theme.text_dim),
        )));
        faq_lines.push(Line::from(""));
    }
    let faqs = Paragraph::new(faq_lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Frequently Asked Questions")
                .borders(Borders::ALL),
        );
    f.render_widget(faqs, sections[1]);

    let contact = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Profile: ", Style::default().fg(app.theme.text_dim)),
            Span::styled(SUPPORT_PROFILE_URL, Style::default().fg(app.theme.primary)),
        ]),
        Line::from(vec![
            Span::styled("Email: ", Style::default().fg(app.theme.text_dim)),
            Span::styled(SUPPORT_EMAIL, Style::default().fg(app.theme.primary)),
        ]),
    ])
    .block(
        Block::default()
            .title("Need more help?")
            .borders(Borders::ALL),
    );
    f.render_widget(contact, sections[2]);
}
