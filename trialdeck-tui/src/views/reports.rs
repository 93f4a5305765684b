//! Reports catalog view. Display only; generation is out of scope.

use crate::state::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use trialdeck_core::fixtures;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lines: Vec<Line> = fixtures::report_catalog()
        .iter()
        .map(|report| {
            Line::from(vec![
                Span::raw(format!("{:<30}", report.name)),
                Span::styled(
                    format!(" {:<14}", report.category),
                    Style::default().fg(app.theme.secondary),
                ),
                Span::styled(
                    format!(
                        " last generated {}",
                        report.last_generated.format("%b %d, %Y")
                    ),
                    Style::default().fg(app.theme.text_dim),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title("Available Reports")
            .borders(Borders::ALL),
    );
    f.render_widget(widget, area);
}
