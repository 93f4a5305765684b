//! Metric tile widget for headline numbers.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct MetricTile {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub value_style: Style,
    pub caption_style: Style,
}

impl MetricTile {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.value.clone(),
                self.value_style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.caption.clone(), self.caption_style)),
        ];
        let widget = Paragraph::new(lines).block(
            Block::default()
                .title(self.title.as_str())
                .borders(Borders::ALL),
        );
        f.render_widget(widget, area);
    }
}
