//! Search bar widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SearchBar<'a> {
    pub placeholder: &'a str,
    pub query: &'a str,
    pub active: bool,
    pub active_style: Style,
    pub inactive_style: Style,
}

impl<'a> SearchBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let (text, style) = if self.query.is_empty() && !self.active {
            (self.placeholder.to_string(), self.inactive_style)
        } else if self.active {
            (format!("{}▏", self.query), self.active_style)
        } else {
            (self.query.to_string(), self.active_style)
        };
        let border_style = if self.active {
            self.active_style
        } else {
            self.inactive_style
        };
        let widget = Paragraph::new(Line::from(Span::styled(text, style))).block(
            Block::default()
                .title("Search [/]")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(widget, area);
    }
}
