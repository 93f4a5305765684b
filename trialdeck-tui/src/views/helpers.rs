//! Common view rendering helpers.
//!
//! Every page renders through one parametrized layout driven by a single
//! `compact` boolean: two columns when the terminal is wide, stacked when
//! it is narrow.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the pages switch to the stacked compact layout.
pub const COMPACT_WIDTH: u16 = 100;

pub fn is_compact(area: Rect) -> bool {
    area.width < COMPACT_WIDTH
}

/// Split an area into list and detail regions. Side by side when wide,
/// stacked when compact.
pub fn list_detail_layout(area: Rect, compact: bool) -> (Rect, Rect) {
    if compact {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (chunks[0], chunks[1])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (chunks[0], chunks[1])
    }
}

/// Split off a search bar row at the top of a page body.
pub fn search_bar_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// A centered overlay rectangle, for modal forms.
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_threshold() {
        assert!(is_compact(Rect::new(0, 0, 80, 40)));
        assert!(!is_compact(Rect::new(0, 0, 140, 40)));
    }

    #[test]
    fn test_wide_layout_splits_horizontally() {
        let area = Rect::new(0, 0, 100, 40);
        let (list, detail) = list_detail_layout(area, false);
        assert_eq!(list.height, detail.height);
        assert!(list.width > detail.width);
    }

    #[test]
    fn test_compact_layout_stacks() {
        let area = Rect::new(0, 0, 80, 40);
        let (list, detail) = list_detail_layout(area, true);
        assert_eq!(list.width, detail.width);
        assert!(detail.y > list.y);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(area, 60, 70);
        assert!(inner.x >= area.x && inner.right() <= area.right());
        assert!(inner.y >= area.y && inner.bottom() <= area.bottom());
    }
}
