//! Layout helpers – split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;

/// Primary screen layout: stack pane, slider row, and a bottom status bar.
pub struct AppLayout {
    pub stack_area: Rect,
    pub slider_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // stack pane
                Constraint::Length(2), // scroll position slider
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            stack_area: chunks[0],
            slider_area: chunks[1],
            status_area: chunks[2],
        }
    }

    /// The stack pane minus its border: the scroll viewport.
    pub fn stack_inner(&self) -> Rect {
        Block::bordered().inner(self.stack_area)
    }
}

/// Is `(col, row)` inside `rect`?
pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
