//! Ratatui widget that renders the item stack at its current scroll offset.
//!
//! Items are laid out back to back along the stack's axis.  An item that is
//! partly scrolled out of the viewport is drawn clipped, with the border on
//! the cut side left off.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::Item;
use crate::core::{Direction, Orientation};

use super::theme::Theme;

/// Visible part of one item along the axis, in viewport cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    /// Start and end along the axis, possibly outside `0..axis_len`.
    pub start: i32,
    pub end: i32,
}

/// Place every item along the axis relative to the viewport at `offset`.
pub fn slots(spans: &[f64], offset: f64) -> Vec<Slot> {
    let mut cumulative = 0.0;
    spans
        .iter()
        .enumerate()
        .map(|(index, &span)| {
            let start = (cumulative - offset).round() as i32;
            cumulative += span.max(0.0);
            let end = (cumulative - offset).round() as i32;
            Slot { index, start, end }
        })
        .collect()
}

/// Index of the item at `pos` cells into the viewport.
pub fn item_at(spans: &[f64], offset: f64, pos: u16) -> Option<usize> {
    let pos = i32::from(pos);
    slots(spans, offset)
        .into_iter()
        .find(|s| pos >= s.start && pos < s.end)
        .map(|s| s.index)
}

/// Distance of a screen cell from the viewport's leading edge, or `None`
/// when the cell is outside the viewport.
pub fn axis_position(
    inner: Rect,
    orientation: Orientation,
    direction: Direction,
    col: u16,
    row: u16,
) -> Option<u16> {
    if !super::layout::contains(inner, col, row) {
        return None;
    }
    Some(match (orientation, direction) {
        (Orientation::Vertical, _) => row - inner.y,
        (Orientation::Horizontal, Direction::Ltr) => col - inner.x,
        (Orientation::Horizontal, Direction::Rtl) => inner.x + inner.width - 1 - col,
    })
}

/// Screen rectangle for the axis range `start..end` (already clipped).
fn slot_rect(
    inner: Rect,
    orientation: Orientation,
    direction: Direction,
    start: u16,
    end: u16,
) -> Rect {
    let len = end - start;
    match (orientation, direction) {
        (Orientation::Vertical, _) => Rect::new(inner.x, inner.y + start, inner.width, len),
        (Orientation::Horizontal, Direction::Ltr) => {
            Rect::new(inner.x + start, inner.y, len, inner.height)
        }
        (Orientation::Horizontal, Direction::Rtl) => {
            Rect::new(inner.x + inner.width - end, inner.y, len, inner.height)
        }
    }
}

/// Border sides that face the start / end of the axis.
fn edge_borders(orientation: Orientation, direction: Direction) -> (Borders, Borders) {
    match (orientation, direction) {
        (Orientation::Vertical, _) => (Borders::TOP, Borders::BOTTOM),
        (Orientation::Horizontal, Direction::Ltr) => (Borders::LEFT, Borders::RIGHT),
        (Orientation::Horizontal, Direction::Rtl) => (Borders::RIGHT, Borders::LEFT),
    }
}

// ───────────────────────────────────────── widget ────────────

/// The stack widget itself – created fresh each frame.
pub struct StackWidget<'a> {
    items: &'a [Item],
    spans: &'a [f64],
    offset: f64,
    focused: usize,
    orientation: Orientation,
    direction: Direction,
    scrolling: bool,
}

impl<'a> StackWidget<'a> {
    pub fn new(items: &'a [Item], spans: &'a [f64], offset: f64) -> Self {
        Self {
            items,
            spans,
            offset,
            focused: 0,
            orientation: Orientation::Horizontal,
            direction: Direction::Ltr,
            scrolling: false,
        }
    }

    pub fn focused(mut self, index: usize) -> Self {
        self.focused = index;
        self
    }

    pub fn layout(mut self, orientation: Orientation, direction: Direction) -> Self {
        self.orientation = orientation;
        self.direction = direction;
        self
    }

    /// Mark the stack as overflowing its viewport.
    pub fn scrolling(mut self, scrolling: bool) -> Self {
        self.scrolling = scrolling;
        self
    }
}

impl Widget for StackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border_style) = if self.scrolling {
            (" stack · scrolling ", Theme::scrolling_border_style())
        } else {
            (" stack ", Theme::border_style())
        };
        let frame = Block::bordered()
            .title(Span::styled(title, Theme::title_style()))
            .border_style(border_style);
        let inner = frame.inner(area);
        frame.render(area, buf);

        let axis_len = match self.orientation {
            Orientation::Vertical => inner.height,
            Orientation::Horizontal => inner.width,
        };
        let (lead_border, trail_border) = edge_borders(self.orientation, self.direction);

        for slot in slots(self.spans, self.offset) {
            if slot.end <= 0 {
                continue;
            }
            if slot.start >= i32::from(axis_len) {
                break;
            }
            let Some(item) = self.items.get(slot.index) else {
                break;
            };
            let vis_start = slot.start.max(0) as u16;
            let vis_end = slot.end.min(i32::from(axis_len)) as u16;
            if vis_end <= vis_start {
                continue;
            }

            let lead_clipped = slot.start < 0;
            let trail_clipped = slot.end > i32::from(axis_len);
            let mut borders = Borders::ALL;
            if lead_clipped {
                borders -= lead_border;
            }
            if trail_clipped {
                borders -= trail_border;
            }

            let style = if slot.index == self.focused {
                Theme::focused_item_style()
            } else {
                Theme::item_style()
            };
            let mut block = Block::default().borders(borders).border_style(style);
            if borders.contains(Borders::TOP) {
                block = block.title(Span::styled(format!(" {} ", item.label), style));
            }

            let rect = slot_rect(inner, self.orientation, self.direction, vis_start, vis_end);
            let body = block.inner(rect);
            block.render(rect, buf);
            if body.height > 0 && body.width > 0 {
                let span = self.spans.get(slot.index).copied().unwrap_or(0.0);
                Paragraph::new(Line::from(Span::styled(format!("{span}"), style)))
                    .render(body, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::demo_items;

    fn text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn slots_shift_with_offset() {
        let s = slots(&[10.0, 20.0, 5.0], 15.0);
        assert_eq!(s[0], Slot { index: 0, start: -15, end: -5 });
        assert_eq!(s[1], Slot { index: 1, start: -5, end: 15 });
        assert_eq!(s[2], Slot { index: 2, start: 15, end: 20 });
    }

    #[test]
    fn hit_test_accounts_for_offset() {
        let spans = [10.0, 20.0, 5.0];
        assert_eq!(item_at(&spans, 0.0, 3), Some(0));
        assert_eq!(item_at(&spans, 15.0, 3), Some(1));
        assert_eq!(item_at(&spans, 15.0, 16), Some(2));
        assert_eq!(item_at(&spans, 15.0, 40), None);
    }

    #[test]
    fn rtl_axis_runs_from_the_right() {
        let inner = Rect::new(1, 1, 20, 5);
        assert_eq!(axis_position(inner, Orientation::Horizontal, Direction::Rtl, 20, 2), Some(0));
        assert_eq!(axis_position(inner, Orientation::Horizontal, Direction::Ltr, 20, 2), Some(19));
        assert_eq!(axis_position(inner, Orientation::Vertical, Direction::Rtl, 5, 3), Some(2));
        assert_eq!(axis_position(inner, Orientation::Vertical, Direction::Ltr, 0, 0), None);
    }

    #[test]
    fn renders_visible_items_only() {
        let items = demo_items(3);
        let spans = [12.0, 12.0, 12.0];
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        StackWidget::new(&items, &spans, 0.0)
            .focused(1)
            .scrolling(true)
            .render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains("item1"));
        assert!(out.contains("item2"));
        assert!(!out.contains("item3"));
        assert!(out.contains("scrolling"));
    }

    #[test]
    fn scrolled_vertical_stack_drops_leading_items() {
        let items = demo_items(4);
        let spans = [3.0, 3.0, 3.0, 3.0];
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        StackWidget::new(&items, &spans, 6.0)
            .layout(Orientation::Vertical, Direction::Ltr)
            .render(area, &mut buf);
        let out = text(&buf);
        assert!(!out.contains("item1"));
        assert!(!out.contains("item2"));
        assert!(out.contains("item3"));
        assert!(out.contains("item4"));
    }
}
