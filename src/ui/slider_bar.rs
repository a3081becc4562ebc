//! Scroll position slider drawn under the stack.
//!
//! The thumb and its caption are placed with [`SliderLabel`], so the bar
//! exercises the same inset math a slider label uses.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

use crate::core::slider::{LabelPosition, LabelSides, SliderConfiguration, SliderLabel};
use crate::core::{Direction, Orientation, ScrollState};

use super::theme::Theme;

/// Column (relative to the bar's left edge) a label position maps to.
pub fn thumb_column(pos: &LabelPosition, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let last = i64::from(width - 1);
    let from_lead = (pos.leading_pct.clamp(0, 100) * last + 50) / 100;
    match pos.sides {
        LabelSides::RightLeft => (last - from_lead) as u16,
        LabelSides::LeftRight | LabelSides::TopBottom => from_lead as u16,
    }
}

pub struct SliderBar {
    label: SliderLabel,
    caption: String,
}

impl SliderBar {
    /// Build the bar for a stack's scroll state.
    pub fn for_scroll(state: &ScrollState, direction: Direction) -> Self {
        let config = SliderConfiguration {
            min: 0.0,
            max: state.max_scroll_distance,
            direction,
            orientation: Orientation::Horizontal,
            disabled: state.max_scroll_distance <= 0.0,
        };
        // An rtl label measures from the right, so offset 0 sits at the
        // right-hand end of the track.
        Self {
            label: SliderLabel::new(state.current_offset, config),
            caption: format!(
                "{:.0}/{:.0}{}",
                state.current_offset,
                state.max_scroll_distance,
                if state.is_animating { " ~" } else { "" }
            ),
        }
    }

    /// Leave the thumb off the track; the caption is still drawn.
    pub fn hide_mark(mut self, hide: bool) -> Self {
        self.label = self.label.with_hidden_mark(hide);
        self
    }
}

impl Widget for SliderBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let track_y = area.y;
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut(Position::new(x, track_y)) {
                cell.set_char('─').set_style(Theme::track_style());
            }
        }
        if self.label.is_disabled() {
            return;
        }

        let pos = self.label.position();
        let col = area.x + thumb_column(&pos, area.width);
        if !self.label.hides_mark() {
            if let Some(cell) = buf.cell_mut(Position::new(col, track_y)) {
                cell.set_char('●').set_style(Theme::thumb_style());
            }
        }

        if area.height > 1 {
            let len = self.caption.chars().count() as u16;
            let max_x = area.x + area.width.saturating_sub(len);
            let x = col.saturating_sub(len / 2).clamp(area.x, max_x.max(area.x));
            buf.set_string(x, track_y + 1, &self.caption, Theme::thumb_style());
        }
    }
}
