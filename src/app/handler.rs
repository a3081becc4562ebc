//! Input handling – maps key/mouse events to stack operations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::{Direction, Orientation};
use crate::ui::layout::AppLayout;
use crate::ui::stack_widget::{axis_position, item_at};

use super::state::AppState;

/// Cells moved per wheel notch.
const WHEEL_STEP: f64 = 3.0;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    let last = state.items.len().saturating_sub(1);

    match action {
        Action::Quit => state.should_quit = true,
        Action::FocusNext => {
            state.focus((state.focused + 1).min(last));
        }
        Action::FocusPrev => {
            state.focus(state.focused.saturating_sub(1));
        }
        Action::FocusFirst => {
            state.focus(0);
        }
        Action::FocusLast => {
            state.focus(last);
        }
        Action::PageForward => {
            let page = state.stack.state().viewport_span;
            state.stack.scroll_by(page);
        }
        Action::PageBack => {
            let page = state.stack.state().viewport_span;
            state.stack.scroll_by(-page);
        }
        Action::ToggleSmooth => {
            state.update_stack_config(|c| c.smooth_scrolling = !c.smooth_scrolling);
            let on = state.stack.config().smooth_scrolling;
            let label = if on { "on" } else { "off" };
            state.status_message = Some(format!("Smooth scrolling: {label}"));
        }
        Action::ToggleOrientation => {
            state.update_stack_config(|c| {
                c.orientation = match c.orientation {
                    Orientation::Horizontal => Orientation::Vertical,
                    Orientation::Vertical => Orientation::Horizontal,
                };
            });
            let focused = state.focused;
            state.focus(focused);
            state.status_message = Some(format!(
                "Orientation: {}",
                state.stack.config().orientation.label()
            ));
        }
        Action::ToggleDirection => {
            state.update_stack_config(|c| {
                c.direction = match c.direction {
                    Direction::Ltr => Direction::Rtl,
                    Direction::Rtl => Direction::Ltr,
                };
            });
            state.status_message = Some(format!(
                "Direction: {}",
                state.stack.config().direction.label()
            ));
        }
    }
}

/// Process a mouse event: wheel scrolls, left click focuses an item.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let inner = AppLayout::from_area(state.terminal_area).stack_inner();
    let Some(pos) = axis_position(
        inner,
        state.stack.config().orientation,
        state.stack.config().direction,
        mouse.column,
        mouse.row,
    ) else {
        return;
    };

    match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            state.stack.scroll_by(WHEEL_STEP);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            state.stack.scroll_by(-WHEEL_STEP);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = item_at(state.stack.item_spans(), state.stack.offset(), pos) {
                state.focus(index);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::layout::Rect;
    use tokio::sync::mpsc;

    fn app(orientation: Orientation) -> AppState {
        let mut config = AppConfig::default();
        config.stack.orientation = orientation;
        config.stack.smooth_scrolling = false;
        config.stack.next_item_peek = 0.0;
        config.stack.item_spans = Some(vec![10.0; 8]);
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(config, tx);
        // Stack pane inner area: 38 x 20.
        state.set_terminal_area(Rect::new(0, 0, 40, 25));
        state.stack.mount(Box::new(|| {}));
        state
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn focus_keys_scroll_the_stack() {
        let mut state = app(Orientation::Horizontal);
        assert_eq!(state.stack.state().viewport_span, 38.0);

        for _ in 0..4 {
            handle_key(&mut state, press(KeyCode::Right));
        }
        assert_eq!(state.focused, 4);
        // Item 4 spans 40..50; its trailing edge meets the viewport's.
        assert_eq!(state.stack.offset(), 12.0);

        handle_key(&mut state, press(KeyCode::Home));
        assert_eq!(state.focused, 0);
        assert_eq!(state.stack.offset(), 0.0);

        handle_key(&mut state, press(KeyCode::End));
        assert_eq!(state.focused, 7);
        assert_eq!(state.stack.offset(), 42.0);
    }

    #[test]
    fn focus_stops_at_the_ends() {
        let mut state = app(Orientation::Horizontal);
        handle_key(&mut state, press(KeyCode::Left));
        assert_eq!(state.focused, 0);
        handle_key(&mut state, press(KeyCode::End));
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.focused, 7);
    }

    #[test]
    fn toggles_update_the_stack_config() {
        let mut state = app(Orientation::Horizontal);
        handle_key(&mut state, press(KeyCode::Char('o')));
        assert_eq!(state.stack.config().orientation, Orientation::Vertical);
        assert_eq!(state.config.stack.orientation, Orientation::Vertical);
        assert_eq!(state.stack.state().viewport_span, 20.0);

        handle_key(&mut state, press(KeyCode::Char('d')));
        assert_eq!(state.stack.config().direction, Direction::Rtl);

        handle_key(&mut state, press(KeyCode::Char('q')));
        assert!(state.should_quit);
    }

    #[test]
    fn wheel_and_click() {
        let mut state = app(Orientation::Vertical);
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, wheel);
        assert_eq!(state.stack.offset(), WHEEL_STEP);

        // Row 19 is 18 cells into the viewport; scrolled by 3 that lands in item 2.
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 19,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, click);
        assert_eq!(state.focused, 2);
    }

    #[test]
    fn clicks_outside_the_stack_are_ignored() {
        let mut state = app(Orientation::Vertical);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 24,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut state, click);
        assert_eq!(state.focused, 0);
    }
}
