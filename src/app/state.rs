//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use super::event::EventSender;
use super::frames::TokioFrameScheduler;
use super::viewport::{ItemBox, TerminalViewport};
use crate::config::{clamp_item_count, AppConfig};
use crate::core::{ScrollRequest, ScrollStack, StackConfig};
use crate::ui::layout::AppLayout;

/// The stack as the terminal host drives it.
pub type Stack = ScrollStack<TerminalViewport, TokioFrameScheduler>;

/// One demo item shown in the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub label: String,
    pub size: ItemBox,
}

/// Deterministic demo items with varied natural sizes.
pub fn demo_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            label: format!("item{}", i + 1),
            size: ItemBox {
                width: 10 + (i * 7 % 13) as u16,
                height: 3 + (i * 5 % 4) as u16,
            },
        })
        .collect()
}

/// Top-level application state.
pub struct AppState {
    pub stack: Stack,
    pub items: Vec<Item>,
    /// Index of the focused item.
    pub focused: usize,
    pub config: AppConfig,
    /// Full terminal area, for mouse hit-testing.
    pub terminal_area: Rect,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, tx: EventSender) -> Self {
        let count = config
            .stack
            .item_spans
            .as_ref()
            .map_or(clamp_item_count(config.item_count), |spans| spans.len());
        let items = demo_items(count);
        let viewport = TerminalViewport::new(items.iter().map(|i| i.size).collect());
        let scheduler = TokioFrameScheduler::new(tx, config.frame_interval);
        let stack = ScrollStack::new(config.stack.clone(), viewport, scheduler);
        Self {
            stack,
            items,
            focused: 0,
            config,
            terminal_area: Rect::default(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Record a new terminal size and push the stack pane's inner size to
    /// the viewport provider.
    pub fn set_terminal_area(&mut self, area: Rect) {
        self.terminal_area = area;
        let inner = AppLayout::from_area(area).stack_inner();
        self.stack.provider_mut().set_area(inner.width, inner.height);
    }

    /// Move focus to `index` and let the stack scroll it into view.
    pub fn focus(&mut self, index: usize) -> Option<ScrollRequest> {
        if self.items.is_empty() {
            return None;
        }
        self.focused = index.min(self.items.len() - 1);
        self.stack.focus_item(self.focused)
    }

    /// Apply `edit` to the stack configuration and hand the new snapshot to
    /// the stack.
    pub fn update_stack_config(&mut self, edit: impl FnOnce(&mut StackConfig)) {
        let mut next = self.stack.config().clone();
        edit(&mut next);
        self.config.stack = next.clone();
        self.stack.set_config(next);
    }
}
