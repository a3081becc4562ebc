//! UI / rendering layer – everything that touches Ratatui widgets.
//!
//! Widgets read the stack's state; they never mutate it.

pub mod layout;
pub mod slider_bar;
pub mod stack_widget;
pub mod theme;
