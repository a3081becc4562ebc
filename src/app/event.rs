//! Event abstraction for the host loop.
//!
//! Terminal input, animation frames, and viewport resize notifications all
//! arrive on one channel so the main loop handles them strictly in order.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// The stack's viewport changed size; re-measure.
    ViewportResized,
    /// One animation frame is due.
    Frame,
    Tick,
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Spawns a background task that polls the terminal and forwards events to
/// `tx`.  Stops once the receiver is dropped.
pub fn spawn_event_reader(tick_rate: Duration, tx: EventSender) {
    tokio::task::spawn_blocking(move || loop {
        // Poll with the tick rate so Tick events flow even when idle.
        let has_event = event::poll(tick_rate).unwrap_or(false);
        let app_event = if has_event {
            match event::read() {
                Ok(CtEvent::Key(k)) => AppEvent::Key(k),
                Ok(CtEvent::Mouse(m)) => AppEvent::Mouse(m),
                Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                _ => continue,
            }
        } else {
            AppEvent::Tick
        };
        if tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });
}
