//! Tokio-backed frame source for the scroll animator.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use super::event::{AppEvent, EventSender};
use crate::core::frame::{CancelToken, FrameScheduler};

/// Sends [`AppEvent::Frame`] at a fixed cadence until cancelled.
#[derive(Debug, Clone)]
pub struct TokioFrameScheduler {
    tx: EventSender,
    frame_interval: Duration,
}

impl TokioFrameScheduler {
    pub fn new(tx: EventSender, frame_interval: Duration) -> Self {
        Self {
            tx,
            frame_interval: frame_interval.max(Duration::from_millis(1)),
        }
    }
}

impl FrameScheduler for TokioFrameScheduler {
    fn schedule(&mut self, token: CancelToken) {
        let tx = self.tx.clone();
        let period = self.frame_interval;
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; frames start one
            // interval after scheduling.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if token.is_cancelled() {
                    break;
                }
                if tx.send(AppEvent::Frame).is_err() {
                    break;
                }
            }
        });
    }
}
