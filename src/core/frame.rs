//! Per-frame scheduling, modelled as an explicit task with a cancellation
//! token.
//!
//! The host owns the actual frame source (a timer, a vsync callback, a test
//! harness).  The engine only asks it to start delivering frames and keeps
//! the [`FrameTask`] so it can stop them again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag.  Cancelling is idempotent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Handle to a running frame source.  Dropping it does *not* stop the
/// frames; call [`FrameTask::cancel`].
#[derive(Debug)]
pub struct FrameTask {
    token: CancelToken,
}

impl FrameTask {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Host capability that delivers repeated frame callbacks.
pub trait FrameScheduler {
    /// Begin delivering frames until `token` is cancelled.  The host routes
    /// each frame back to the stack as `on_animation_frame`.
    fn schedule(&mut self, token: CancelToken);
}

/// Ask `scheduler` for frames and hand back the handle that stops them.
pub fn start_frames<S: FrameScheduler + ?Sized>(scheduler: &mut S) -> FrameTask {
    let token = CancelToken::new();
    scheduler.schedule(token.clone());
    FrameTask { token }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        tokens: Vec<CancelToken>,
    }

    impl FrameScheduler for Recorder {
        fn schedule(&mut self, token: CancelToken) {
            self.tokens.push(token);
        }
    }

    #[test]
    fn cancel_reaches_the_scheduler_side() {
        let mut rec = Recorder::default();
        let task = start_frames(&mut rec);
        assert!(!rec.tokens[0].is_cancelled());
        task.cancel();
        assert!(rec.tokens[0].is_cancelled());
    }

    #[test]
    fn cancelling_twice_is_a_no_op() {
        let mut rec = Recorder::default();
        let task = start_frames(&mut rec);
        task.cancel();
        task.cancel();
        assert!(task.is_cancelled());
        assert_eq!(rec.tokens.len(), 1);
    }
}
