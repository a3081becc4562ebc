//! Core scroll engine – layout math, position store, animation, and the
//! stack orchestrator, plus slider label placement.
//!
//! Nothing in this module depends on any TUI or rendering crate.  Hosts plug
//! in through [`metrics::LayoutMetricsProvider`] and [`frame::FrameScheduler`].

pub mod animator;
pub mod frame;
pub mod metrics;
pub mod slider;
pub mod stack;
pub mod store;
pub mod target;

pub use metrics::{Direction, ItemGeometry, LayoutMetrics, Orientation};
pub use stack::{ScrollRequest, ScrollStack, ScrollState, StackConfig};
