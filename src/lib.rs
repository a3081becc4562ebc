//! Scroll-positioning and smooth-scroll engine for stacks of items.
//!
//! [`core`] is the host-independent engine.  [`app`] and [`ui`] are a
//! terminal host built on it, used by the `stack-scroll` binary.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
