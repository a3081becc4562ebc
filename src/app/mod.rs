//! Terminal host – state, event loop plumbing, and input handling that
//! drive the scroll engine.

pub mod event;
pub mod frames;
pub mod handler;
pub mod state;
pub mod viewport;
