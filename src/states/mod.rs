//! Global States
//!
//! Application-wide persisted state.

mod app;

pub use app::*;
