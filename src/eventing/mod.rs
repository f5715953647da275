//! Eventing
//!
//! Messages flowing from controllers to the front end.

pub mod notice;

pub use notice::*;
