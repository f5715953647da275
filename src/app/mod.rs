//! Application Layer
//!
//! Contains app initialization and navigation.

pub mod application;
pub mod navigation;
