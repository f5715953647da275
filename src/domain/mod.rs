//! Domain Models
//!
//! Core data structures for the study group client.

pub mod config;
pub mod schedule;
pub mod study_group;

pub use config::*;
pub use study_group::*;
