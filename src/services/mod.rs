//! Services Layer
//!
//! Backend access and the async runtime bridge.

pub mod api;
pub mod runtime;

pub use api::{ApiReply, HttpStudyGroupApi, StudyGroupApi};
