//! Tutor Desk Client Library
//!
//! This crate provides the application logic for the Tutor Desk client:
//! composing a study group, submitting it to the tutoring backend, and
//! moving on to the group's details page.

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod states;
