//! Notice - User-Facing Messages
//!
//! Replaces blocking alert dialogs: the controller raises a notice through a
//! [`Notifier`], and the front end decides how to show it.

use chrono::{DateTime, Local};

/// Receives user-facing messages
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// A message raised for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl Notice {
    /// Create a notice with current timestamp
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}

/// Notifier that queues notices until the front end drains them
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    pending: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queued notices, oldest first
    pub fn pending(&self) -> &[Notice] {
        &self.pending
    }

    /// Take all queued notices
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, message: &str) {
        self.pending.push(Notice::new(message));
    }
}
