//! Study Group - Draft, Wire Payload and Navigation Handoff

use serde::{Deserialize, Serialize};

/// Editable fields of the create form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Subject,
    Topic,
    Description,
    ScheduledTime,
}

impl DraftField {
    /// All fields in form order
    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::Name,
            DraftField::Subject,
            DraftField::Topic,
            DraftField::Description,
            DraftField::ScheduledTime,
        ]
    }

    /// Whether the field must be non-empty before submitting
    pub fn is_required(&self) -> bool {
        matches!(self, DraftField::Name | DraftField::Subject | DraftField::Topic)
    }

    /// Translation key for the field's label
    pub fn label_key(&self) -> &'static str {
        match self {
            DraftField::Name => "field-name",
            DraftField::Subject => "field-subject",
            DraftField::Topic => "field-topic",
            DraftField::Description => "field-description",
            DraftField::ScheduledTime => "field-scheduled-time",
        }
    }
}

/// In-memory study group being composed on the create page.
///
/// Created empty, mutated field by field, and taken by the controller once a
/// submission is dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyGroupDraft {
    pub name: String,
    pub subject: String,
    pub topic: String,
    pub description: String,
    /// Datetime picker value, e.g. `2024-05-01T10:00`. Sent verbatim.
    pub scheduled_time: String,
}

impl StudyGroupDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Subject => &self.subject,
            DraftField::Topic => &self.topic,
            DraftField::Description => &self.description,
            DraftField::ScheduledTime => &self.scheduled_time,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Subject => self.subject = value,
            DraftField::Topic => self.topic = value,
            DraftField::Description => self.description = value,
            DraftField::ScheduledTime => self.scheduled_time = value,
        }
    }

    /// Required fields that are currently empty, in form order.
    ///
    /// Only emptiness is checked; a whitespace-only value counts as filled.
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::all()
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }

    /// Build the wire payload
    pub fn to_request(&self) -> CreateStudyGroupRequest {
        CreateStudyGroupRequest {
            name: self.name.clone(),
            subject: self.subject.clone(),
            topic: self.topic.clone(),
            description: self.description.clone(),
            scheduled_time: self.scheduled_time.clone(),
        }
    }

    /// State carried to the details page after creation
    pub fn handoff(&self) -> GroupHandoff {
        GroupHandoff {
            name: self.name.clone(),
            subject: self.subject.clone(),
            topic: self.topic.clone(),
        }
    }
}

/// JSON body of `POST /study_groups`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStudyGroupRequest {
    pub name: String,
    pub subject: String,
    pub topic: String,
    pub description: String,
    pub scheduled_time: String,
}

/// Transient state handed to the study group details page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHandoff {
    pub name: String,
    pub subject: String,
    pub topic: String,
}

/// Error body returned by the backend on a non-success status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extract the error body from an arbitrary JSON value.
    ///
    /// Anything other than an object with a non-empty string `message`
    /// yields no message.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        Self { message }
    }
}
