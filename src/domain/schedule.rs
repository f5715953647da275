//! Schedule - Datetime Picker Values
//!
//! The create form stores the scheduled time exactly as a `datetime-local`
//! picker reports it: `YYYY-MM-DDTHH:MM`, no zone, no seconds.

use chrono::NaiveDateTime;

/// Format produced by a `datetime-local` picker
pub const PICKER_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats accepted from typed input
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Format a datetime the way the picker would
pub fn to_picker_value(value: &NaiveDateTime) -> String {
    value.format(PICKER_FORMAT).to_string()
}

/// Normalize typed input to a picker value.
///
/// Empty input stays empty (the field is optional). Returns `None` when the
/// input matches none of the accepted formats. Seconds are dropped.
pub fn normalize_input(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return Some(String::new());
    }

    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|value| to_picker_value(&value))
}
