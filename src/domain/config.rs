//! Config - Backend Connection Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{CREATE_STUDY_GROUP_PATH, DEFAULT_API_BASE_URL};

/// Backend study group service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Path of the create endpoint
    pub create_path: String,
    /// Request timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            create_path: CREATE_STUDY_GROUP_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Full URL of the create endpoint
    pub fn create_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.create_path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.create_url(), "http://localhost:5000/study_groups");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn create_url_joins_slashes() {
        let config = ApiConfig {
            base_url: "https://api.example.com/v1/".to_string(),
            create_path: "/study_groups".to_string(),
            timeout_secs: Some(0),
        };
        assert_eq!(config.create_url(), "https://api.example.com/v1/study_groups");
        // Zero disables the timeout
        assert!(config.timeout().is_none());
    }
}
