//! Application Constants
//!
//! Centralized constants for the backend endpoint and local storage.

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Path of the "create study group" endpoint
pub const CREATE_STUDY_GROUP_PATH: &str = "/study_groups";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "TUTOR_DESK_API_URL";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "tutor-desk.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "tutor-desk.log";

/// Project directory identifiers
pub const QUALIFIER: &str = "com";
pub const ORGANIZATION: &str = "tutordesk";
pub const APPLICATION: &str = "tutor-desk";
