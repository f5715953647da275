//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/tutor-desk/` or `$XDG_CONFIG_HOME/tutor-desk/`
/// - **macOS**: `~/Library/Application Support/com.tutordesk.tutor-desk/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\tutordesk\tutor-desk\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.config_dir())
}

/// Get or create the data directory (log files live here)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/tutor-desk/`
/// - **macOS**: `~/Library/Application Support/com.tutordesk.tutor-desk/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\tutordesk\tutor-desk\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.data_dir())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_missing_directory() {
        let dir = std::env::temp_dir().join(format!("tutor-desk-fs-{}", uuid::Uuid::new_v4()));
        assert!(!dir.exists());

        let created = ensure_dir(&dir.join("nested")).expect("create dir");
        assert!(created.is_dir());

        // Second call is a no-op on an existing directory
        ensure_dir(&created).expect("existing dir");

        fs::remove_dir_all(&dir).expect("cleanup");
    }
}
