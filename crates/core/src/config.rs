//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables; the binary
//! resolves them here and hands the result to the router state.

use crate::constants::{
    APPOINTMENTS_FILE_ENV, DEFAULT_APPOINTMENTS_FILE, DEFAULT_NOTIFICATIONS_FILE,
    NOTIFICATIONS_FILE_ENV,
};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    appointments_file: PathBuf,
    notifications_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// Neither file has to exist yet: a missing file reads as an empty collection. A path that
    /// is empty or names an existing directory is rejected.
    pub fn new(
        appointments_file: PathBuf,
        notifications_file: PathBuf,
    ) -> Result<Self, ConfigError> {
        validate_file_path(APPOINTMENTS_FILE_ENV, &appointments_file)?;
        validate_file_path(NOTIFICATIONS_FILE_ENV, &notifications_file)?;

        Ok(Self {
            appointments_file,
            notifications_file,
        })
    }

    pub fn appointments_file(&self) -> &Path {
        &self.appointments_file
    }

    pub fn notifications_file(&self) -> &Path {
        &self.notifications_file
    }
}

fn validate_file_path(name: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath { name });
    }
    if path.is_dir() {
        return Err(ConfigError::PathIsDirectory {
            name,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Build a `CoreConfig` from optional raw values, as read from the environment.
///
/// `None` or whitespace-only values fall back to the defaults in [`crate::constants`].
pub fn config_from_env_values(
    appointments_file: Option<String>,
    notifications_file: Option<String>,
) -> Result<CoreConfig, ConfigError> {
    fn or_default(value: Option<String>, default: &str) -> PathBuf {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(default))
    }

    CoreConfig::new(
        or_default(appointments_file, DEFAULT_APPOINTMENTS_FILE),
        or_default(notifications_file, DEFAULT_NOTIFICATIONS_FILE),
    )
}
