//! Constants used throughout the podiGest core crate.
//!
//! Default file locations and environment variable names live here so the binary and the
//! tests agree on them.

/// Default location of the appointments file when `CITAS_FILE_PATH` is not set.
pub const DEFAULT_APPOINTMENTS_FILE: &str = "data/citas.json";

/// Default location of the notifications file when `NOTIFICACIONES_FILE_PATH` is not set.
pub const DEFAULT_NOTIFICATIONS_FILE: &str = "data/notificaciones.json";

/// Environment variable naming the appointments file.
pub const APPOINTMENTS_FILE_ENV: &str = "CITAS_FILE_PATH";

/// Environment variable naming the notifications file.
pub const NOTIFICATIONS_FILE_ENV: &str = "NOTIFICACIONES_FILE_PATH";

/// Suffix appended to a store's file name for the replace-on-write temporary file.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";
