//! # podiGest Core
//!
//! Core data operations for the podiGest appointment backend.
//!
//! This crate contains pure data operations over two flat JSON files:
//! - appointments (`citas`), which can be listed, filtered, created and cancelled
//! - notifications (`notificaciones`), which are read-only
//!
//! **No API concerns**: HTTP routing, status codes and OpenAPI documentation belong in
//! `api-rest`.

pub mod appointment;
pub mod config;
pub mod constants;
pub mod error;
pub mod notification;
pub mod repositories;
pub mod store;

pub use appointment::{Appointment, AppointmentDraft, AppointmentValidationError};
pub use config::{config_from_env_values, CoreConfig};
pub use constants::{DEFAULT_APPOINTMENTS_FILE, DEFAULT_NOTIFICATIONS_FILE};
pub use error::{ConfigError, StoreError, StoreResult};
pub use notification::Notification;
pub use repositories::appointments::AppointmentService;
pub use repositories::notifications::NotificationService;
