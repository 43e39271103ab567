//! Record services.
//!
//! Each service owns one [`crate::store::JsonFileStore`] and adds the lookups and mutations the
//! API needs on top of it.

pub mod appointments;
pub mod notifications;
