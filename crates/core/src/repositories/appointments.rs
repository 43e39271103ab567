//! Appointment management.
//!
//! All operations load the complete appointments file, work on it in memory and, for mutations,
//! write the complete file back. Lookups are linear scans in file order.
//!
//! ## Pure Data Operations
//!
//! Required-field validation of new appointments happens at the API boundary via
//! [`crate::AppointmentDraft::validate`]; this service stores whatever it is given.

use crate::appointment::Appointment;
use crate::config::CoreConfig;
use crate::error::StoreResult;
use crate::store::JsonFileStore;
use std::sync::Arc;

/// Service for listing, creating and cancelling appointments.
#[derive(Debug)]
pub struct AppointmentService {
    store: JsonFileStore<Appointment>,
}

impl AppointmentService {
    /// Creates a service backed by the configured appointments file.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: JsonFileStore::new(cfg.appointments_file()),
        }
    }

    /// Returns every appointment in file order. A missing or blank file yields an empty list.
    pub fn list_all(&self) -> StoreResult<Vec<Appointment>> {
        self.store.read_all()
    }

    /// Returns the first appointment whose id equals `id`.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Appointment>> {
        Ok(self.list_all()?.into_iter().find(|a| a.id == id))
    }

    /// Appends `appointment` and rewrites the file, returning the stored record unchanged.
    ///
    /// Duplicate ids are not detected.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the existing file cannot be read or the new content cannot be
    /// written. The file is left as it was in either case.
    pub fn create(&self, appointment: Appointment) -> StoreResult<Appointment> {
        let stored = appointment.clone();
        self.store.modify(|appointments| {
            appointments.push(appointment);
            true
        })?;

        tracing::info!("appointment {} created", stored.id);
        Ok(stored)
    }

    /// Removes every appointment whose id equals `id`.
    ///
    /// The file is only rewritten when something was removed. Returns whether anything was.
    pub fn cancel(&self, id: &str) -> StoreResult<bool> {
        let removed = self.store.modify(|appointments| {
            let before = appointments.len();
            appointments.retain(|a| a.id != id);
            appointments.len() != before
        })?;

        if removed {
            tracing::info!("appointment {} cancelled", id);
        }
        Ok(removed)
    }

    /// Appointments whose patient email equals `email` exactly, in file order.
    pub fn list_by_patient(&self, email: &str) -> StoreResult<Vec<Appointment>> {
        let mut appointments = self.list_all()?;
        appointments.retain(|a| a.patient_email == email);
        Ok(appointments)
    }

    /// Appointments whose specialist equals `name` exactly, in file order.
    pub fn list_by_specialist(&self, name: &str) -> StoreResult<Vec<Appointment>> {
        let mut appointments = self.list_all()?;
        appointments.retain(|a| a.is_for_specialist(name));
        Ok(appointments)
    }
}
