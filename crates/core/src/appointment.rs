//! Appointment (`cita`) records.
//!
//! Appointments are stored with their original Spanish JSON keys. Only `id`, `pacienteCorreo`
//! and `fecha` are required, and only when a new appointment is created through
//! [`AppointmentDraft::validate`]. Any other key is carried through untouched in
//! [`Appointment::extra`] so that records written by other clients survive a rewrite.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::openapi::schema::{AdditionalProperties, ObjectBuilder, Schema, SchemaType};
use utoipa::openapi::RefOr;
use utoipa::ToSchema;

/// A stored appointment between a patient and a specialist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(rename = "pacienteCorreo")]
    pub patient_email: String,
    #[serde(rename = "fecha")]
    pub date: String,
    /// `None` when the key is absent, `Some(None)` when it is an explicit `null`. Both are written
    /// back the way they were read.
    #[serde(
        rename = "especialista",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub specialist: Option<Option<String>>,
    /// Fields this service does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Appointment {
    pub fn is_for_specialist(&self, name: &str) -> bool {
        matches!(&self.specialist, Some(Some(s)) if s == name)
    }
}

/// Marks a key as present, so an explicit `null` survives as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Reads a string, accepting numbers and booleans in their JSON text form. `null` reads as absent.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(de::Error::invalid_type(
            match &other {
                Value::Array(_) => de::Unexpected::Seq,
                _ => de::Unexpected::Map,
            },
            &"a string",
        )),
    }
}

impl<'s> ToSchema<'s> for Appointment {
    fn schema() -> (&'s str, RefOr<Schema>) {
        fn string(description: &str) -> ObjectBuilder {
            ObjectBuilder::new()
                .schema_type(SchemaType::String)
                .description(Some(description))
        }

        let schema = ObjectBuilder::new()
            .schema_type(SchemaType::Object)
            .description(Some(
                "Appointment record. Keys other than the ones listed are stored and returned unchanged.",
            ))
            .property("id", string("Client-supplied identifier"))
            .required("id")
            .property("pacienteCorreo", string("Patient email"))
            .required("pacienteCorreo")
            .property("fecha", string("Appointment date, free-form"))
            .required("fecha")
            .property("especialista", string("Specialist name").nullable(true))
            .additional_properties(Some(AdditionalProperties::FreeForm(true)));

        ("Appointment", schema.into())
    }
}

/// Reasons a create request is rejected. The messages are returned to API clients verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentValidationError {
    #[error("El ID de la cita es requerido.")]
    MissingId,
    #[error("El correo del paciente es requerido.")]
    MissingPatientEmail,
    #[error("La fecha de la cita es requerida.")]
    MissingDate,
}

/// An appointment as submitted by a client, before required fields are checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentDraft {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub id: Option<String>,
    #[serde(rename = "pacienteCorreo", default, deserialize_with = "scalar_as_string")]
    pub patient_email: Option<String>,
    #[serde(rename = "fecha", default, deserialize_with = "scalar_as_string")]
    pub date: Option<String>,
    #[serde(rename = "especialista", default, deserialize_with = "present")]
    pub specialist: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppointmentDraft {
    /// Checks `id`, `pacienteCorreo` and `fecha` in that order and reports the first one that is
    /// absent, `null` or empty. Numbers and booleans in those fields are taken as their text.
    ///
    /// Values are not trimmed: a whitespace-only value is accepted and stored as given.
    pub fn validate(self) -> Result<Appointment, AppointmentValidationError> {
        fn required(
            value: Option<String>,
            err: AppointmentValidationError,
        ) -> Result<String, AppointmentValidationError> {
            value.filter(|v| !v.is_empty()).ok_or(err)
        }

        let id = required(self.id, AppointmentValidationError::MissingId)?;
        let patient_email = required(
            self.patient_email,
            AppointmentValidationError::MissingPatientEmail,
        )?;
        let date = required(self.date, AppointmentValidationError::MissingDate)?;

        Ok(Appointment {
            id,
            patient_email,
            date,
            specialist: self.specialist,
            extra: self.extra,
        })
    }
}
