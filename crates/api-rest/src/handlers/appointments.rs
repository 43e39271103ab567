//! `/api/citas` endpoints.

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
};
use podigest_core::{Appointment, AppointmentDraft};

use crate::error::{ApiError, MessageRes};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/citas",
    responses(
        (status = 200, description = "All appointments in file order", body = [Appointment]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// List every stored appointment.
///
/// # Errors
/// Returns `500 Internal Server Error` if the appointments file cannot be read or parsed.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.appointments.list_all()?))
}

#[utoipa::path(
    get,
    path = "/api/citas/{id}",
    params(("id" = String, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment found", body = Appointment),
        (status = 404, description = "No appointment with this id", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Fetch a single appointment. When ids are duplicated the first one in the file wins.
#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Appointment>, ApiError> {
    state
        .appointments
        .get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Cita no encontrada: {}", id)))
}

#[utoipa::path(
    post,
    path = "/api/citas",
    request_body = Appointment,
    responses(
        (status = 201, description = "Appointment stored", body = Appointment),
        (status = 400, description = "A required field is missing or empty", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Create an appointment.
///
/// `id`, `pacienteCorreo` and `fecha` must be present and non-empty. The record is stored and
/// echoed back exactly as received; the id is not generated and not checked for uniqueness.
///
/// # Errors
/// - `400 Bad Request` naming the first missing field; the file is not touched.
/// - `500 Internal Server Error` if the appointments file cannot be read or written.
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(draft): Json<AppointmentDraft>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let appointment = draft.validate()?;
    let stored = state
        .appointments
        .create(appointment)
        .map_err(ApiError::SaveAppointment)?;

    Ok((StatusCode::CREATED, Json(stored)))
}

#[utoipa::path(
    delete,
    path = "/api/citas/{id}",
    params(("id" = String, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment cancelled", body = MessageRes),
        (status = 404, description = "No appointment with this id", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Cancel an appointment, removing every record with the given id.
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<MessageRes>, ApiError> {
    if state.appointments.cancel(&id)? {
        Ok(Json(MessageRes::new("Cita cancelada exitosamente")))
    } else {
        Err(ApiError::NotFound(format!("Cita no encontrada: {}", id)))
    }
}

#[utoipa::path(
    get,
    path = "/api/citas/paciente/{email}",
    params(("email" = String, Path, description = "Patient email, matched exactly")),
    responses(
        (status = 200, description = "Appointments for the patient, possibly empty", body = [Appointment]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn list_by_patient(
    State(state): State<AppState>,
    AxumPath(email): AxumPath<String>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.appointments.list_by_patient(&email)?))
}

#[utoipa::path(
    get,
    path = "/api/citas/especialista/{name}",
    params(("name" = String, Path, description = "Specialist name, matched exactly")),
    responses(
        (status = 200, description = "Appointments with the specialist, possibly empty", body = [Appointment]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn list_by_specialist(
    State(state): State<AppState>,
    AxumPath(name): AxumPath<String>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.appointments.list_by_specialist(&name)?))
}
