//! Mapping from core results to HTTP responses.
//!
//! Every error body has the shape `{"message": "..."}`. Storage failures are logged here, once,
//! and the client only sees a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use podigest_core::{AppointmentValidationError, StoreError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain message body used for confirmations and errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] AppointmentValidationError),
    #[error("{0}")]
    NotFound(String),
    #[error("failed to save appointment: {0}")]
    SaveAppointment(#[source] StoreError),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::SaveAppointment(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error al guardar la cita".to_string(),
                )
            }
            ApiError::Storage(e) => {
                tracing::error!("storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(MessageRes::new(message))).into_response()
    }
}
