//! `/api/notificaciones` endpoints. Read-only.

use axum::{
    extract::{Path as AxumPath, State},
    response::Json,
};
use podigest_core::Notification;

use crate::error::{ApiError, MessageRes};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/notificaciones",
    responses(
        (status = 200, description = "All notifications in file order", body = [Notification]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    Ok(Json(state.notifications.list_all()?))
}

#[utoipa::path(
    get,
    path = "/api/notificaciones/{id}",
    params(("id" = String, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification found", body = Notification),
        (status = 404, description = "No notification with this id", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Fetch a single notification by id.
#[axum::debug_handler]
pub async fn get_notification(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Notification>, ApiError> {
    state
        .notifications
        .get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Notificación no encontrada: {}", id)))
}
