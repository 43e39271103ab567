//! # API REST
//!
//! REST API implementation for podiGest.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Uses `podigest-core` for all data operations.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use podigest_core::{
    Appointment, AppointmentService, CoreConfig, Notification, NotificationService,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use error::MessageRes;
use handlers::appointments::{
    cancel_appointment, create_appointment, get_appointment, list_appointments, list_by_patient,
    list_by_specialist,
};
use handlers::health::{health, HealthRes};
use handlers::notifications::{get_notification, list_notifications};

/// Application state for the REST API server
///
/// Holds one service per data file. Services are shared across requests and hold no open file
/// handles between them.
#[derive(Clone)]
pub struct AppState {
    pub appointments: Arc<AppointmentService>,
    pub notifications: Arc<NotificationService>,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            appointments: Arc::new(AppointmentService::new(cfg.clone())),
            notifications: Arc::new(NotificationService::new(cfg)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::appointments::list_appointments,
        handlers::appointments::get_appointment,
        handlers::appointments::create_appointment,
        handlers::appointments::cancel_appointment,
        handlers::appointments::list_by_patient,
        handlers::appointments::list_by_specialist,
        handlers::notifications::list_notifications,
        handlers::notifications::get_notification,
    ),
    components(schemas(Appointment, Notification, MessageRes, HealthRes))
)]
pub struct ApiDoc;

/// Builds the complete REST router, including Swagger UI and a permissive CORS layer for the
/// browser frontend.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/citas",
            get(list_appointments).post(create_appointment),
        )
        .route(
            "/api/citas/:id",
            get(get_appointment).delete(cancel_appointment),
        )
        .route("/api/citas/paciente/:email", get(list_by_patient))
        .route("/api/citas/especialista/:name", get(list_by_specialist))
        .route("/api/notificaciones", get(list_notifications))
        .route("/api/notificaciones/:id", get(get_notification))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves `router(state)` on an already-bound listener until the server stops.
///
/// # Errors
/// Returns an error if the HTTP server fails while running.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}
