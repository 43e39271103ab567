use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use podigest_core::config_from_env_values;
use podigest_core::constants::{APPOINTMENTS_FILE_ENV, NOTIFICATIONS_FILE_ENV};

/// Main entry point for the podiGest backend
///
/// Resolves configuration once, then serves the REST API until the process is stopped.
///
/// # Environment Variables
/// - `PODIGEST_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `CITAS_FILE_PATH`: appointments JSON file (default: "data/citas.json")
/// - `NOTIFICACIONES_FILE_PATH`: notifications JSON file (default: "data/notificaciones.json")
///
/// A `.env` file in the working directory is loaded first if present.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a configured file path is empty or names a directory,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("podigest_run=info".parse()?)
                .add_directive("podigest_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PODIGEST_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let cfg = Arc::new(config_from_env_values(
        std::env::var(APPOINTMENTS_FILE_ENV).ok(),
        std::env::var(NOTIFICATIONS_FILE_ENV).ok(),
    )?);

    tracing::info!("++ Starting podiGest REST on {}", addr);
    tracing::info!("++ Appointments file: {}", cfg.appointments_file().display());
    tracing::info!("++ Notifications file: {}", cfg.notifications_file().display());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    api_rest::serve(listener, AppState::new(cfg)).await?;

    Ok(())
}
