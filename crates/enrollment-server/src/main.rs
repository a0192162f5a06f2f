//! Enrollment API HTTP Server
//!
//! Serves the student and course endpoints over an in-memory store.

use anyhow::Result;
use enrollment_core::Store;
use enrollment_server::api::{create_router, AppState};
use enrollment_server::config::{LogFormat, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (needed for the log level)
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    let store = if config.seed_data {
        Store::seeded()
    } else {
        Store::new()
    };
    info!(
        students = store.students().len(),
        courses = store.courses().len(),
        "Store initialized"
    );

    let app = create_router(AppState::new(store));

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Students: http://{}/me/students", addr);
    info!("  Courses:  http://{}/api/v2/courses", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "enrollment_server={0},enrollment_core={0},tower_http=debug",
            config.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
