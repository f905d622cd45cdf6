mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let mut app = router::router()
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(db, config.allow_anonymous_reads));

    if let Some(cors) = startup::cors_layer(&config)? {
        app = app.layer(cors);
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
