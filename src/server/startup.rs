use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`, falling back to debug output for this crate and the HTTP trace layer.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kingdomdeath=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the configured URL, then runs every pending
/// SeaORM migration, seeds included. Must succeed before the router is built.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer for the configured origin, if any.
///
/// `*` allows every origin.
pub fn cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_allowed_origin.as_deref() else {
        return Ok(None);
    };

    let allow_origin = if origin == "*" {
        AllowOrigin::from(Any)
    } else {
        let value = origin.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ALLOWED_ORIGIN".to_string(),
            value: origin.to_string(),
        })?;
        AllowOrigin::exact(value)
    };

    Ok(Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any),
    ))
}
