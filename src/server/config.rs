use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Lets list and retrieve requests through without a token.
    pub allow_anonymous_reads: bool,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            allow_anonymous_reads: match std::env::var("ALLOW_ANONYMOUS_READS") {
                Ok(value) => parse_flag("ALLOW_ANONYMOUS_READS", &value)?,
                Err(_) => false,
            },
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
