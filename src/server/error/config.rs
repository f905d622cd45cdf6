use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the server expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Variable name
        name: String,
        /// The rejected value
        value: String,
    },
}
