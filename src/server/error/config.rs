use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Configuration errors raised while reading environment variables at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set to a value that cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
