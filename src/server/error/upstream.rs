use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors returned by the upstream contract source.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid contract source URL {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },
    /// The upstream answered with a non-success status code.
    #[error("Contract source returned status {status} for system {system:?}")]
    UnexpectedStatus {
        /// System whose contracts were requested.
        system: String,
        /// HTTP status code returned.
        status: u16,
    },
    /// The upstream body is not a JSON array.
    #[error("Contract source returned an invalid body for system {system:?}: {reason}")]
    InvalidBody {
        /// System whose contracts were requested.
        system: String,
        /// Decoding error.
        reason: String,
    },
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Failed to retrieve contracts from the contract source".to_string(),
            }),
        )
            .into_response()
    }
}
