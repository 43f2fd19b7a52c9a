//! Error types for the fuelwatch server.
//!
//! Each domain has its own error type (configuration, upstream contract source, contract
//! classification) and all of them are aggregated into [`Error`]. Every error implements
//! `IntoResponse` so controllers can return them directly, and all of them use `thiserror` for
//! their `Display` and `Error` implementations.

pub mod config;
pub mod contract;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, error::ContractError},
    server::error::{config::ConfigError, upstream::UpstreamError},
};

/// Main error type for the fuelwatch server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Contract errors (malformed records, untracked item types)
/// - Upstream errors (unexpected status, undecodable body, unusable URL)
/// - Requests for systems that are not tracked
/// - External library errors (HTTP client, scheduler, listener I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Contract classification error.
    #[error(transparent)]
    ContractError(#[from] ContractError),
    /// Upstream contract source error.
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// The requested system is not on the tracked system list.
    #[error("System {0:?} is not tracked")]
    SystemNotTracked(String),
    /// HTTP client error (connection failure, timeout, client construction).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// I/O error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Untracked system or item type
/// - 502 Bad Gateway - Upstream contract source failed or could not be reached
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ContractError(err) => err.into_response(),
            Self::UpstreamError(err) => err.into_response(),
            Self::SystemNotTracked(system) => {
                tracing::debug!("System {:?} is not tracked", system);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("System {} is not tracked", system),
                    }),
                )
                    .into_response()
            }
            Self::ReqwestError(err) => {
                tracing::error!("Contract source request failed: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Failed to retrieve contracts from the contract source".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic "Internal server error" message to the client to avoid
/// leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
