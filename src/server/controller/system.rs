use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::api::ErrorDto,
    server::{error::Error, model::app::AppState, service::refresh::RefreshService},
};

/// OpenAPI tag for system routes.
pub static SYSTEM_TAG: &str = "system";

/// Get the tracked system names
#[utoipa::path(
    get,
    path = "/api/systems",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Success when retrieving tracked systems", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_systems(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(state.systems.names().await)))
}

/// Start tracking a system
///
/// The system's contracts are fetched in the background and appear on the dashboard once the
/// fetch completes.
///
/// # Responses
/// - 200 (OK): System added, returns the tracked system names
/// - 304 (Not Modified): System already tracked or blank name
#[utoipa::path(
    post,
    path = "/api/systems/{system}",
    tag = SYSTEM_TAG,
    params(
        ("system" = String, Path, description = "Name of the system to track")
    ),
    responses(
        (status = 200, description = "System added", body = Vec<String>),
        (status = 304, description = "System already tracked"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_system(
    State(state): State<AppState>,
    Path(system): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let system = system.trim().to_string();

    if !state.systems.add(&system).await {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    tracing::info!("Tracking contracts in system {}", system);

    let background_state = state.clone();
    tokio::spawn(async move { refresh_added_system(background_state, system).await });

    Ok((StatusCode::OK, Json(state.systems.names().await)).into_response())
}

/// Stop tracking a system
///
/// # Responses
/// - 200 (OK): System removed, returns the tracked system names
/// - 304 (Not Modified): System was not tracked
#[utoipa::path(
    delete,
    path = "/api/systems/{system}",
    tag = SYSTEM_TAG,
    params(
        ("system" = String, Path, description = "Name of the system to stop tracking")
    ),
    responses(
        (status = 200, description = "System removed", body = Vec<String>),
        (status = 304, description = "System was not tracked"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_system(
    State(state): State<AppState>,
    Path(system): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let system = system.trim();

    if !state.systems.remove(system).await {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    state.dashboard.remove_system(system).await;
    tracing::info!("Stopped tracking contracts in system {}", system);

    Ok((StatusCode::OK, Json(state.systems.names().await)).into_response())
}

/// Fetches a newly tracked system and adds it to the dashboard.
///
/// The result is dropped if the system was removed again while the fetch was running.
pub async fn refresh_added_system(state: AppState, system: String) {
    let service = RefreshService::new(&state.source, &state.catalog, state.tracked_alliance_id);

    match service.refresh_system(&system).await {
        Ok(contracts) => {
            if state.systems.contains(&system).await {
                state.dashboard.replace_system(contracts).await;
            }
        }
        Err(e) => tracing::error!("Failed to refresh contracts for system {}: {}", system, e),
    }
}
