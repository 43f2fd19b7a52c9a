use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::api::{DashboardDto, ErrorDto, SystemContractsDto},
    server::{
        error::Error,
        model::app::AppState,
        service::{dashboard::dashboard_dto, refresh::RefreshService},
    },
};

/// OpenAPI tag for contract routes.
pub static CONTRACT_TAG: &str = "contract";

/// Get the latest dashboard across every tracked system
///
/// Returns the snapshot published by the most recent refresh cycle. Before the first cycle
/// completes the dashboard has no systems.
#[utoipa::path(
    get,
    path = "/api/contracts",
    tag = CONTRACT_TAG,
    responses(
        (status = 200, description = "Success when retrieving the dashboard", body = DashboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let snapshot = state.dashboard.snapshot().await;

    let dashboard = dashboard_dto(
        &snapshot,
        &state.catalog,
        state.refresh_interval,
        Utc::now(),
    )?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Refresh and get the contracts of one tracked system
///
/// Fetches the system's contracts from the upstream immediately and updates the system's entry in
/// the dashboard.
#[utoipa::path(
    get,
    path = "/api/contracts/{system}",
    tag = CONTRACT_TAG,
    params(
        ("system" = String, Path, description = "Name of the tracked system")
    ),
    responses(
        (status = 200, description = "Success when refreshing the system's contracts", body = SystemContractsDto),
        (status = 404, description = "System is not tracked", body = ErrorDto),
        (status = 502, description = "Contract source failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_system_contracts(
    State(state): State<AppState>,
    Path(system): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let system = system.trim().to_string();

    if !state.systems.contains(&system).await {
        return Err(Error::SystemNotTracked(system));
    }

    let contracts = RefreshService::new(&state.source, &state.catalog, state.tracked_alliance_id)
        .refresh_system(&system)
        .await?;
    let dto = contracts.to_dto(&state.catalog)?;

    state.dashboard.replace_system(contracts).await;

    Ok((StatusCode::OK, Json(dto)))
}
