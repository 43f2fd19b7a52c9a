//! Tests for the contract endpoints.
//!
//! Verifies the dashboard response before and after a refresh cycle and the on-demand refresh
//! of a single system, including untracked systems and upstream failures.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use fuelwatch::{
    model::api::{DashboardDto, SystemContractsDto},
    server::{
        controller::contract::{get_dashboard, get_system_contracts},
        service::refresh::refresh_dashboard,
    },
};

use super::*;

const KEEPSTAR: &str = "1DQ1-A - Keepstar";

/// Tests the dashboard before the first refresh cycle.
///
/// Expected: Ok with 200 OK, plain title and no systems
#[tokio::test]
async fn dashboard_is_empty_before_first_refresh() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_dashboard(State(test.app_state(&[TEST_SYSTEM]))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let dashboard: DashboardDto = json_body(resp).await?;
    assert_eq!(dashboard.title, "Fuel Contracts");
    assert!(dashboard.systems.is_empty());
    assert_eq!(dashboard.notification, None);

    Ok(())
}

/// Tests the dashboard after a refresh cycle.
///
/// Expected: Ok with 200 OK, badge title, notification and resolved item totals
#[tokio::test]
async fn dashboard_after_refresh() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint(
            TEST_SYSTEM,
            vec![
                mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 12_005)]),
                mock_alliance_contract(KEEPSTAR, &[(UNTRACKED_TYPE_ID, 1), (NITROGEN_TYPE_ID, 2_000_000)]),
            ],
            1,
        )
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM]);
    refresh_dashboard(&state).await;

    let result = get_dashboard(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let dashboard: DashboardDto = json_body(resp).await?;
    assert_eq!(dashboard.title, "(2) Fuel Contracts");
    assert_eq!(dashboard.total_contracts, 2);
    assert_eq!(dashboard.new_contracts, 2);
    assert!(dashboard.notification.is_some());
    assert!(dashboard.next_refresh.is_some());
    assert_eq!(dashboard.generation, 1);

    let system = &dashboard.systems[0];
    assert_eq!(system.system, TEST_SYSTEM);
    assert_eq!(system.structures[0].name, KEEPSTAR);

    let formatted: Vec<(&str, &str)> = system
        .totals
        .iter()
        .map(|total| (total.name.as_str(), total.formatted.as_str()))
        .collect();
    assert_eq!(
        formatted,
        vec![("Stront", "12,005"), ("Nitrogen Isotopes", "2.00M")]
    );
    test.assert_mocks();

    Ok(())
}

/// Tests refreshing a single tracked system.
///
/// Expected: Ok with 200 OK and the system's aggregated contracts
#[tokio::test]
async fn refreshes_tracked_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint(
            TEST_SYSTEM,
            vec![
                mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 1000)]),
                mock_non_alliance_contract(KEEPSTAR, "Outsider", &[(STRONT_TYPE_ID, 1000)]),
                mock_malformed_contract(),
            ],
            1,
        )
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM]);

    let result = get_system_contracts(State(state.clone()), Path(TEST_SYSTEM.to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let system: SystemContractsDto = json_body(resp).await?;
    assert_eq!(system.contracts, 1);
    assert_eq!(system.non_alliance_contracts, 1);
    assert_eq!(system.skipped_records, 1);
    assert_eq!(system.structures[0].non_alliance_issuers, vec!["Outsider".to_string()]);

    // The on-demand refresh also updates the dashboard
    assert_eq!(state.dashboard.snapshot().await.total_contracts(), 1);
    test.assert_mocks();

    Ok(())
}

/// Tests refreshing a system that is not tracked.
///
/// Expected: 404 Not Found without calling the upstream
#[tokio::test]
async fn not_found_for_untracked_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint("Jita", Vec::new(), 0)
        .build()
        .await?;

    let result = get_system_contracts(
        State(test.app_state(&[TEST_SYSTEM])),
        Path("Jita".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}

/// Tests refreshing a system whose upstream fails.
///
/// Expected: 502 Bad Gateway
#[tokio::test]
async fn bad_gateway_for_upstream_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_contracts_endpoint(TEST_SYSTEM, 503, 1)
        .build()
        .await?;

    let result = get_system_contracts(
        State(test.app_state(&[TEST_SYSTEM])),
        Path(TEST_SYSTEM.to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}
