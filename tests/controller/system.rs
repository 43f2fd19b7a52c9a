//! Tests for the tracked system endpoints.
//!
//! Verifies adding and removing systems, the 304 responses for no-op changes, and the
//! background refresh of a newly added system.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use fuelwatch::server::controller::system::{
    add_system, get_systems, refresh_added_system, remove_system,
};

use super::*;

/// Tests listing tracked systems.
///
/// Expected: Ok with 200 OK and systems in configured order
#[tokio::test]
async fn lists_tracked_systems() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_systems(State(test.app_state(&[TEST_SYSTEM, "J5A-IX"]))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let systems: Vec<String> = json_body(resp).await?;
    assert_eq!(systems, vec![TEST_SYSTEM.to_string(), "J5A-IX".to_string()]);

    Ok(())
}

/// Tests adding a system that is not yet tracked.
///
/// Expected: Ok with 200 OK and the system appended to the list
#[tokio::test]
async fn adds_new_system() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state(&[TEST_SYSTEM]);

    let result = add_system(State(state.clone()), Path("J5A-IX".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let systems: Vec<String> = json_body(resp).await?;
    assert_eq!(systems, vec![TEST_SYSTEM.to_string(), "J5A-IX".to_string()]);
    assert!(state.systems.contains("J5A-IX").await);

    Ok(())
}

/// Tests adding a system that is already tracked.
///
/// Expected: Ok with 304 Not Modified
#[tokio::test]
async fn not_modified_for_tracked_system() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = add_system(
        State(test.app_state(&[TEST_SYSTEM])),
        Path(TEST_SYSTEM.to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);

    Ok(())
}

/// Tests removing a tracked system.
///
/// Expected: Ok with 200 OK and the system dropped from the list and the dashboard
#[tokio::test]
async fn removes_tracked_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint(
            TEST_SYSTEM,
            vec![mock_alliance_contract("1DQ1-A - Keepstar", &[(STRONT_TYPE_ID, 1000)])],
            1,
        )
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM]);
    refresh_added_system(state.clone(), TEST_SYSTEM.to_string()).await;
    assert_eq!(state.dashboard.snapshot().await.systems.len(), 1);

    let result = remove_system(State(state.clone()), Path(TEST_SYSTEM.to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let systems: Vec<String> = json_body(resp).await?;
    assert!(systems.is_empty());
    assert!(state.dashboard.snapshot().await.systems.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests removing a system that is not tracked.
///
/// Expected: Ok with 304 Not Modified
#[tokio::test]
async fn not_modified_for_untracked_system() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = remove_system(
        State(test.app_state(&[TEST_SYSTEM])),
        Path("Jita".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);

    Ok(())
}

/// Tests the background refresh of a system removed before its fetch completed.
///
/// Expected: the fetched contracts are not added to the dashboard
#[tokio::test]
async fn drops_refresh_of_removed_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint(
            "J5A-IX",
            vec![mock_alliance_contract("J5A-IX - Fortizar", &[(STRONT_TYPE_ID, 1000)])],
            1,
        )
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM]);

    refresh_added_system(state.clone(), "J5A-IX".to_string()).await;

    assert!(state.dashboard.snapshot().await.systems.is_empty());
    test.assert_mocks();

    Ok(())
}
