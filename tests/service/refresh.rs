//! Tests for the dashboard refresh cycle.
//!
//! Verifies that every tracked system is fetched, that a failing system keeps its previous
//! entry, and that new contracts are counted against the previous cycle.

use fuelwatch::server::service::refresh::{refresh_dashboard, RefreshService};

use super::*;

const KEEPSTAR: &str = "1DQ1-A - Keepstar";

/// Tests a refresh cycle over two healthy systems.
///
/// Expected: both systems published with every alliance contract reported as new
#[tokio::test]
async fn publishes_every_tracked_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint(
            TEST_SYSTEM,
            vec![
                mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 1000)]),
                mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 500), (NITROGEN_TYPE_ID, 20)]),
                mock_non_alliance_contract(KEEPSTAR, "Outsider", &[(STRONT_TYPE_ID, 9000)]),
            ],
            1,
        )
        .with_contracts_endpoint(
            "J5A-IX",
            vec![mock_alliance_contract("J5A-IX - Fortizar", &[(NITROGEN_TYPE_ID, 40)])],
            1,
        )
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM, "J5A-IX"]);

    let report = refresh_dashboard(&state).await;

    assert!(report.published);
    assert!(report.failed.is_empty());

    let snapshot = state.dashboard.snapshot().await;
    assert_eq!(snapshot.systems.len(), 2);
    assert_eq!(snapshot.total_contracts(), 3);
    assert_eq!(snapshot.new_contracts, 3);

    let keepstar = &snapshot.systems[0].structures[KEEPSTAR];
    assert_eq!(keepstar.matching_contract_count, 2);
    assert_eq!(keepstar.non_alliance_contract_count, 1);
    assert_eq!(keepstar.item_totals.get(&STRONT_TYPE_ID), Some(&1500));
    assert!(keepstar.non_alliance_issuers.contains("Outsider"));
    test.assert_mocks();

    Ok(())
}

/// Tests a refresh cycle where one system's upstream fails.
///
/// Expected: the healthy system is published and the failed system is reported
#[tokio::test]
async fn reports_failed_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint(
            TEST_SYSTEM,
            vec![mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 1000)])],
            1,
        )
        .with_failing_contracts_endpoint("J5A-IX", 500, 1)
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM, "J5A-IX"]);

    let report = refresh_dashboard(&state).await;

    assert!(report.published);
    assert_eq!(report.refreshed, 1);
    assert_eq!(report.failed, vec!["J5A-IX".to_string()]);

    let snapshot = state.dashboard.snapshot().await;
    assert_eq!(snapshot.systems.len(), 1);
    assert_eq!(snapshot.systems[0].system, TEST_SYSTEM);
    test.assert_mocks();

    Ok(())
}

/// Tests two consecutive cycles.
///
/// Verifies that the second cycle only reports contracts that appeared since the first.
///
/// Expected: 1 new contract after the second cycle
#[tokio::test]
async fn counts_new_contracts_since_previous_cycle() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_contracts_endpoint(
            TEST_SYSTEM,
            vec![mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 1000)])],
            1,
        )
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM]);

    refresh_dashboard(&state).await;

    // The first endpoint is exhausted, so the upstream now serves this one
    let second = test.contracts().create_contracts_endpoint(
        TEST_SYSTEM,
        vec![
            mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 1000)]),
            mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 2000)]),
        ],
        1,
    );

    let report = refresh_dashboard(&state).await;

    assert_eq!(report.generation, 2);

    let snapshot = state.dashboard.snapshot().await;
    assert_eq!(snapshot.total_contracts(), 2);
    assert_eq!(snapshot.new_contracts, 1);
    second.assert();

    Ok(())
}

/// Tests refreshing a single system with malformed records.
///
/// Expected: malformed records are counted as skipped and the rest aggregated
#[tokio::test]
async fn counts_skipped_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint(
            TEST_SYSTEM,
            vec![
                mock_malformed_contract(),
                mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, -5)]),
                mock_alliance_contract(KEEPSTAR, &[(STRONT_TYPE_ID, 1000)]),
            ],
            1,
        )
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM]);
    let service = RefreshService::new(&state.source, &state.catalog, state.tracked_alliance_id);

    let contracts = service.refresh_system(TEST_SYSTEM).await.unwrap();

    assert_eq!(contracts.skipped, 2);
    assert_eq!(contracts.contract_count(), 1);
    test.assert_mocks();

    Ok(())
}
