//! Tests for the refresh scheduler.

use fuelwatch::server::scheduler::Scheduler;
use fuelwatch_test_utils::{fixtures::contract::factory::*, prelude::*};

use crate::util::TestSetupExt;

/// Tests starting the scheduler.
///
/// Verifies that the initial refresh runs before the repeated job is registered.
///
/// Expected: Ok with the first cycle published
#[tokio::test(flavor = "multi_thread")]
async fn runs_initial_refresh_on_start() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_contracts_endpoint(
            TEST_SYSTEM,
            vec![mock_alliance_contract("1DQ1-A - Keepstar", &[(STRONT_TYPE_ID, 1000)])],
            1,
        )
        .build()
        .await?;
    let state = test.app_state(&[TEST_SYSTEM]);

    let scheduler = Scheduler::new(state.clone()).await.unwrap();
    let result = scheduler.start().await;

    assert!(result.is_ok());

    let snapshot = state.dashboard.snapshot().await;
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.total_contracts(), 1);
    test.assert_mocks();

    Ok(())
}
