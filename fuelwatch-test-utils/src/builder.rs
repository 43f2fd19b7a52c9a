//! Declarative test builder.
//!
//! The builder queues mock upstream endpoints and creates all of them during the final `build()`
//! call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a [`TestSetup`] whose
/// mock upstream serves the configured systems.
pub struct TestBuilder {
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    contracts_endpoints: Vec<(String, Vec<Value>, usize)>, // (system, contracts, expected_requests)
    failing_endpoints: Vec<(String, usize, usize)>,        // (system, status, expected_requests)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            contracts_endpoints: Vec::new(),
            failing_endpoints: Vec::new(),
        }
    }

    /// Serve `contracts` for `system`.
    ///
    /// # Arguments
    /// - `system` - System name, used as is in the endpoint path
    /// - `contracts` - Contract records returned for the system
    /// - `expected_requests` - Number of times the endpoint should be called
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fuelwatch_test_utils::{prelude::*, fixtures::contract::factory::*};
    ///
    /// # async fn example() -> Result<(), TestError> {
    /// let test = TestBuilder::new()
    ///     .with_contracts_endpoint(
    ///         TEST_SYSTEM,
    ///         vec![mock_alliance_contract("1DQ1-A - Keepstar", &[(STRONT_TYPE_ID, 1000)])],
    ///         1,
    ///     )
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_contracts_endpoint(
        mut self,
        system: impl Into<String>,
        contracts: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.contracts_endpoints
            .push((system.into(), contracts, expected_requests));
        self
    }

    /// Fail every request for `system` with `status`.
    pub fn with_failing_contracts_endpoint(
        mut self,
        system: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failing_endpoints
            .push((system.into(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// Custom endpoints are created before the pre-configured ones so they take precedence when
    /// both match the same path.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Create the mock server and every queued endpoint.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (system, contracts, expected) in self.contracts_endpoints {
            mocks.push(
                setup
                    .contracts()
                    .create_contracts_endpoint(&system, contracts, expected),
            );
        }

        for (system, status, expected) in self.failing_endpoints {
            mocks.push(
                setup
                    .contracts()
                    .create_failing_contracts_endpoint(&system, status, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}
