//! Mock contract API endpoint creation utilities.
//!
//! Endpoints are registered with the mockito server and verify they were called the expected
//! number of times.

use mockito::Mock;
use serde_json::Value;

use crate::fixtures::contract::ContractFixtures;

impl<'a> ContractFixtures<'a> {
    /// Create a mock HTTP endpoint listing the contracts of a system.
    ///
    /// Sets up a mock GET endpoint at `/contracts/{system}` that returns `contracts` as a JSON
    /// array.
    ///
    /// # Arguments
    /// - `system` - System name, used as is in the path
    /// - `contracts` - Contract records to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_contracts_endpoint(
        &mut self,
        system: &str,
        contracts: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let body = Value::Array(contracts).to_string();

        self.create_raw_contracts_endpoint(system, 200, &body, expected_requests)
    }

    /// Create a mock HTTP endpoint that fails with `status` for a system.
    pub fn create_failing_contracts_endpoint(
        &mut self,
        system: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_raw_contracts_endpoint(
            system,
            status,
            r#"{"error":"upstream failure"}"#,
            expected_requests,
        )
    }

    /// Create a mock HTTP endpoint returning `body` verbatim with `status`.
    pub fn create_raw_contracts_endpoint(
        &mut self,
        system: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/contracts/{}", system);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
