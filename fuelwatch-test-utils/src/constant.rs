//! Constant values shared across tests.

/// User agent sent by the test contract source.
pub static TEST_USER_AGENT: &str = "fuelwatch-tests/1.0 (contact@example.com)";

/// Alliance whose contracts count towards item totals in tests.
pub const TEST_ALLIANCE_ID: i64 = 99010079;

/// Alliance used for contracts from outside the tracked alliance.
pub const TEST_OTHER_ALLIANCE_ID: i64 = 1354830081;

/// System tracked by default in tests.
pub static TEST_SYSTEM: &str = "1DQ1-A";
