//! Contract record JSON in the shape served by the upstream contract API.

use serde_json::{json, Value};

use crate::constant::{TEST_ALLIANCE_ID, TEST_OTHER_ALLIANCE_ID};

/// Type ID of Strontium Clathrates.
pub const STRONT_TYPE_ID: i64 = 16275;

/// Type ID of Nitrogen Isotopes.
pub const NITROGEN_TYPE_ID: i64 = 17888;

/// Type ID of an item that is not tracked (Tritanium).
pub const UNTRACKED_TYPE_ID: i64 = 34;

/// Create a contract record.
///
/// # Arguments
/// - `structure_name` - Structure the contract is delivered to
/// - `issuer_name` - Name of the issuing character
/// - `alliance_id` - Alliance of the issuer, `None` when the issuer has no alliance
/// - `details` - Line items as `(type_id, quantity)` pairs
///
/// # Returns
/// - `Value` - JSON object for one contract record
pub fn mock_contract(
    structure_name: &str,
    issuer_name: &str,
    alliance_id: Option<i64>,
    details: &[(i64, i64)],
) -> Value {
    let details: Vec<Value> = details
        .iter()
        .map(|(type_id, quantity)| json!({ "type_id": type_id, "quantity": quantity }))
        .collect();

    json!({
        "structureName": structure_name,
        "issuer_name": issuer_name,
        "alliance_id": alliance_id,
        "details": details,
    })
}

/// Create a contract issued by a member of the tracked test alliance.
pub fn mock_alliance_contract(structure_name: &str, details: &[(i64, i64)]) -> Value {
    mock_contract(structure_name, "Alliance Hauler", Some(TEST_ALLIANCE_ID), details)
}

/// Create a contract issued from outside the tracked test alliance.
pub fn mock_non_alliance_contract(
    structure_name: &str,
    issuer_name: &str,
    details: &[(i64, i64)],
) -> Value {
    mock_contract(
        structure_name,
        issuer_name,
        Some(TEST_OTHER_ALLIANCE_ID),
        details,
    )
}

/// Create a record missing its structure name and line items.
pub fn mock_malformed_contract() -> Value {
    json!({ "issuer_name": "Broken Record", "alliance_id": TEST_ALLIANCE_ID })
}
