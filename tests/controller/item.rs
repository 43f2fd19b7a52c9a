//! Tests for the get_items endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use fuelwatch::{model::contract::ItemType, server::controller::item::get_items};

use super::*;

/// Tests listing the tracked item types.
///
/// Expected: Ok with 200 OK and the six default item types
#[tokio::test]
async fn lists_default_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_items(State(test.app_state(&[]))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<ItemType> = json_body(resp).await?;
    assert_eq!(items.len(), 6);
    assert!(items
        .iter()
        .any(|item| item.type_id == STRONT_TYPE_ID && item.name == "Stront"));

    Ok(())
}
