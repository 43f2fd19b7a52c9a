use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, contract::ItemType},
    server::{error::Error, model::app::AppState},
};

/// OpenAPI tag for item routes.
pub static ITEM_TAG: &str = "item";

/// Get the tracked item types
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Success when retrieving tracked item types", body = Vec<ItemType>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(state.catalog.items())))
}
