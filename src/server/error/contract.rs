use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{api::ErrorDto, error::ContractError},
    server::error::InternalServerError,
};

impl IntoResponse for ContractError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownItemType(type_id) => {
                tracing::debug!(type_id = %type_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("Item type {} is not tracked", type_id),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
