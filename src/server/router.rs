//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/contracts` - Latest dashboard across every tracked system
/// - `GET /api/contracts/{system}` - Refresh and return one tracked system
/// - `GET /api/systems` - Tracked system names
/// - `POST /api/systems/{system}` - Start tracking a system
/// - `DELETE /api/systems/{system}` - Stop tracking a system
/// - `GET /api/items` - Tracked item types
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Fuelwatch", description = "Fuelwatch API"), tags(
        (name = controller::contract::CONTRACT_TAG, description = "Aggregated contract routes"),
        (name = controller::system::SYSTEM_TAG, description = "Tracked system routes"),
        (name = controller::item::ITEM_TAG, description = "Tracked item type routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::contract::get_dashboard))
        .routes(routes!(controller::contract::get_system_contracts))
        .routes(routes!(controller::system::get_systems))
        .routes(routes!(
            controller::system::add_system,
            controller::system::remove_system
        ))
        .routes(routes!(controller::item::get_items))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
