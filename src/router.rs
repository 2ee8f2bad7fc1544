//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `GET /` - List all favourite places
/// - `POST /add` - Record a new favourite place
/// - `POST /like` - Like a place as a student
/// - `GET /likes` - Like counts grouped by place
/// - `GET /likes/{place}` - Like count for one place
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served
/// once state and middleware layers are applied.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Favourite Places", description = "Favourite places API"), tags(
        (name = controller::place::PLACE_TAG, description = "Favourite place API routes"),
        (name = controller::like::LIKE_TAG, description = "Place like API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::place::get_places))
        .routes(routes!(controller::place::add_place))
        .routes(routes!(controller::like::like_place))
        .routes(routes!(controller::like::get_likes))
        .routes(routes!(controller::like::get_likes_for_place))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
