//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/translate` - Translate a single string
/// - `POST /api/translate/batch` - Translate a list of strings
/// - `POST /api/translate/property` - Translate the text fields of a property listing
/// - `GET /api/health` - Server and database health
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, translator, retry_policy });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Vitrina", description = "Vitrina listing API"), tags(
        (name = controller::translate::TRANSLATION_TAG, description = "Listing translation API routes"),
        (name = controller::health::HEALTH_TAG, description = "Health check API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::translate::translate))
        .routes(routes!(controller::translate::translate_batch))
        .routes(routes!(controller::translate::translate_property))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
