//! HTTP controller endpoints for the listing web API.
//!
//! Controllers validate request bodies, call into the translator or services held by
//! [`AppState`](crate::server::model::app::AppState) and map results to HTTP responses. They use
//! utoipa for OpenAPI documentation.

pub mod health;
pub mod translate;
