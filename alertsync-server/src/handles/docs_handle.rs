use alertsync_api::Category;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use utoipa::OpenApi;

use crate::errors::ApiError;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::esp_handle::update_esp,
        super::esp_handle::esp_emergency,
        super::esp_handle::control_servo,
        super::esp_handle::get_servo_status,
        super::esp_handle::get_control,
        super::dashboard_handle::get_dashboard,
        super::dashboard_handle::dashboard_emergency,
    ),
    components(schemas(Category)),
    tags(
        (name = "esp", description = "Device telemetry and command polling"),
        (name = "dashboard", description = "Dashboard polling and overrides")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn openapi_json() -> Result<impl IntoResponse, ApiError> {
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(anyhow::Error::from)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], document))
}
