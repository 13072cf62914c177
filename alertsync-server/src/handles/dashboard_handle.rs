use alertsync_api::models::*;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use super::SyncState;
use crate::errors::ApiError;

pub fn dashboard_router(sync_state: SyncState) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/emergency", post(dashboard_emergency))
        // Path used by the first dashboard release.
        .route("/flet/emergency", post(dashboard_emergency))
        .with_state(sync_state)
}

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Device snapshot and most recent log entries, oldest first", body = DashboardResponse)
    )
)]
pub async fn get_dashboard(State(state): State<SyncState>) -> Json<DashboardResponse> {
    Json(state.sync_service.dashboard().await)
}

#[utoipa::path(
    post,
    path = "/dashboard/emergency",
    tag = "dashboard",
    request_body = EmergencyRequest,
    responses(
        (status = 200, description = "Emergency override recorded", body = MessageResponse),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn dashboard_emergency(
    State(state): State<SyncState>,
    WithRejection(Json(body), _): WithRejection<Json<EmergencyRequest>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .sync_service
        .set_emergency_intent(body.emergency.unwrap_or_default(), EmergencyOrigin::Dashboard)
        .await;

    Ok(Json(MessageResponse::new("Emergency state updated")))
}
