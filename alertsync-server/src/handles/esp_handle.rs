use alertsync_api::models::*;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use super::SyncState;
use crate::errors::ApiError;

pub fn esp_router(sync_state: SyncState) -> Router {
    Router::new()
        .route("/esp/update", post(update_esp))
        .route("/esp/emergency", post(esp_emergency))
        .route("/esp/servo", post(control_servo))
        .route("/esp/servo_status", get(get_servo_status))
        .route("/esp/control", get(get_control))
        .with_state(sync_state)
}

#[utoipa::path(
    post,
    path = "/esp/update",
    tag = "esp",
    request_body = TelemetryReport,
    responses(
        (status = 200, description = "Telemetry stored", body = MessageResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 415, description = "Missing JSON content type")
    )
)]
pub async fn update_esp(
    State(state): State<SyncState>,
    WithRejection(Json(body), _): WithRejection<Json<TelemetryReport>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.sync_service.report_telemetry(body).await;

    Ok(Json(MessageResponse::new("ESP data received")))
}

#[utoipa::path(
    post,
    path = "/esp/emergency",
    tag = "esp",
    request_body = EmergencyRequest,
    responses(
        (status = 200, description = "Physical emergency button recorded", body = MessageResponse),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn esp_emergency(
    State(state): State<SyncState>,
    WithRejection(Json(body), _): WithRejection<Json<EmergencyRequest>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .sync_service
        .set_emergency_intent(body.emergency.unwrap_or_default(), EmergencyOrigin::Device)
        .await;

    Ok(Json(MessageResponse::new("Emergency state updated")))
}

#[utoipa::path(
    post,
    path = "/esp/servo",
    tag = "esp",
    request_body = ServoRequest,
    responses(
        (status = 200, description = "Servo command queued", body = MessageResponse),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn control_servo(
    State(state): State<SyncState>,
    WithRejection(Json(body), _): WithRejection<Json<ServoRequest>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .sync_service
        .set_servo_command(body.servo_open.unwrap_or_default())
        .await;

    Ok(Json(MessageResponse::new("Servo state updated")))
}

#[utoipa::path(
    get,
    path = "/esp/servo_status",
    tag = "esp",
    responses(
        (status = 200, description = "Pending servo command", body = ServoStatusResponse)
    )
)]
pub async fn get_servo_status(State(state): State<SyncState>) -> Json<ServoStatusResponse> {
    Json(state.sync_service.servo_status().await)
}

#[utoipa::path(
    get,
    path = "/esp/control",
    tag = "esp",
    responses(
        (status = 200, description = "Pending commands for the device", body = ControlMailbox)
    )
)]
pub async fn get_control(State(state): State<SyncState>) -> Json<ControlMailbox> {
    Json(state.sync_service.control().await)
}
