use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::handles::*;
use crate::services::SyncService;

pub fn create_app(settings: &Arc<Settings>) -> Router {
    let sync_service = Arc::new(SyncService::new(&settings.sync));

    create_router(sync_service)
}

pub fn create_router(sync_service: Arc<SyncService>) -> Router {
    let sync_state = SyncState { sync_service };

    Router::new()
        .merge(esp_router(sync_state.clone()))
        .merge(dashboard_router(sync_state))
        .merge(docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
