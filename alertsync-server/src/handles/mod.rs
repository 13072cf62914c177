pub mod dashboard_handle;
pub mod docs_handle;
pub mod esp_handle;

pub use dashboard_handle::*;
pub use docs_handle::*;
pub use esp_handle::*;

use std::sync::Arc;

use crate::services::SyncService;

#[derive(Clone)]
pub struct SyncState {
    pub sync_service: Arc<SyncService>,
}
