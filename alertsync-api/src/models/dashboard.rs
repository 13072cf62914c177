use serde::{Deserialize, Serialize};

use super::{DeviceState, EventLogEntry};

/// Combined state polled by dashboards.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Current device snapshot
    pub esp: DeviceState,
    /// Most recent log entries, oldest first
    pub logs: Vec<EventLogEntry>,
}
