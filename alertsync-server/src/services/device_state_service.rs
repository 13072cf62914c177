use alertsync_api::models::{DeviceState, TelemetryReport};
use time::OffsetDateTime;
use tokio::sync::RwLock;

/// Holds the single latest device snapshot.
pub struct DeviceStateService {
    state: RwLock<DeviceState>,
}

impl DeviceStateService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(DeviceState::default()),
        }
    }

    /// Replaces the stored snapshot wholesale and returns the new contents.
    pub async fn report(&self, report: TelemetryReport, now: OffsetDateTime) -> DeviceState {
        let next = report.into_state(now);

        let mut state = self.state.write().await;
        *state = next.clone();

        next
    }

    /// Overwrites only the emergency flag, used when the device reports its
    /// physical button outside a full telemetry report.
    pub async fn set_emergency(&self, emergency: bool) -> DeviceState {
        let mut state = self.state.write().await;
        state.emergency = emergency;

        state.clone()
    }

    pub async fn snapshot(&self) -> DeviceState {
        self.state.read().await.clone()
    }
}

impl Default for DeviceStateService {
    fn default() -> Self {
        Self::new()
    }
}
