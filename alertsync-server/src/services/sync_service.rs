use alertsync_api::models::{
    ControlMailbox, DashboardResponse, DeviceState, EmergencyOrigin, EventKind, EventLogEntry,
    ServoStatusResponse, TelemetryReport,
};
use time::OffsetDateTime;

use crate::configs::Retention;
use crate::services::{ControlService, DeviceStateService, EventLogService};

/// Owns the device snapshot, the control mailbox and the event log.
///
/// Each store has its own lock. A log entry's snapshot is read from the
/// device store and that lock is released before the log is written, so no
/// two store locks are ever held at once.
pub struct SyncService {
    device: DeviceStateService,
    control: ControlService,
    log: EventLogService,
    dashboard_window: usize,
}

impl SyncService {
    pub fn new(retention: &Retention) -> Self {
        Self {
            device: DeviceStateService::new(),
            control: ControlService::new(),
            log: EventLogService::new(retention.log_capacity),
            dashboard_window: retention.dashboard_window,
        }
    }

    /// Stores a device report. Only an explicit `emergency` field produces a
    /// log entry; an absent one is not treated as `false` for logging.
    pub async fn report_telemetry(&self, report: TelemetryReport) -> DeviceState {
        let now = OffsetDateTime::now_utc();
        let explicit_emergency = report.emergency;

        let state = self.device.report(report, now).await;
        tracing::debug!(
            analog_input = state.analog_input,
            danger_level = state.danger_level,
            "telemetry received"
        );

        if let Some(emergency) = explicit_emergency {
            let kind = EventKind::telemetry_emergency(emergency);
            if emergency {
                tracing::warn!(danger_level = state.danger_level, "{}", kind.message());
            }

            self.log
                .push(EventLogEntry::new(kind, now, state.danger_level, state.emergency))
                .await;
        }

        state
    }

    /// Records an emergency intent in the mailbox and logs it with wording
    /// that depends on `origin`.
    ///
    /// A device-origin report also sets the stored device emergency flag, since
    /// it describes the device's own physical state.
    pub async fn set_emergency_intent(&self, emergency: bool, origin: EmergencyOrigin) -> EventLogEntry {
        self.control.set_emergency_intent(emergency).await;

        let snapshot = match origin {
            EmergencyOrigin::Device => self.device.set_emergency(emergency).await,
            EmergencyOrigin::Dashboard => self.device.snapshot().await,
        };

        let kind = EventKind::emergency_button(origin, emergency);
        if emergency {
            tracing::warn!(?origin, danger_level = snapshot.danger_level, "{}", kind.message());
        } else {
            tracing::info!(?origin, "{}", kind.message());
        }

        self.log.append(kind, &snapshot).await
    }

    pub async fn set_servo_command(&self, open: bool) -> EventLogEntry {
        self.control.set_servo_command(open).await;

        let snapshot = self.device.snapshot().await;
        let kind = EventKind::servo(open);
        tracing::info!("{}", kind.message());

        self.log.append(kind, &snapshot).await
    }

    pub async fn telemetry(&self) -> DeviceState {
        self.device.snapshot().await
    }

    pub async fn control(&self) -> ControlMailbox {
        self.control.mailbox().await
    }

    pub async fn servo_status(&self) -> ServoStatusResponse {
        ServoStatusResponse {
            servo_open: self.control.mailbox().await.servo_open,
        }
    }

    pub async fn recent(&self, count: usize) -> Vec<EventLogEntry> {
        self.log.recent(count).await
    }

    /// Device snapshot plus the configured window of most recent log entries.
    pub async fn dashboard(&self) -> DashboardResponse {
        let esp = self.device.snapshot().await;
        let logs = self.log.recent(self.dashboard_window).await;

        DashboardResponse { esp, logs }
    }

    pub async fn event_log_len(&self) -> usize {
        self.log.len().await
    }
}

impl Default for SyncService {
    fn default() -> Self {
        Self::new(&Retention::default())
    }
}
