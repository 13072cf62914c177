use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::EmergencyOrigin;
use crate::classify::{Category, classify};

/// Fixed vocabulary of tracked transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    EmergencyActivated,
    EmergencyCleared,
    PhysicalButtonPressed,
    PhysicalCleared,
    DashboardButtonPressed,
    DashboardCleared,
    ServoOpened,
    ServoClosed,
}

impl EventKind {
    /// Transition carried by an explicit `emergency` field in a telemetry report.
    pub fn telemetry_emergency(emergency: bool) -> Self {
        if emergency {
            EventKind::EmergencyActivated
        } else {
            EventKind::EmergencyCleared
        }
    }

    pub fn emergency_button(origin: EmergencyOrigin, pressed: bool) -> Self {
        match (origin, pressed) {
            (EmergencyOrigin::Device, true) => EventKind::PhysicalButtonPressed,
            (EmergencyOrigin::Device, false) => EventKind::PhysicalCleared,
            (EmergencyOrigin::Dashboard, true) => EventKind::DashboardButtonPressed,
            (EmergencyOrigin::Dashboard, false) => EventKind::DashboardCleared,
        }
    }

    pub fn servo(open: bool) -> Self {
        if open {
            EventKind::ServoOpened
        } else {
            EventKind::ServoClosed
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EventKind::EmergencyActivated => "EMERGENCY ACTIVATED",
            EventKind::EmergencyCleared => "Emergency cleared",
            EventKind::PhysicalButtonPressed => "PHYSICAL EMERGENCY BUTTON PRESSED",
            EventKind::PhysicalCleared => "Physical emergency cleared",
            EventKind::DashboardButtonPressed => "DASHBOARD EMERGENCY BUTTON PRESSED",
            EventKind::DashboardCleared => "Dashboard emergency cleared",
            EventKind::ServoOpened => "Servo opened",
            EventKind::ServoClosed => "Servo closed",
        }
    }
}

/// Immutable record of a state transition.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLogEntry {
    /// Transition message
    pub event: String,
    /// Server time of the transition
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    /// Device danger level when the entry was written
    pub danger_level: i32,
    /// Device emergency flag when the entry was written
    pub emergency: bool,
}

impl EventLogEntry {
    pub fn new(kind: EventKind, time: OffsetDateTime, danger_level: i32, emergency: bool) -> Self {
        Self {
            event: kind.message().to_string(),
            time,
            danger_level,
            emergency,
        }
    }

    /// Classifies the entry from its own stored snapshot.
    pub fn category(&self) -> Category {
        classify(self.danger_level, self.emergency)
    }
}
