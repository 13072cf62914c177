use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::classify::{Category, classify};

/// Latest snapshot reported by the device.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    /// Raw sensor reading
    pub analog_input: i32,
    /// Severity metric (0-100)
    pub danger_level: i32,
    /// Active alarm condition
    pub emergency: bool,
    pub red_led: bool,
    pub blue_led: bool,
    pub buzzer: bool,
    pub emergency_led: bool,
    /// Door servo position reported by the device
    pub servo_open: bool,
    /// Server time of the last report, null until the first one arrives
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
}

impl DeviceState {
    pub fn category(&self) -> Category {
        classify(self.danger_level, self.emergency)
    }
}

/// Telemetry pushed by the device. Every field is optional on the wire.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryReport {
    #[serde(default, alias = "analog_input", skip_serializing_if = "Option::is_none")]
    pub analog_input: Option<i32>,
    #[serde(default, alias = "danger_level", skip_serializing_if = "Option::is_none")]
    pub danger_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency: Option<bool>,
    #[serde(default, alias = "red_led", skip_serializing_if = "Option::is_none")]
    pub red_led: Option<bool>,
    #[serde(default, alias = "blue_led", skip_serializing_if = "Option::is_none")]
    pub blue_led: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buzzer: Option<bool>,
    #[serde(default, alias = "emergency_led", skip_serializing_if = "Option::is_none")]
    pub emergency_led: Option<bool>,
    #[serde(default, alias = "servo_open", skip_serializing_if = "Option::is_none")]
    pub servo_open: Option<bool>,
}

impl TelemetryReport {
    /// Builds the replacement snapshot. Absent fields take their type default
    /// rather than keeping the previous value.
    pub fn into_state(self, now: OffsetDateTime) -> DeviceState {
        DeviceState {
            analog_input: self.analog_input.unwrap_or_default(),
            danger_level: self.danger_level.unwrap_or_default(),
            emergency: self.emergency.unwrap_or_default(),
            red_led: self.red_led.unwrap_or_default(),
            blue_led: self.blue_led.unwrap_or_default(),
            buzzer: self.buzzer.unwrap_or_default(),
            emergency_led: self.emergency_led.unwrap_or_default(),
            servo_open: self.servo_open.unwrap_or_default(),
            timestamp: Some(now),
        }
    }
}
