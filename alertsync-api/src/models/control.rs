use serde::{Deserialize, Serialize};

/// Pending commands awaiting device pickup.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlMailbox {
    /// Emergency intent raised by a dashboard or the physical button
    pub emergency_button: bool,
    /// Desired door state
    pub servo_open: bool,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServoStatusResponse {
    pub servo_open: bool,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyRequest {
    /// Requested emergency state, false when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency: Option<bool>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServoRequest {
    /// Requested door state, false when absent
    #[serde(default, alias = "servo_open", skip_serializing_if = "Option::is_none")]
    pub servo_open: Option<bool>,
}

/// Who raised an emergency intent. Only affects the logged wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyOrigin {
    /// Physical button on the device
    Device,
    /// Override from a control dashboard
    Dashboard,
}
