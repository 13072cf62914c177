use std::env;
use std::error::Error;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Reports telemetry and follows the control mailbox
    Device,
    /// Polls the combined state like a control dashboard
    Dashboard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mock {
    pub server_url: String,
    pub role: Role,
    pub poll_interval_ms: u64,
    pub report_interval_ms: u64,
    #[serde(default)]
    pub toggle_interval_ms: u64,
}

impl Mock {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn report_interval(&self) -> Duration {
        Duration::from_millis(self.report_interval_ms.max(1))
    }

    /// `None` when the dashboard should only observe.
    pub fn toggle_interval(&self) -> Option<Duration> {
        (self.toggle_interval_ms > 0).then(|| Duration::from_millis(self.toggle_interval_ms))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub mock: Mock,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let mut settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        if let Ok(url) = env::var("MOCK_SERVER_URL") {
            settings.mock.server_url = url;
        }

        if let Ok(role) = env::var("MOCK_ROLE") {
            settings.mock.role = match role.to_ascii_lowercase().as_str() {
                "device" => Role::Device,
                "dashboard" => Role::Dashboard,
                other => return Err(format!("unknown mock role {other:?}").into()),
            };
        }

        Ok(settings)
    }
}
