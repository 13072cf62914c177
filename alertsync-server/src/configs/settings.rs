use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retention {
    /// Entries kept by the event log before the oldest is evicted
    pub log_capacity: usize,
    /// Entries returned to a dashboard poll
    pub dashboard_window: usize,
}

impl Default for Retention {
    fn default() -> Self {
        Self {
            log_capacity: 50,
            dashboard_window: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    #[serde(default)]
    pub sync: Retention,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("ALERTSYNC").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
