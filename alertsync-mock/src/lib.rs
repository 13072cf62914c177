use std::sync::Arc;

use alertsync_api::models::{EventLogEntry, ServoStatusResponse};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time;

use crate::client::{ClientError, SyncClient};
use crate::settings::{Role, Settings};
use crate::simulate::{DashboardCommand, DashboardSim, DeviceSim, fresh_entries, render_entry, render_status};

pub mod client;
pub mod settings;
pub mod simulate;

pub async fn run(settings: &Arc<Settings>) {
    let client = SyncClient::new(settings.mock.server_url.clone());
    tracing::info!("running as {:?} against {}", settings.mock.role, client.base_url());

    let task = async {
        match settings.mock.role {
            Role::Device => run_device(&client, settings).await,
            Role::Dashboard => run_dashboard(&client, settings).await,
        }
    };

    tokio::select! {
        _ = task => {},
        _ = tokio::signal::ctrl_c() => tracing::info!("stopping mock"),
    }
}

async fn run_device(client: &SyncClient, settings: &Settings) {
    let mut rng = StdRng::from_os_rng();
    let mut device = DeviceSim::new(1024);
    let mut interval = time::interval(settings.mock.report_interval());

    loop {
        interval.tick().await;

        device.step(&mut rng);
        if device.press_panic_button() {
            tracing::warn!("danger level critical, pressing the emergency button");
            if let Err(e) = client.report_emergency(true).await {
                report_failure(&e);
            }
        }

        let report = device.report();
        tracing::debug!("Send: {:?}", report);

        if let Err(e) = client.report_telemetry(&report).await {
            report_failure(&e);
            continue;
        }

        match client.control().await {
            Ok(control) => {
                if control.servo_open != device.servo_open {
                    tracing::info!("door {}", if control.servo_open { "opening" } else { "closing" });
                }
                device.apply(control);
            }
            Err(e) => report_failure(&e),
        }
    }
}

async fn run_dashboard(client: &SyncClient, settings: &Settings) {
    let mut interval = time::interval(settings.mock.poll_interval());
    let mut toggle = settings.mock.toggle_interval().map(|period| {
        // The first tick of an interval fires immediately; start one period out.
        time::interval_at(time::Instant::now() + period, period)
    });
    let mut operator = DashboardSim::new();
    let mut last_seen: Option<EventLogEntry> = None;

    loop {
        tokio::select! {
            _ = interval.tick() => poll_dashboard(client, &mut last_seen).await,
            _ = next_toggle(&mut toggle) => {
                if let Err(e) = issue_command(client, operator.next_command()).await {
                    report_failure(&e);
                }
            }
        }
    }
}

async fn poll_dashboard(client: &SyncClient, last_seen: &mut Option<EventLogEntry>) {
    let dashboard = match client.dashboard().await {
        Ok(dashboard) => dashboard,
        Err(e) => {
            report_failure(&e);
            return;
        }
    };

    tracing::info!("{}", render_status(&dashboard.esp));

    // Newest first, as a dashboard shows them.
    for entry in fresh_entries(&dashboard.logs, last_seen.as_ref()).iter().rev() {
        tracing::info!("{}", render_entry(entry));
    }

    if let Some(newest) = dashboard.logs.last() {
        *last_seen = Some(newest.clone());
    }
}

async fn next_toggle(toggle: &mut Option<time::Interval>) {
    match toggle {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// Sends one operator action and reads back the commanded door state.
pub async fn issue_command(client: &SyncClient, command: DashboardCommand) -> Result<ServoStatusResponse, ClientError> {
    tracing::info!("operator action: {:?}", command);

    let response = match command {
        DashboardCommand::OpenServo => client.set_servo(true).await?,
        DashboardCommand::CloseServo => client.set_servo(false).await?,
        DashboardCommand::EmergencyOn => client.dashboard_emergency(true).await?,
        DashboardCommand::EmergencyOff => client.dashboard_emergency(false).await?,
    };
    tracing::debug!("{}", response.message);

    let status = client.servo_status().await?;
    tracing::info!("door command is {}", if status.servo_open { "open" } else { "closed" });

    Ok(status)
}

fn report_failure(error: &ClientError) {
    match error {
        ClientError::Unreachable { .. } => tracing::warn!("{}", error),
        _ => tracing::error!("{}", error),
    }
}
