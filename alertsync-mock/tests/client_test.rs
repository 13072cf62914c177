use std::sync::Arc;

use alertsync_api::models::{ControlMailbox, TelemetryReport};
use alertsync_mock::client::{ClientError, SyncClient};
use alertsync_mock::issue_command;
use alertsync_mock::simulate::{ANALOG_MAX, DashboardCommand, DashboardSim, DeviceSim};
use alertsync_server::app::create_router;
use alertsync_server::services::SyncService;
use tokio::net::TcpListener;

async fn spawn_server() -> (SyncClient, Arc<SyncService>) {
    let sync_service = Arc::new(SyncService::default());
    let router = create_router(sync_service.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (SyncClient::new(format!("http://{address}/")), sync_service)
}

#[tokio::test]
async fn test_device_and_dashboard_round_trip() {
    let (client, sync_service) = spawn_server().await;

    let ack = client
        .report_telemetry(&TelemetryReport {
            danger_level: Some(85),
            emergency: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(ack.message, "ESP data received");

    let dashboard = client.dashboard().await.unwrap();
    assert_eq!(dashboard.esp.danger_level, 85);
    assert!(dashboard.esp.emergency);
    assert_eq!(dashboard.logs.last().unwrap().event, "EMERGENCY ACTIVATED");

    client.set_servo(true).await.unwrap();
    client.dashboard_emergency(true).await.unwrap();
    assert!(client.servo_status().await.unwrap().servo_open);

    let control = client.control().await.unwrap();
    assert!(control.servo_open);
    assert!(control.emergency_button);

    client.report_emergency(false).await.unwrap();
    assert!(!sync_service.telemetry().await.emergency);
    assert_eq!(sync_service.event_log_len().await, 4);
}

#[tokio::test]
async fn test_simulated_device_follows_mailbox() {
    let (client, sync_service) = spawn_server().await;
    let mut device = DeviceSim::new(500);

    client.report_telemetry(&device.report()).await.unwrap();
    client.set_servo(true).await.unwrap();

    device.apply(client.control().await.unwrap());
    client.report_telemetry(&device.report()).await.unwrap();

    let state = sync_service.telemetry().await;
    assert!(state.servo_open);
    assert!(state.blue_led);
    assert_eq!(state.danger_level, 12);
}

#[tokio::test]
async fn test_device_in_emergency_stays_flagged() {
    let (client, sync_service) = spawn_server().await;
    let mut device = DeviceSim::new(3000);

    client.report_telemetry(&device.report()).await.unwrap();
    device.apply(ControlMailbox {
        emergency_button: true,
        servo_open: false,
    });

    for _ in 0..3 {
        client.report_telemetry(&device.report()).await.unwrap();
        let state = sync_service.telemetry().await;
        assert!(state.emergency);
        assert!(state.emergency_led);
    }

    let logs = sync_service.recent(10).await;
    assert_eq!(logs.last().unwrap().event, "EMERGENCY ACTIVATED");
    assert!(logs.last().unwrap().emergency);
}

#[tokio::test]
async fn test_panic_button_reaches_server() {
    let (client, sync_service) = spawn_server().await;
    let mut device = DeviceSim::new(ANALOG_MAX);

    assert!(device.press_panic_button());
    client.report_emergency(true).await.unwrap();
    client.report_telemetry(&device.report()).await.unwrap();

    assert!(sync_service.telemetry().await.emergency);
    assert!(sync_service.control().await.emergency_button);

    let events: Vec<String> = sync_service.recent(10).await.into_iter().map(|e| e.event).collect();
    assert_eq!(events, vec!["PHYSICAL EMERGENCY BUTTON PRESSED", "EMERGENCY ACTIVATED"]);
}

#[tokio::test]
async fn test_dashboard_operator_cycle() {
    let (client, sync_service) = spawn_server().await;
    let mut operator = DashboardSim::new();

    let command = operator.next_command();
    assert_eq!(command, DashboardCommand::OpenServo);
    assert!(issue_command(&client, command).await.unwrap().servo_open);

    issue_command(&client, operator.next_command()).await.unwrap();
    assert!(sync_service.control().await.emergency_button);

    issue_command(&client, operator.next_command()).await.unwrap();
    assert!(!sync_service.control().await.emergency_button);

    let status = issue_command(&client, operator.next_command()).await.unwrap();
    assert!(!status.servo_open);

    let events: Vec<String> = sync_service.recent(10).await.into_iter().map(|e| e.event).collect();
    assert_eq!(
        events,
        vec![
            "Servo opened",
            "DASHBOARD EMERGENCY BUTTON PRESSED",
            "Dashboard emergency cleared",
            "Servo closed",
        ]
    );
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = SyncClient::new(format!("http://{address}"));
    let error = client.dashboard().await.unwrap_err();

    assert!(matches!(error, ClientError::Unreachable { .. }));
    assert!(error.to_string().starts_with("Cannot reach the sync server"));
}
