use alertsync_api::models::*;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Cannot reach the sync server at {url}, will retry on the next poll")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Sync server answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP peer of the sync server, usable from both the device and the dashboard side.
#[derive(Debug, Clone)]
pub struct SyncClient {
    http: reqwest::Client,
    base_url: String,
}

impl SyncClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn report_telemetry(&self, report: &TelemetryReport) -> Result<MessageResponse, ClientError> {
        self.post("/esp/update", report).await
    }

    pub async fn report_emergency(&self, emergency: bool) -> Result<MessageResponse, ClientError> {
        self.post("/esp/emergency", &EmergencyRequest { emergency: Some(emergency) })
            .await
    }

    pub async fn control(&self) -> Result<ControlMailbox, ClientError> {
        self.get("/esp/control").await
    }

    pub async fn servo_status(&self) -> Result<ServoStatusResponse, ClientError> {
        self.get("/esp/servo_status").await
    }

    pub async fn dashboard(&self) -> Result<DashboardResponse, ClientError> {
        self.get("/dashboard").await
    }

    pub async fn dashboard_emergency(&self, emergency: bool) -> Result<MessageResponse, ClientError> {
        self.post("/dashboard/emergency", &EmergencyRequest { emergency: Some(emergency) })
            .await
    }

    pub async fn set_servo(&self, open: bool) -> Result<MessageResponse, ClientError> {
        self.post("/esp/servo", &ServoRequest { servo_open: Some(open) })
            .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Unreachable { url, source })?;

        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::Unreachable { url, source })?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        response.json::<T>().await.map_err(ClientError::Decode)
    }
}
