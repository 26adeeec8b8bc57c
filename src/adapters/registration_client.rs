//! HTTP adapter for the registration service

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::RegistrationSettings;
use crate::domain::{RegistrationPort, SubmissionError, SubmissionResult};

pub const DEFAULT_REGISTRATION_ENDPOINT: &str = "http://127.0.0.1:5000/api/users/register";

/// Error body the registration service sends with 4xx/5xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    success: Option<bool>,
    msg: Option<String>,
}

pub struct HttpRegistrationClient {
    client: Client,
    endpoint: String,
}

impl HttpRegistrationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &RegistrationSettings) -> Self {
        Self::new(
            settings.endpoint.clone(),
            settings.timeout_seconds.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Prefer the service's `msg` field; fall back to the raw body
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.msg)
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl RegistrationPort for HttpRegistrationClient {
    async fn register(&self, payload: &Value) -> SubmissionResult<Value> {
        debug!(endpoint = %self.endpoint, "POST registration");

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        let body: Value = response.json().await?;
        Ok(body)
    }
}
