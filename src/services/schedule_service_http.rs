//! Scheduling service client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::{AppError, ScheduleRequest, ScheduleResponse, ServiceConfig};
use crate::ports::ScheduleService;

/// HTTP client for the scheduling service.
#[derive(Debug, Clone)]
pub struct HttpScheduleService {
    endpoint: Url,
    client: Client,
}

impl HttpScheduleService {
    /// Create a new HTTP client for the configured endpoint.
    pub fn new(config: &ServiceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint: config.endpoint.clone(), client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ScheduleService for HttpScheduleService {
    fn create_schedule(&self, request: &ScheduleRequest) -> Result<ScheduleResponse, AppError> {
        tracing::info!(endpoint = %self.endpoint, "submitting schedule request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;

        match ScheduleResponse::from_json(&body) {
            Ok(reply) => {
                if !status.is_success() {
                    tracing::debug!(status = status.as_u16(), "service reply carried error status");
                }
                Ok(reply)
            }
            Err(e) if status.is_success() => {
                Err(AppError::Transport(format!("Failed to parse response: {}", e)))
            }
            Err(_) => {
                Err(AppError::Transport(format!("Service error ({}): {}", status.as_u16(), body)))
            }
        }
    }
}
