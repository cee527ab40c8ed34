//! Client configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `.timetabler/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Scheduling service configuration.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Viewing surface configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.service.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Scheduling service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Endpoint receiving schedule requests.
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,
    /// Request timeout in seconds. Unset means wait for the service indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { endpoint: default_endpoint(), timeout_secs: None }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.endpoint.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "endpoint must use http or https, got '{}'",
                self.endpoint.scheme()
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}

/// Where rendered timetables are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_output_dir() }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("output dir must not be empty".to_string()));
        }
        Ok(())
    }
}

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/create_schedule";

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("Default endpoint URL must be valid")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("timetables")
}
