//! Client configuration loading.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, ClientConfig};

/// Directory holding timetabler state in the working directory.
pub const CONFIG_DIR: &str = ".timetabler";

/// Default location of the configuration file, relative to `root`.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join("config.toml")
}

/// Load the client configuration.
///
/// An explicit `path` must exist. Without one, `.timetabler/config.toml` under
/// `root` is read when present and defaults apply otherwise.
pub fn load_config(root: &Path, path: Option<&Path>) -> Result<ClientConfig, AppError> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(AppError::Configuration(format!(
                    "Config file not found: {}",
                    explicit.display()
                )));
            }
            explicit.to_path_buf()
        }
        None => {
            let candidate = default_config_path(root);
            if !candidate.exists() {
                tracing::debug!(path = %candidate.display(), "no config file; using defaults");
                return Ok(ClientConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ClientConfig, AppError> {
    let config: ClientConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
