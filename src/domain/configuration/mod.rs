pub mod client_config;
pub mod loader;

pub use client_config::{ClientConfig, DEFAULT_ENDPOINT, OutputConfig, ServiceConfig};
pub use loader::{CONFIG_DIR, default_config_path, load_config, parse_config_content};
