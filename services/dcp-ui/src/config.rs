//! Configuration types for the DCP UI host

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

/// Where the host listens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

/// The DCP API server that owns discovery and station state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Compiled frontend assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory holding `pkg/` (wasm bundle) and `public/` (static files)
    #[serde(default = "default_site_root")]
    pub root: PathBuf,
    /// Base name of the `.js`/`.wasm` pair under `pkg/`
    #[serde(default = "default_bundle")]
    pub bundle: String,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_site_root(),
            bundle: default_bundle(),
            title: default_title(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8085
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_bundle() -> String {
    "dcp-ui".to_string()
}

fn default_title() -> String {
    "DCP".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::DcpUiError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
