use std::path::PathBuf;

use anyhow::{Context, bail};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "shelf.yaml";

/// Top-level configuration, loaded from a YAML file.
///
/// Every key is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port, restricted to the unprivileged range.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Document root all request paths are resolved against.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Bound on the initial request-line read.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_read_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            root: default_root(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Loads configuration from the file named by `SHELF_CONFIG`
    /// (default `shelf.yaml`). A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("SHELF_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let cfg = match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_yaml(&contents)
                .with_context(|| format!("invalid config file {}", path))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self {
                server: ServerConfig::default(),
            },
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read config file {}", path));
            }
        };

        Ok(cfg)
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port < 1024 {
            bail!(
                "port {} out of range: must be between 1024 and 65535",
                self.server.port
            );
        }
        Ok(())
    }
}
