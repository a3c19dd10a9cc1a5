//! Configuration loading and resolution
//!
//! Resolution follows the priority order used across the Tonearm modules:
//! 1. Explicit override (e.g. command-line argument of the host process)
//! 2. Environment variable (`TONEARM_RPC_PATH`, `TONEARM_RPC_BIND`)
//! 3. `tonearm/config.toml` in the platform config directory
//! 4. Compiled default (fallback)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tonearm_common::{Error, Result};

/// Environment variable overriding the RPC path.
pub const ENV_RPC_PATH: &str = "TONEARM_RPC_PATH";
/// Environment variable overriding the bind address.
pub const ENV_RPC_BIND: &str = "TONEARM_RPC_BIND";

const DEFAULT_PATH: &str = "/rpc";
const DEFAULT_BIND: &str = "127.0.0.1:5775";

/// RPC module configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcConfig {
    /// HTTP path the dispatcher is registered on.
    #[serde(default = "default_path")]
    pub path: String,

    /// Address the bundled axum transport binds to.
    #[serde(default = "default_bind")]
    pub bind_addr: String,
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            bind_addr: default_bind(),
        }
    }
}

impl RpcConfig {
    /// Resolves the configuration, letting explicit overrides win over the
    /// environment, the environment over the config file, and the config
    /// file over compiled defaults.
    pub fn resolve(path_override: Option<&str>, bind_override: Option<&str>) -> Result<Self> {
        Self::resolve_from(config_file().as_deref(), path_override, bind_override)
    }

    /// Like [`resolve`](Self::resolve), but reading the given config file
    /// instead of the platform location. The file may be absent.
    pub fn resolve_from(
        file: Option<&Path>,
        path_override: Option<&str>,
        bind_override: Option<&str>,
    ) -> Result<Self> {
        let mut config = match file {
            Some(file) if file.exists() => Self::from_file(file)?,
            _ => Self::default(),
        };

        if let Ok(path) = std::env::var(ENV_RPC_PATH) {
            config.path = path;
        }
        if let Ok(bind) = std::env::var(ENV_RPC_BIND) {
            config.bind_addr = bind;
        }

        if let Some(path) = path_override {
            config.path = path.to_string();
        }
        if let Some(bind) = bind_override {
            config.bind_addr = bind.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads and parses a TOML config file.
    pub fn from_file(file: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(file)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid config file {:?}: {}", file, e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(Error::Config(format!(
                "rpc path must begin with '/': {}",
                self.path
            )));
        }
        Ok(())
    }
}

/// Platform config file location: `<config dir>/tonearm/config.toml`.
fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tonearm").join("config.toml"))
}
