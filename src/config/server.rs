//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Environment variable naming the configuration directory.
pub const CONFIG_DIR_VAR: &str = "SALARY_ENGINE_CONFIG";
/// Environment variable naming the listen address.
pub const LISTEN_ADDR_VAR: &str = "SALARY_ENGINE_ADDR";

const DEFAULT_CONFIG_DIR: &str = "./config/de2026";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Where the server reads its rules from and where it listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Tax-year configuration directory.
    pub config_dir: PathBuf,
    /// Socket address to bind.
    pub listen_addr: SocketAddr,
}

impl ServerSettings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_dir = lookup(CONFIG_DIR_VAR).unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());
        let addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let listen_addr = addr.parse().map_err(|_| EngineError::InvalidSetting {
            name: LISTEN_ADDR_VAR.to_string(),
            value: addr.clone(),
        })?;

        Ok(Self {
            config_dir: PathBuf::from(config_dir),
            listen_addr,
        })
    }
}
