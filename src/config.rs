//! Typed pool configuration from a TOML file.
//!
//! Loaded once at startup, fails fast on a missing file or an empty miner
//! command. Telemetry settings come from the environment instead (see the
//! binary), so a config file can be checked in without operator secrets.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// TCP port for the HTTP surface.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Miner name reported by /v1/info.
    #[serde(default = "default_name")]
    pub name: String,

    /// Demand indicator reported by /v1/info.
    #[serde(default = "default_demand")]
    pub demand: String,

    /// Program plus leading arguments for the external miner. The pool
    /// appends `--simple-output <prefix> --public-offset <base_key>`.
    pub miner_command: Vec<String>,

    /// Hard cap on prefix bit cost. When absent, derived from
    /// `max_characters`.
    pub max_bits: Option<u32>,

    /// Character-count limit used to derive `max_bits` when it is not set
    /// directly: one lead bit plus 32 bits per body character.
    #[serde(default = "default_max_characters")]
    pub max_characters: u32,
}

fn default_port() -> u16 {
    8080
}

fn default_name() -> String {
    "vanity-pool".to_string()
}

fn default_demand() -> String {
    "none".to_string()
}

fn default_max_characters() -> u32 {
    1
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("bad config {}: {e}", path.display())))?;
        if config.miner_command.is_empty() {
            return Err(Error::Config("miner_command must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Effective bit budget for admission control.
    pub fn max_bits(&self) -> u32 {
        self.max_bits.unwrap_or(1 + self.max_characters * 32)
    }
}
