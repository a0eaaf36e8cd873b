//! # Harness Configuration
//!
//! Optional settings for the generated harness. Without a config file the
//! built-in defaults apply, and those defaults produce the canonical hpb
//! harness text.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [harness]
//! arena_type = "hpb_Arena"
//! arena_new = "hpb_Arena_New"
//! buffer_len = 1
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every key may be omitted; missing keys fall back to the defaults above.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hpb_benchgen::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("benchgen.toml")?;
//!     println!("Arena type: {}", config.harness.arena_type);
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub harness: HarnessConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Runtime symbol names and buffer shape used by the emitted C program.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub arena_type: String,
    pub arena_new: String,
    pub buffer_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate().map_err(|e| anyhow!("Invalid config file {}: {}", path, e))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.harness.buffer_len == 0 {
            return Err(anyhow!("harness.buffer_len must be at least 1"));
        }
        if self.harness.arena_type.trim().is_empty() || self.harness.arena_new.trim().is_empty() {
            return Err(anyhow!("harness.arena_type and harness.arena_new must not be empty"));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            arena_type: "hpb_Arena".to_string(),
            arena_new: "hpb_Arena_New".to_string(),
            buffer_len: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: "info".to_string() }
    }
}
