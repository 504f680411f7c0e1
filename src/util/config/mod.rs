//! minihm configuration
//!
//! Engine settings with merge semantics.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. Environment variables (MINIHM_ALGORITHM, MINIHM_LOG)
//! 2. Config file (RON)
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use minihm::util::config::EngineConfig;
//!
//! let config = EngineConfig::from_ron_str("(algorithm: J)").unwrap();
//! assert_eq!(config.algorithm, minihm::Algorithm::J);
//! ```

use crate::infer::Algorithm;
use crate::util::logger::LogLevel;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable selecting the algorithm (`w` or `j`)
pub const ENV_ALGORITHM: &str = "MINIHM_ALGORITHM";
/// Environment variable selecting the log level
pub const ENV_LOG: &str = "MINIHM_LOG";

/// Inference engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Algorithm used by `TypeInferencer::infer`
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Index of the first type variable handed out
    #[serde(default)]
    pub first_var: usize,
    /// Log level used by `util::logger`
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::W,
            first_var: 0,
            log_level: LogLevel::Info,
        }
    }
}

impl EngineConfig {
    /// Parse a RON document; missing fields take their defaults
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Read a config file as-is, without environment overrides
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_ron_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load a config file and apply environment overrides
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Self::from_file(path)?
            .with_env_overrides()
            .context("applying environment overrides")
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply `MINIHM_ALGORITHM` / `MINIHM_LOG` from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_ALGORITHM) {
            self.algorithm = value
                .trim()
                .parse()
                .map_err(|message| ConfigError::InvalidEnv {
                    key: ENV_ALGORITHM,
                    message,
                })?;
        }
        if let Some(value) = lookup(ENV_LOG) {
            self.log_level = value
                .trim()
                .parse()
                .map_err(|message| ConfigError::InvalidEnv {
                    key: ENV_LOG,
                    message,
                })?;
        }
        Ok(self)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    ParseError(#[from] ron::error::SpannedError),
    #[error("Config serialize error: {0}")]
    SerializeError(#[from] ron::Error),
    #[error("Invalid value for {key}: {message}")]
    InvalidEnv { key: &'static str, message: String },
}
