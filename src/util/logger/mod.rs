//! Logger module for minihm
//!
//! Go-style simple logging: `[LEVEL] message`
//!
//! The inference algorithms emit `trace` events for every expression node and
//! `debug` events for top-level results; nothing is printed unless a
//! subscriber is installed.
//!
//! # Usage
//!
//! ```rust
//! use minihm::util::{config::EngineConfig, logger};
//!
//! let config = EngineConfig::from_env().unwrap_or_default();
//! logger::init_from_config(&config);
//! tracing::info!("Hello, {}", "world");
//! ```

use crate::util::config::EngineConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        LevelFilter::from_level(level.into())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Initialize logger with default configuration (INFO level)
pub fn init() {
    init_with_level(LogLevel::Info);
}

/// Initialize logger at the level named by `config.log_level`
pub fn init_from_config(config: &EngineConfig) {
    init_with_level(config.log_level);
}

/// Initialize logger with custom level (Go style: `[LEVEL] message`)
///
/// A second call is a no-op: the first installed subscriber stays active.
pub fn init_with_level(level: LogLevel) {
    let filter = LevelFilter::from(level);

    // Go 风格：显示 [LEVEL] 前缀，不显示时间、不显示模块路径、无颜色
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
}

/// Initialize logger for debug use (DEBUG level)
pub fn init_debug() {
    init_with_level(LogLevel::Debug);
}

/// Initialize logger that shows every inference step (TRACE level)
pub fn init_trace() {
    init_with_level(LogLevel::Trace);
}
