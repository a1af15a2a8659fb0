//! Structured logging with tracing
//!
//! `ACTCACHE_LOG` replaces the whole filter when set. Otherwise the filter
//! is the configured level, with an optional override for the cacher's
//! hit/miss target so lookups can be traced without raising everything else.

use crate::constants::{CACHER_LOG_TARGET, LOG_FILE_DEFAULT_STEM, LOG_FILTER_ENV};
use actcache_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use tracing::{Level, info, warn};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

type OutputLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// Fails if a level is invalid or a global subscriber is already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_FILTER_ENV) {
        Ok(filter) => filter,
        Err(_) => default_filter(&config)?,
    };

    Registry::default()
        .with(filter)
        .with(output_layers(&config))
        .try_init()
        .map_err(|e| Error::Infrastructure {
            message: "Failed to install tracing subscriber".to_string(),
            source: Some(Box::new(e)),
        })?;

    info!(
        level = %config.level,
        cacher_level = config.cacher_level.as_deref().unwrap_or(&config.level),
        json = config.json_format,
        "Logging initialized"
    );
    Ok(())
}

/// Filter built from the configuration alone, ignoring `ACTCACHE_LOG`
pub fn default_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let level = directive_level(&config.level)?;
    let directives = match &config.cacher_level {
        Some(cacher_level) => {
            let cacher_level = directive_level(cacher_level)?;
            format!("{level},{CACHER_LOG_TARGET}={cacher_level}")
        }
        None => level,
    };

    EnvFilter::try_new(&directives).map_err(|e| Error::Configuration {
        message: format!("Invalid log filter '{directives}'"),
        source: Some(Box::new(e)),
    })
}

fn directive_level(level: &str) -> Result<String> {
    parse_log_level(level).map(|level| level.as_str().to_ascii_lowercase())
}

fn output_layers(config: &LoggingConfig) -> Vec<OutputLayer> {
    let stdout = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);
    let mut layers: Vec<OutputLayer> = vec![if config.json_format {
        stdout.json().boxed()
    } else {
        stdout.boxed()
    }];

    if let Some(path) = &config.file_output {
        let file = fmt::layer()
            .with_writer(daily_appender(path))
            .with_ansi(false)
            .with_target(true);
        layers.push(if config.json_format {
            file.json().boxed()
        } else {
            file.boxed()
        });
    }
    layers
}

fn daily_appender(path: &Path) -> RollingFileAppender {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(LOG_FILE_DEFAULT_STEM));
    tracing_appender::rolling::daily(dir, stem)
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!("Invalid log level: {level}. Use trace, debug, info, warn, or error"),
            source: None,
        }),
    }
}

/// Report which configuration file the loader used
pub fn log_config_source(config_path: &Path, found: bool) {
    if found {
        info!(path = %config_path.display(), "Configuration file merged");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found, using defaults and environment");
    }
}
