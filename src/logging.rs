// src/logging.rs - Tracing setup for native targets

//! Structured logging for the desktop build
//!
//! Console output in pretty or JSON format, plus an optional daily-rolling
//! file appender. The WASM build installs `tracing-wasm` from the entry point
//! in `lib.rs` instead and never calls into this module.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{Error, Result};

/// Initializes the global tracing subscriber from config.
///
/// Returns the appender guard when file logging is enabled; the caller must
/// keep it alive for the lifetime of the process or buffered lines are lost.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", config.filter, e)))?;

    let (file_layer, guard) = match &config.file_directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "hemline.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
    }
    .map_err(|e| Error::config(format!("Failed to install tracing subscriber: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_filter_is_config_error() {
        let config = LoggingConfig {
            filter: "not a [valid] filter!!".to_string(),
            ..Default::default()
        };
        let result = init(&config);
        assert!(result.is_err());
    }
}
