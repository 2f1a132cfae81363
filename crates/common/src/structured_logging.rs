//! Logging bootstrap for the whole workspace
//!
//! One call from the binary entrypoint; everything else only uses the
//! `tracing` macros. `RUST_LOG` overrides the configured level.

use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Base level when RUST_LOG is not set ("info", "debug", ...)
    pub level: String,
    /// Emit JSON lines instead of the human-readable format
    pub json_output: bool,
    /// ANSI colors in the human-readable format
    pub color_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
            color_output: true,
        }
    }
}

impl LoggingConfig {
    /// Quiet configuration for interactive CLI use
    pub fn quiet() -> Self {
        Self {
            level: "warn".to_string(),
            ..Self::default()
        }
    }
}

/// Install the global tracing subscriber.
///
/// Returns an error if a subscriber is already installed.
pub fn init_structured_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    if config.json_output {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_current_span(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logging subscriber: {e}"))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_ansi(config.color_output)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logging subscriber: {e}"))?;
    }

    Ok(())
}
