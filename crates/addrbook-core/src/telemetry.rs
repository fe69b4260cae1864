//! Logging initialisation.
//!
//! The subscriber is installed once by the binary. Library crates only emit
//! events through `tracing` macros.

use serde::{Deserialize, Serialize};

/// Filter used when neither `RUST_LOG` nor configuration provides one.
pub const DEFAULT_LOG_FILTER: &str = "info,addrbook=debug,tower_http=debug";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line, including the current span fields.
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`.
#[cfg(feature = "logging")]
pub fn init_logging(level: &str, format: LogFormat) -> crate::AddrBookResult<()> {
    use crate::AddrBookError;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            AddrBookError::Configuration(format!("Invalid log level '{}': {}", level, e))
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    };

    result.map_err(|e| AddrBookError::Internal(format!("Failed to install logger: {}", e)))
}
