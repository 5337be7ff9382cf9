//! Structured logging for sparse matrix operations
//!
//! The library emits `tracing` events unconditionally: `debug` for bulk
//! operations (resize, clear, swap, assignment, products) and `trace` when a
//! cursor falls back to re-seeking because its stride is not contiguous.
//! Events cost nothing until a subscriber is installed.
//!
//! Applications that do not bring their own subscriber can enable the
//! `tracing` feature and call [`init_tracing`] once at startup.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (default `tenrso_assoc=info,warn`)
//! - `TENRSO_ASSOC_LOG_FORMAT`: `pretty` (default), `json` or `compact`
//!
//! # Example
//!
//! ```ignore
//! use tenrso_assoc::logging::{init_tracing, TracingConfig, TracingFormat};
//!
//! init_tracing(TracingConfig {
//!     format: TracingFormat::Compact,
//!     filter: "tenrso_assoc=trace".to_string(),
//!     ..TracingConfig::default()
//! })?;
//! ```

use anyhow::Result;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable selecting the output format
pub const FORMAT_ENV: &str = "TENRSO_ASSOC_LOG_FORMAT";

const DEFAULT_FILTER: &str = "tenrso_assoc=info,warn";

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Multi-line human-readable output
    Pretty,
    /// One JSON object per event
    Json,
    /// One line per event
    Compact,
}

impl TracingFormat {
    /// Parse a format name; anything unrecognised is `Pretty`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub format: TracingFormat,
    /// Filter directive, e.g. `tenrso_assoc=debug`
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
    /// Show source file and line of each event
    pub with_location: bool,
}

impl TracingConfig {
    /// Configuration from explicit values, ignoring the environment
    pub fn new(format: TracingFormat, filter: impl Into<String>) -> Self {
        Self {
            format,
            filter: filter.into(),
            with_ansi: format != TracingFormat::Json,
            with_target: true,
            with_location: false,
        }
    }

    /// Configuration from `RUST_LOG` and `TENRSO_ASSOC_LOG_FORMAT`
    pub fn from_env() -> Self {
        let format = std::env::var(FORMAT_ENV)
            .map(|s| TracingFormat::parse(&s))
            .unwrap_or(TracingFormat::Pretty);
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
        Self::new(format, filter)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Install a global subscriber built from `config`
///
/// # Errors
///
/// Fails on an invalid filter directive or when a global subscriber is
/// already installed.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let base = fmt::layer()
        .with_target(config.with_target)
        .with_file(config.with_location)
        .with_line_number(config.with_location);

    match config.format {
        TracingFormat::Pretty => {
            let layer = base.pretty().with_ansi(config.with_ansi).with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        TracingFormat::Json => {
            let layer = base.json().with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        TracingFormat::Compact => {
            let layer = base.compact().with_ansi(config.with_ansi).with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    tracing::debug!(format = ?config.format, "tracing initialised");
    Ok(())
}

/// No-op without the `tracing` feature
#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: TracingConfig) -> Result<()> {
    Ok(())
}
