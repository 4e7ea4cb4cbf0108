#![forbid(unsafe_code)]

//! Structured logging facade.
//!
//! With the `tracing` feature enabled, the `tracing` macros are re-exported
//! here (and at the crate root) so downstream crates share one version.
//! Without it this module is empty and call sites compile away behind
//! `#[cfg(feature = "tracing")]`.
//!
//! `tracing-json` adds [`init_json_logging`], a one-line JSON subscriber
//! filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber honoring `RUST_LOG` (default `info`).
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
}
