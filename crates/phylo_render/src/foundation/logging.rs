//! Logging utilities and structured logging support
//!
//! The render core logs through the `log` facade only; the embedding
//! application picks the sink. These helpers wire up `env_logger` for
//! applications that do not bring their own.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the `RUST_LOG` environment variable
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a fallback filter
///
/// Per-candidate placement diagnostics log at `debug` and per-frame camera
/// state at `trace`, both of which flood at display refresh rate; a filter
/// such as `"info"` keeps the default output usable while `RUST_LOG` can
/// still override it.
pub fn init_with_default(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
