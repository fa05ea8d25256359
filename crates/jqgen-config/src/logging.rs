//! Subscriber setup for binaries that embed jqgen
//!
//! Library code only emits `tracing` events; nothing is printed until an
//! application installs a subscriber, either its own or the one set up here.

use crate::level::LogLevel;
use std::sync::Once;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Silent => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
    }
}

/// Install a global subscriber at `level`
///
/// Only the first call has an effect. `RUST_LOG` directives are layered on
/// top of `level`, e.g. `RUST_LOG=jqgen=trace` for selector traces.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level_filter(level).into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false).without_time())
            .try_init();
    });
}

/// Install a global subscriber configured only by `RUST_LOG`, defaulting to `info`
pub fn init_logging_from_env() {
    init_logging(LogLevel::default());
}
