//! Configuration for jqgen
//!
//! Loads writer and alias settings from defaults, `jqgen.toml` and
//! `JQGEN_*` environment variables using figment. With the `logging`
//! feature it also installs a `tracing` subscriber.
//!
//! ```rust,no_run
//! use jqgen_config::JqgenConfig;
//!
//! let config = JqgenConfig::load(None)?;
//! let settings = config.to_writer_settings();
//! let code = jqgen::jquery_document().ready().to_js_code(&settings);
//! # Ok::<(), jqgen_config::ConfigError>(())
//! ```

mod config;
mod error;
mod level;
#[cfg(feature = "logging")]
mod logging;

pub use config::{CONFIG_FILE_NAME, ENV_PREFIX, JQueryConfig, JqgenConfig, LoggingConfig};
pub use error::{ConfigError, Result};
pub use level::LogLevel;
#[cfg(feature = "logging")]
pub use logging::{init_logging, init_logging_from_env};
