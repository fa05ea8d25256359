//! Configuration schema and layered loading
//!
//! Values are merged in order, later sources winning:
//! 1. Built-in defaults
//! 2. `jqgen.toml` (or an explicit file)
//! 3. `JQGEN_` environment variables, with `__` separating nested keys
//!    (`JQGEN_JQUERY__USE_DOLLAR=false`)

use crate::error::{ConfigError, Result};
use crate::level::LogLevel;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use jqgen::JQueryAlias;
use jqgen_js::WriterSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "jqgen.toml";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "JQGEN_";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JqgenConfig {
    /// How generated code is laid out
    pub writer: WriterSettings,
    pub jquery: JQueryConfig,
    pub logging: LoggingConfig,
}

/// Which name generated code uses for the jQuery function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JQueryConfig {
    /// Emit `$` (true) or `jQuery` (false)
    pub use_dollar: bool,
}

impl Default for JQueryConfig {
    fn default() -> Self {
        Self { use_dollar: true }
    }
}

impl JQueryConfig {
    pub fn alias(&self) -> JQueryAlias {
        JQueryAlias::from_use_dollar(self.use_dollar)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl JqgenConfig {
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Look for `jqgen.toml` directly inside `root`
    pub fn discover(root: &Path) -> Option<PathBuf> {
        let candidate = root.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// The merged provider chain, before extraction
    ///
    /// An explicit `config_path` must exist. Without one, `jqgen.toml` in the
    /// current directory is used if present.
    pub fn figment(config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        match config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                tracing::debug!(path = %path.display(), "merging config file");
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let cwd = std::env::current_dir()?;
                if let Some(found) = Self::discover(&cwd) {
                    tracing::debug!(path = %found.display(), "merging discovered config file");
                    figment = figment.merge(Toml::file(found));
                }
            }
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load with defaults, config file and environment merged
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(config_path)?
            .extract()
            .map_err(ConfigError::from_figment)?;
        tracing::debug!(
            use_dollar = config.jquery.use_dollar,
            indent_and_align = config.writer.indent_and_align,
            level = %config.logging.level,
            "loaded jqgen config"
        );
        Ok(config)
    }

    /// Load using `jqgen.toml` from `root` if it has one
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        match Self::discover(root) {
            Some(path) => Self::load(Some(&path)),
            None => Self::figment_without_file()
                .extract()
                .map_err(ConfigError::from_figment),
        }
    }

    fn figment_without_file() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default_config()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Writer settings with the configured jQuery alias registered
    pub fn to_writer_settings(&self) -> WriterSettings {
        self.jquery.alias().apply(self.writer.clone())
    }

    /// Render as TOML, e.g. to write a starter `jqgen.toml`
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Install a subscriber at the configured level
    #[cfg(feature = "logging")]
    pub fn init_logging(&self) {
        crate::logging::init_logging(self.logging.level);
    }
}
