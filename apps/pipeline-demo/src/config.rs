//! Application configuration.
//!
//! Layered:
//! 1) defaults -> 2) YAML (if provided) -> 3) env (`APP__*`) -> 4) CLI overrides

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use greeter::DemoInput;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables that override configuration,
/// e.g. `APP__DEMO__NAME` or `APP__LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "APP__";

/// Top-level sections read from the environment; other `APP__*` variables are ignored.
const ENV_SECTIONS: [&str; 2] = ["demo", "logging"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("invalid configuration")]
    Extract(#[from] Box<figment::Error>),

    #[error("failed to render configuration as YAML: {0}")]
    Render(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub demo: DemoInput,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset and no `-v` is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

/// Values taken from the command line; `None` keeps the configured value.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub name: Option<String>,
    pub a: Option<i64>,
    pub b: Option<i64>,
}

impl AppConfig {
    /// Load configuration from defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is given but is not a file, or if the
    /// merged configuration cannot be extracted.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let env = Env::prefixed(ENV_PREFIX)
            .split("__")
            .filter(|key| is_known_env_key(key.as_str()));

        Self::extract(figment.merge(env))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::from(Box::new(e)))
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(name) = overrides.name {
            self.demo.name = Some(name);
        }
        if let Some(a) = overrides.a {
            self.demo.a = a;
        }
        if let Some(b) = overrides.b {
            self.demo.b = b;
        }
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Render(e.to_string()))
    }
}

/// Whether an `APP__`-stripped key belongs to one of [`ENV_SECTIONS`].
fn is_known_env_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase().replace("__", ".");
    let section = key.split('.').next().unwrap_or_default();
    ENV_SECTIONS.contains(&section)
}
