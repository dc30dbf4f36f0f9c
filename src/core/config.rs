use crate::error::{IsoAssetsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output_dir: PathBuf,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("."),
            timeout_secs: 120,
            connect_timeout_secs: 15,
            user_agent: format!("iso-assets/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the file in the user's
    /// config directory is read when present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(IsoAssetsError::config_error(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => match get_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        log::debug!("loading config from {}", config_path.display());
        let content = std::fs::read_to_string(&config_path)?;
        Self::from_toml(&content).map_err(|e| match e {
            IsoAssetsError::ConfigError { message } => IsoAssetsError::ConfigError {
                message: format!("{}: {message}", config_path.display()),
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| IsoAssetsError::config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(IsoAssetsError::config_error("timeout_secs must be greater than 0"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(IsoAssetsError::config_error(
                "connect_timeout_secs must be greater than 0",
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(IsoAssetsError::config_error("user_agent must not be empty"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("iso-assets").join(CONFIG_FILE_NAME))
}
