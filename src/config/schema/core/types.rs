use super::super::{AccessConfig, GcloudConfig, ObservabilityConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory under the user's home holding the default config file.
pub(super) const CONFIG_DIR_NAME: &str = ".gcloud-guard";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path the config was read from - not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub access: AccessConfig,

    #[serde(default)]
    pub gcloud: GcloudConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(CONFIG_DIR_NAME).join("config.toml"),
            access: AccessConfig::default(),
            gcloud: GcloudConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    /// Startup validation. A config that fails here never serves a request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.access.validate()?;

        let mut errors = self.gcloud.validate();
        if self.observability.level().is_none() {
            errors.push(format!(
                "observability.log_level '{}' is not a valid level",
                self.observability.log_level
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
