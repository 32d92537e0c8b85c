use super::Config;
use super::types::CONFIG_DIR_NAME;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.gcloud-guard/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let guard_dir = home.join(CONFIG_DIR_NAME);
        let config_path = guard_dir.join("config.toml");

        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        fs::create_dir_all(&guard_dir).context("Failed to create .gcloud-guard directory")?;
        let config = Self {
            config_path,
            ..Self::default()
        };
        config.save()?;
        Ok(config)
    }

    /// Load an explicit config file. `.json` files are parsed as JSON,
    /// everything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut config: Config = if is_json {
            serde_json::from_str(&contents).context("Failed to parse JSON config file")?
        } else {
            toml::from_str(&contents).context("Failed to parse config file")?
        };
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
