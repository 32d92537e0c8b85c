use super::Config;

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(allow) = std::env::var("GCLOUD_GUARD_ALLOW")
            && !allow.trim().is_empty()
        {
            self.access.allow = Some(split_list(&allow));
        }

        if let Ok(deny) = std::env::var("GCLOUD_GUARD_DENY")
            && !deny.trim().is_empty()
        {
            self.access.deny = Some(split_list(&deny));
        }

        if let Ok(binary) = std::env::var("GCLOUD_GUARD_GCLOUD_BIN")
            && !binary.is_empty()
        {
            self.gcloud.binary = binary;
        }

        if let Ok(level) = std::env::var("GCLOUD_GUARD_LOG_LEVEL")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }
    }
}
