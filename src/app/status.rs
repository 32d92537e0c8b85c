use gcloud_guard::config::Config;
use gcloud_guard::security::AccessPolicy;

/// Human-readable summary of the effective configuration.
pub fn render_status(config: &Config, policy: &AccessPolicy) -> String {
    let mut lines = vec![
        "◆ gcloud-guard".to_string(),
        String::new(),
        format!("Version     {}", env!("CARGO_PKG_VERSION")),
        format!("Config      {}", config.config_path.display()),
        format!("gcloud      {}", config.gcloud.resolved_binary()),
        format!("Timeout     {}s", config.gcloud.timeout_secs),
        format!("Output cap  {} bytes", config.gcloud.max_output_bytes),
        format!(
            "Debug cmd   {} debug config",
            config.gcloud.tool_name
        ),
        format!("Log level   {}", config.observability.log_level),
        String::new(),
    ];
    lines.push(policy.describe());
    lines.join("\n")
}
