use contracts::system::onboarding::StageAnchors;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub anchors: StageAnchors,
    pub return_path: ReturnPathConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// localStorage key of the persisted onboarding record
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "onboarding_progress".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown names fall back to `Debug`.
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReturnPathConfig {
    /// Resume the originally requested page once onboarding completes
    pub enabled: bool,
}

impl Default for ReturnPathConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storage]
key = "onboarding_progress"

[logging]
level = "debug"

[anchors]
login = "/login"
select_sector = "/select-sector"
select_account_type = "/select-account"
dashboard = "/dashboard"

[return_path]
enabled = true
"#;

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<AppConfig> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.storage.key, "onboarding_progress");
        assert_eq!(config.logging.level(), log::Level::Debug);
        assert_eq!(config.anchors, StageAnchors::default());
        assert!(config.return_path.enabled);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
[anchors]
login = "/sign-in"

[logging]
level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(config.anchors.login, "/sign-in");
        assert_eq!(config.anchors.dashboard, "/dashboard");
        assert_eq!(config.logging.level(), log::Level::Warn);
        assert_eq!(config.storage.key, "onboarding_progress");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = parse_config("[logging]\nlevel = \"chatty\"").unwrap();
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(parse_config("[storage\nkey = 1").is_err());
    }
}
