use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// Backend origin; empty means same-origin relative URLs
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "debug".to_string()
}

impl LoggingConfig {
    /// Parsed log level, `Debug` when the configured value is unknown
    pub fn level(&self) -> log::Level {
        self.level.trim().parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[logging]
level = "debug"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration
///
/// Starts from the embedded defaults, then applies build-time overrides:
/// 1. `PRODUCT_API_BASE` for `[api] base_url`
/// 2. `PRODUCT_LOG_LEVEL` for `[logging] level`
pub fn load_config() -> anyhow::Result<Config> {
    let config = parse_config(DEFAULT_CONFIG)?;
    Ok(apply_overrides(
        config,
        option_env!("PRODUCT_API_BASE"),
        option_env!("PRODUCT_LOG_LEVEL"),
    ))
}

/// Cache a loaded configuration, falling back to defaults on failure.
///
/// The first installed value wins. Call after the logger is up so the
/// fallback warning is not lost.
pub fn install(loaded: anyhow::Result<Config>) -> &'static Config {
    CONFIG.get_or_init(|| {
        loaded.unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        })
    })
}

/// Cached configuration, loading it on first use
pub fn config() -> &'static Config {
    match CONFIG.get() {
        Some(config) => config,
        None => install(load_config()),
    }
}

/// Log level to start the logger with, before the config is cached
pub fn startup_level(loaded: &anyhow::Result<Config>) -> log::Level {
    loaded
        .as_ref()
        .map(|config| config.logging.level())
        .unwrap_or(log::Level::Debug)
}

fn parse_config(text: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(text)?)
}

fn apply_overrides(mut config: Config, api_base: Option<&str>, log_level: Option<&str>) -> Config {
    if let Some(base) = api_base {
        config.api.base_url = base.to_string();
    }
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config("[api]\nbase_url = \"http://localhost:5000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config("[api\nbase_url = ").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = apply_overrides(
            parse_config(DEFAULT_CONFIG).unwrap(),
            Some("https://shop.example.com"),
            Some("WARN"),
        );
        assert_eq!(config.api.base_url, "https://shop.example.com");
        assert_eq!(config.logging.level(), log::Level::Warn);
    }

    #[test]
    fn test_startup_level() {
        let loaded = Ok(apply_overrides(
            parse_config(DEFAULT_CONFIG).unwrap(),
            None,
            Some("error"),
        ));
        assert_eq!(startup_level(&loaded), log::Level::Error);

        let failed = parse_config("[logging\nlevel = ");
        assert!(failed.is_err());
        assert_eq!(startup_level(&failed), log::Level::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
        };
        assert_eq!(logging.level(), log::Level::Debug);
    }
}
