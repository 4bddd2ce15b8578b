use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::Deserialize;

use crate::client::fetch::parse_endpoint;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub poll_interval_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: "http://127.0.0.1:3000/api/system".to_string(),
            poll_interval_ms: 5000,
            request_timeout_ms: 10_000,
        }
    }
}

impl ClientConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "0.0.0.0:3000".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .wrap_err_with(|| format!("invalid bind address `{}`", self.bind))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            theme: "dark".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Rejects values that would make the client or agent unusable.
    pub fn validate(&self) -> Result<()> {
        if self.client.poll_interval_ms == 0 {
            return Err(eyre!("client.poll_interval_ms must be greater than 0"));
        }
        if self.client.request_timeout_ms == 0 {
            return Err(eyre!("client.request_timeout_ms must be greater than 0"));
        }
        parse_endpoint(&self.client.endpoint)?;
        self.server.bind_addr()?;
        Ok(())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sysmonitor").join("config.toml"))
}

/// Loads the config from the default location.
///
/// A missing file is not an error. The second value says why defaults were
/// used instead of the file; callers log it once logging is up.
pub fn load_config() -> (Config, Option<String>) {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => (Config::default(), None),
    }
}

/// Loads the config from an explicit path, reporting unreadable or invalid
/// files alongside the defaults used in their place.
pub fn load_config_from_path(path: &Path) -> (Config, Option<String>) {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            let reason = format!(
                "cannot read config {}: {err}; using defaults",
                path.display()
            );
            return (Config::default(), Some(reason));
        }
    };
    match toml::from_str(&contents) {
        Ok(config) => (config, None),
        Err(err) => {
            let reason = format!("ignoring invalid config {}: {err}", path.display());
            (Config::default(), Some(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.client.endpoint, "http://127.0.0.1:3000/api/system");
        assert_eq!(config.client.poll_interval_ms, 5000);
        assert_eq!(config.client.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[client]
poll_interval_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.client.poll_interval_ms, 500);
        // Other fields should be defaults
        assert_eq!(config.client.request_timeout_ms, 10_000);
        assert_eq!(config.server.bind, "0.0.0.0:3000");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[client]
endpoint = "https://metrics.internal:8443/system"
poll_interval_ms = 1000
request_timeout_ms = 750

[server]
bind = "127.0.0.1:9100"

[ui]
theme = "light"

[logging]
level = "debug"
format = "json"
file = "/tmp/sysmonitor.log"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.client.endpoint, "https://metrics.internal:8443/system");
        assert_eq!(config.client.request_timeout(), Duration::from_millis(750));
        assert_eq!(
            config.server.bind_addr().unwrap(),
            "127.0.0.1:9100".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.logging.format, "json");
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("/tmp/sysmonitor.log"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = Config::default();
        config.client.poll_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.client.endpoint = "localhost:3000".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.bind = "everywhere".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_returns_default_with_reason() {
        let path = Path::new("/nonexistent/path/config.toml");
        let (config, reason) = load_config_from_path(path);
        assert_eq!(config.client.poll_interval_ms, 5000);
        let reason = reason.expect("missing explicit path is reported");
        assert!(reason.contains("cannot read config"), "{reason}");
        assert!(reason.contains("/nonexistent/path/config.toml"), "{reason}");
    }

    #[test]
    fn invalid_toml_returns_default_with_reason() {
        let temp = std::env::temp_dir().join("sysmonitor_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let (config, reason) = load_config_from_path(&temp);
        let _ = std::fs::remove_file(&temp);

        assert_eq!(config.client.poll_interval_ms, 5000);
        let reason = reason.expect("invalid toml is reported");
        assert!(reason.contains("ignoring invalid config"), "{reason}");
    }

    #[test]
    fn valid_file_loads_without_reason() {
        let temp = std::env::temp_dir().join("sysmonitor_test_valid.toml");
        std::fs::write(&temp, "[client]\npoll_interval_ms = 750\n").unwrap();
        let (config, reason) = load_config_from_path(&temp);
        let _ = std::fs::remove_file(&temp);

        assert_eq!(config.client.poll_interval_ms, 750);
        assert!(reason.is_none());
    }
}
