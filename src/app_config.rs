use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_HOST: &str = "192.168.0.1";
const DEFAULT_USERNAME: &str = "cusadmin";
const DEFAULT_TIMEOUT: &str = "10s";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    host: String,
    username: String,
    password: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

/// Values given on the command line, they take precedence over every other source.
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AppConfig {
    pub fn load(overrides: Overrides) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("username", DEFAULT_USERNAME)?
            .set_default("password", "")?
            .set_default("timeout", DEFAULT_TIMEOUT)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("HITRON"))
            .set_override_option("host", overrides.host)?
            .set_override_option("username", overrides.username)?
            .set_override_option("password", overrides.password)?
            .build()?
            .try_deserialize()
    }

    /// Host name or address of the modem, optionally with a port.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Applies to each request on its own.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                host: DEFAULT_HOST.to_string(),
                username: DEFAULT_USERNAME.to_string(),
                password: "password".to_string(),
                timeout: Duration::from_secs(1),
            },
        }
    }

    /// Points the config at a mock server, `url` is what `mockito::Server::url` returns.
    pub fn server_url(mut self, url: String) -> Self {
        self.config.host = url.trim_start_matches("http://").to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_applies_defaults_and_overrides() {
        let config = AppConfig::load(Overrides {
            host: Some("10.0.0.1".to_string()),
            username: None,
            password: Some("hunter2".to_string()),
        })
        .unwrap();

        assert_eq!(config.host(), "10.0.0.1");
        assert_eq!(config.username(), DEFAULT_USERNAME);
        assert_eq!(config.password(), "hunter2");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn builder_points_at_the_mock_server() {
        let config = AppConfigBuilder::new().server_url("http://127.0.0.1:1234".to_string()).build();
        assert_eq!(config.host(), "127.0.0.1:1234");
    }
}
