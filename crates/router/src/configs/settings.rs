//! Runtime configuration, layered from defaults, an optional TOML file and
//! environment variables (`SWITCHER__CONNECTORS__RECEBEE__BASE_URL=...`).

use serde::Deserialize;
use switcher_interfaces::{configs::Connectors, types::Proxy};

use crate::consts;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub proxy: Proxy,
    pub connectors: Connectors,
    /// Timeout applied to each outgoing connector call, in seconds.
    pub request_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proxy: Proxy::default(),
            connectors: Connectors::default(),
            request_timeout: consts::REQUEST_TIME_OUT,
        }
    }
}

impl Settings {
    /// Load configuration from `config/development.toml` (when present) with
    /// environment overrides.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::with_config_path("config/development.toml")
    }

    pub fn with_config_path(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SWITCHER")
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_a_request_timeout() {
        let settings = Settings::default();
        assert_eq!(settings.request_timeout, consts::REQUEST_TIME_OUT);
        assert!(settings.connectors.recebee.base_url.is_empty());
    }
}
