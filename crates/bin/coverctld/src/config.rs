//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `coverctl.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::BTreeSet;

use serde::Deserialize;

use coverctl_adapter_virtual::VirtualCoverConfig;
use coverctl_domain::cover::CoverConfig;
use coverctl_domain::device::{ActionMapping, DeviceModel};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Cover controllers, one per remote.
    pub controllers: Vec<ControllerConfig>,
    /// Simulated covers exposed by the virtual platform.
    pub virtual_covers: Vec<VirtualCoverConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One `[[controllers]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerConfig {
    /// Registry name, used in API paths.
    pub name: String,
    /// Remote model that emits the events.
    #[serde(default)]
    pub device: DeviceModel,
    #[serde(flatten)]
    pub cover: CoverConfig,
    /// Replaces the device's default bindings.
    #[serde(default)]
    pub mapping: Option<ActionMapping>,
    /// Laid over the device's default bindings.
    #[serde(default)]
    pub merge_mapping: Option<ActionMapping>,
}

impl Config {
    /// Load configuration from `coverctl.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("coverctl.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("COVERCTL_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("COVERCTL_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("COVERCTL_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("COVERCTL_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let entities: BTreeSet<&str> = self
            .virtual_covers
            .iter()
            .map(|cover| cover.entity_id.as_str())
            .collect();
        let mut names = BTreeSet::new();
        for controller in &self.controllers {
            if !names.insert(controller.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate controller name `{}`",
                    controller.name
                )));
            }
            controller.cover.validate().map_err(|err| {
                ConfigError::Validation(format!("controller `{}`: {err}", controller.name))
            })?;
            if controller.mapping.is_some() && controller.merge_mapping.is_some() {
                return Err(ConfigError::Validation(format!(
                    "controller `{}`: `mapping` and `merge_mapping` are mutually exclusive",
                    controller.name
                )));
            }
            if !entities.contains(controller.cover.cover.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "controller `{}`: cover `{}` is not a configured virtual cover",
                    controller.name, controller.cover.cover
                )));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "coverctl=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverctl_domain::cover::{CoverAction, CoverFeature};

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.controllers.is_empty());
        assert!(config.virtual_covers.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [[controllers]]
            name = 'living_room'
            device = 'MFKZQ01LM'
            cover = 'cover.living_room'
            open_position = 90
            close_position = 10
            cover_duration = 30
            update_timeout = 5
            tilt_delta = 15

            [controllers.merge_mapping]
            knock = 'stop'

            [[virtual_covers]]
            entity_id = 'cover.living_room'
            features = ['set_position', 'stop', 'set_tilt_position']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");

        let controller = &config.controllers[0];
        assert_eq!(controller.name, "living_room");
        assert_eq!(controller.device, DeviceModel::AqaraCube);
        assert_eq!(controller.cover.cover, "cover.living_room");
        assert_eq!(controller.cover.open_position, 90);
        assert_eq!(controller.cover.close_position, 10);
        assert_eq!(controller.cover.cover_duration, Some(30));
        assert_eq!(controller.cover.update_timeout, 5);
        assert_eq!(controller.cover.tilt_delta, 15);
        assert!(controller.mapping.is_none());
        assert_eq!(
            controller
                .merge_mapping
                .as_ref()
                .and_then(|m| m.get("knock")),
            Some(CoverAction::Stop)
        );

        assert!(
            config.virtual_covers[0]
                .features
                .contains(CoverFeature::SetTiltPosition)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_default_controller_fields() {
        let toml = "
            [[controllers]]
            name = 'office'
            cover = 'cover.office'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let controller = &config.controllers[0];
        assert_eq!(controller.device, DeviceModel::Generic);
        assert_eq!(controller.cover, CoverConfig::for_cover("cover.office"));
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_duplicate_controller_names() {
        let toml = "
            [[controllers]]
            name = 'office'
            cover = 'cover.office'

            [[controllers]]
            name = 'office'
            cover = 'cover.office_blinds'

            [[virtual_covers]]
            entity_id = 'cover.office'

            [[virtual_covers]]
            entity_id = 'cover.office_blinds'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn should_reject_inverted_positions() {
        let toml = "
            [[controllers]]
            name = 'office'
            cover = 'cover.office'
            open_position = 10
            close_position = 20

            [[virtual_covers]]
            entity_id = 'cover.office'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_controller_without_cover() {
        let toml = "
            [[controllers]]
            name = 'office'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_controller_for_unknown_cover() {
        let toml = "
            [[controllers]]
            name = 'office'
            cover = 'cover.ofice'

            [[virtual_covers]]
            entity_id = 'cover.office'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("cover.ofice")
        ));
    }

    #[test]
    fn should_accept_controller_for_configured_cover() {
        let toml = "
            [[controllers]]
            name = 'office'
            cover = 'cover.office'

            [[virtual_covers]]
            entity_id = 'cover.office'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_both_mappings() {
        let toml = "
            [[controllers]]
            name = 'office'
            cover = 'cover.office'
            mapping = { single = 'toggle_open' }
            merge_mapping = { double = 'stop' }
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("mutually exclusive")
        ));
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
