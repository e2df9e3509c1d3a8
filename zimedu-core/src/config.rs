//! Configuration management

use crate::error::{ZimEduError, ZimEduResult};
use crate::types::{CatalogConfig, ServerConfig, SessionConfig, ZimEduConfig};

use std::path::Path;

/// Upper bound for any simulated session latency
pub const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: 1000,
            sign_up_delay_ms: 1000,
            sign_out_delay_ms: 500,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_mock_data: true,
        }
    }
}

impl Default for ZimEduConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            server: ServerConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ZimEduConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ZimEduResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ZimEduError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: ZimEduConfig = toml::from_str(&content).map_err(|e| ZimEduError::Config {
            message: format!("Failed to parse config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ZimEduResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ZimEduError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| ZimEduError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: crate::ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ZimEduResult<()> {
        let delays = [
            ("sign_in_delay_ms", self.session.sign_in_delay_ms),
            ("sign_up_delay_ms", self.session.sign_up_delay_ms),
            ("sign_out_delay_ms", self.session.sign_out_delay_ms),
        ];
        for (field, delay) in delays {
            if delay > MAX_SIMULATED_DELAY_MS {
                return Err(crate::config_error!(
                    format!(
                        "session.{} must be at most {} ms, got {}",
                        field, MAX_SIMULATED_DELAY_MS, delay
                    ),
                    "config"
                ));
            }
        }

        if self.server.host.trim().is_empty() {
            return Err(crate::config_error!(
                "server.host must not be empty",
                "config"
            ));
        }

        Ok(())
    }
}
