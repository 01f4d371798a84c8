//! Configuration loading and environment variable handling

use crate::domains::DvdStoreConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use tracing::debug;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "DVDSTORE".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<DvdStoreConfig> {
        debug!("Loading configuration from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: DvdStoreConfig = serde_yaml::from_str(&content)?;

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<DvdStoreConfig> {
        let mut config = DvdStoreConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<DvdStoreConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut DvdStoreConfig) -> ConfigResult<()> {
        self.apply_database_overrides(&mut config.database)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    /// Apply database config overrides
    fn apply_database_overrides(
        &self,
        config: &mut crate::domains::database::DatabaseConfig,
    ) -> ConfigResult<()> {
        if let Ok(url) = self.get_env_var("DATABASE_URL") {
            config.url = Some(url);
        }

        if let Ok(host) = self.get_env_var("DATABASE_HOST") {
            config.host = host;
        }

        if let Ok(port) = self.get_env_var("DATABASE_PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid DATABASE_PORT: {}", e)))?;
        }

        if let Ok(database) = self.get_env_var("DATABASE_NAME") {
            config.database = database;
        }

        if let Ok(user) = self.get_env_var("DATABASE_USER") {
            config.user = user;
        }

        if let Ok(password) = self.get_env_var("DATABASE_PASSWORD") {
            config.password = password;
        }

        if let Ok(max) = self.get_env_var("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = max.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e))
            })?;
        }

        if let Ok(min) = self.get_env_var("DATABASE_MIN_CONNECTIONS") {
            config.min_connections = min.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid DATABASE_MIN_CONNECTIONS: {}", e))
            })?;
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        if let Ok(level) = self.get_env_var("LOG_LEVEL") {
            config.level = level
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", e)))?;
        }

        if let Ok(filter) = self.get_env_var("LOG_FILTER") {
            config.filter = Some(filter);
        }

        Ok(())
    }

    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_env_defaults() {
        let config = ConfigLoader::with_prefix("DVDSTORE_TEST_NONE").from_env().unwrap();
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            [
                ("DVDSTORE_TEST_A_DATABASE_URL", Some("sqlite::memory:")),
                ("DVDSTORE_TEST_A_DATABASE_MAX_CONNECTIONS", Some("3")),
                ("DVDSTORE_TEST_A_LOG_LEVEL", Some("debug")),
            ],
            || {
                let config = ConfigLoader::with_prefix("DVDSTORE_TEST_A").from_env().unwrap();
                assert_eq!(config.database.url.as_deref(), Some("sqlite::memory:"));
                assert_eq!(config.database.max_connections, 3);
                assert_eq!(
                    config.logging.level,
                    crate::domains::logging::LogLevel::Debug
                );
            },
        );
    }

    #[test]
    fn test_invalid_env_value_rejected() {
        temp_env::with_var("DVDSTORE_TEST_B_DATABASE_PORT", Some("not-a-port"), || {
            let result = ConfigLoader::with_prefix("DVDSTORE_TEST_B").from_env();
            assert!(matches!(result, Err(ConfigError::EnvError(_))));
        });
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database:\n  url: \"sqlite::memory:\"\n  max_connections: 2\nlogging:\n  level: warn"
        )
        .unwrap();

        let config = ConfigLoader::with_prefix("DVDSTORE_TEST_C")
            .from_file(file.path())
            .unwrap();
        assert_eq!(config.database.url.as_deref(), Some("sqlite::memory:"));
        assert_eq!(config.database.max_connections, 2);
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database: [not, a, mapping]").unwrap();

        let result = ConfigLoader::with_prefix("DVDSTORE_TEST_D").from_file(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
