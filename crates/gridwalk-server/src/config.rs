//! Layered service configuration
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `config/default.yaml`
//! 3. `config/{GRIDWALK_ENV}.yaml` (`GRIDWALK_ENV` defaults to `dev`)
//! 4. `GRIDWALK__SECTION__KEY` environment variables
//!
//! A `.env` file in the working directory is loaded first, if present.

#![allow(clippy::result_large_err)]

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use gridwalk_core::errors::{ExError, ExErrorKind};
use gridwalk_core::logging_facility::Profile;
use gridwalk_core::Strategy;
use serde::Deserialize;

pub const ENV_VAR: &str = "GRIDWALK_ENV";
pub const DEFAULT_ENV: &str = "dev";
pub const DEFAULT_CONFIG_DIR: &str = "config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Route of the path submission endpoint
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseConfig {
    /// File path, or `:memory:`
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    pub strategy: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    pub profile: String,
}

impl AppConfig {
    /// Load from `.env`, `./config` and the process environment
    pub fn load() -> Result<Self, ExError> {
        dotenvy::dotenv().ok();
        let env = std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        Self::load_from(Path::new(DEFAULT_CONFIG_DIR), &env)
    }

    /// Load with an explicit config directory and environment name
    pub fn load_from(config_dir: &Path, env: &str) -> Result<Self, ExError> {
        let config = Self::builder(config_dir, env)
            .and_then(|builder| builder.build())
            .map_err(config_error)?;
        let loaded: AppConfig = config.try_deserialize().map_err(config_error)?;
        loaded.validate()?;
        Ok(loaded)
    }

    fn builder(
        config_dir: &Path,
        env: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.path", "/enter-path")?
            .set_default("database.path", "gridwalk.db")?
            .set_default("engine.strategy", Strategy::default().as_str())?
            .set_default("logging.profile", "development")?
            .add_source(File::from(config_dir.join("default.yaml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.yaml", env))).required(false))
            .add_source(
                Environment::with_prefix("GRIDWALK")
                    .separator("__")
                    .try_parsing(true),
            ))
    }

    fn validate(&self) -> Result<(), ExError> {
        self.strategy()?;
        self.logging_profile()?;
        if !self.server.path.starts_with('/') {
            return Err(ExError::new(ExErrorKind::Configuration)
                .with_op("load_config")
                .with_message(format!(
                    "server.path must start with '/', got '{}'",
                    self.server.path
                )));
        }
        Ok(())
    }

    pub fn strategy(&self) -> Result<Strategy, ExError> {
        self.engine.strategy.parse().map_err(|msg: String| {
            ExError::new(ExErrorKind::Configuration)
                .with_op("load_config")
                .with_message(msg)
        })
    }

    pub fn logging_profile(&self) -> Result<Profile, ExError> {
        self.logging.profile.parse().map_err(|msg: String| {
            ExError::new(ExErrorKind::Configuration)
                .with_op("load_config")
                .with_message(msg)
        })
    }
}

fn config_error(err: ConfigError) -> ExError {
    ExError::new(ExErrorKind::Configuration)
        .with_op("load_config")
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path(), "dev").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.path, "/enter-path");
        assert_eq!(config.strategy().unwrap(), Strategy::BinarySearch);
    }

    #[test]
    fn test_env_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.yaml",
            "server:\n  port: 6000\nengine:\n  strategy: naive-scan\n",
        );
        write(dir.path(), "staging.yaml", "server:\n  port: 7000\n");

        let config = AppConfig::load_from(dir.path(), "staging").unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.strategy().unwrap(), Strategy::NaiveScan);

        let config = AppConfig::load_from(dir.path(), "other").unwrap();
        assert_eq!(config.server.port, 6000);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "dev.yaml", "engine:\n  strategy: quadtree\n");
        let err = AppConfig::load_from(dir.path(), "dev").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Configuration);
        assert!(err.message().contains("quadtree"));
    }

    #[test]
    fn test_relative_route_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "dev.yaml", "server:\n  path: enter-path\n");
        assert!(AppConfig::load_from(dir.path(), "dev").is_err());
    }
}
