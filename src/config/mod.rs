// Required external crates for configuration management and serialization
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::rating::{RatingLimits, DEFAULT_RATING, DEFAULT_REVIEW_MAX_CHARS, MIN_RATING};

/// Where the model catalog comes from
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog file; the embedded catalog is used when unset
    pub path: Option<PathBuf>,
}

/// Configuration for the HTTP server
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

/// Configuration for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,
    /// Optional log directory
    pub file: Option<PathBuf>,
}

/// Bounds of the rating form
#[derive(Debug, Deserialize, Clone)]
pub struct RatingConfig {
    /// Maximum review length in characters
    pub review_max_chars: usize,
    /// Score every slider starts at
    pub default_score: u8,
}

/// Background music settings
#[derive(Debug, Deserialize, Clone)]
pub struct AudioConfig {
    /// Start music on the first command
    pub enabled: bool,
    /// Playback volume (0.0-1.0)
    pub volume: f32,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub rating: RatingConfig,
    pub audio: AudioConfig,
}

impl Settings {
    /// Creates a new Settings instance by loading config from multiple sources
    /// in the following order of precedence (highest to lowest):
    /// 1. Environment variables prefixed with ARENA_ (e.g. ARENA_SERVER__PORT)
    /// 2. Local config file (config/local.toml) if present
    /// 3. Default config file (config/default.toml) if present
    /// 4. Built-in defaults
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::current_dir()
            .map_err(|e| ConfigError::Message(format!("Failed to get current directory: {}", e)))?
            .join("config");
        Self::from_dir(&config_dir)
    }

    /// Loads settings with `config_dir` as the location of the TOML files.
    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = config_dir.join("default.toml");
        let local_config = config_dir.join("local.toml");

        let settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.file", "logs")?
            .set_default("rating.review_max_chars", DEFAULT_REVIEW_MAX_CHARS as i64)?
            .set_default("rating.default_score", i64::from(DEFAULT_RATING))?
            .set_default("audio.enabled", true)?
            .set_default("audio.volume", 0.5)?
            .add_source(File::from(default_config).required(false))
            .add_source(File::from(local_config).required(false))
            .add_source(Environment::with_prefix("ARENA").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize::<Settings>()?;

        // Validate settings after loading
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.catalog.path {
            if !path.is_file() {
                return Err(ConfigError::Message(format!(
                    "Catalog file not found at: {}",
                    path.display()
                )));
            }
        }

        // Validate server port range
        if self.server.port == 0 {
            return Err(ConfigError::Message(
                "Port must be between 1 and 65535, got: 0".to_string(),
            ));
        }

        if self.rating.review_max_chars == 0 {
            return Err(ConfigError::Message(
                "review_max_chars must be greater than 0".to_string(),
            ));
        }

        if !(MIN_RATING..=100).contains(&self.rating.default_score) {
            return Err(ConfigError::Message(format!(
                "default_score must be between {} and 100, got: {}",
                MIN_RATING, self.rating.default_score
            )));
        }

        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(ConfigError::Message(format!(
                "Volume must be between 0.0 and 1.0, got: {}",
                self.audio.volume
            )));
        }

        // Validate logging level
        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(format!(
                "Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                self.logging.level
            ))),
        }?;

        Ok(())
    }

    pub fn rating_limits(&self) -> RatingLimits {
        RatingLimits {
            review_max_chars: self.rating.review_max_chars,
            default_score: self.rating.default_score,
        }
    }

    /// Directory rolling log files are written to
    pub fn log_dir(&self) -> &Path {
        self.logging.file.as_deref().unwrap_or_else(|| Path::new("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_dir(dir.path()).unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.rating.review_max_chars, 5000);
        assert_eq!(settings.rating.default_score, 50);
        assert!(settings.catalog.path.is_none());
        assert_eq!(settings.log_dir(), Path::new("logs"));
    }

    #[test]
    fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 9000\nhost = \"0.0.0.0\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 9100\n").unwrap();

        let settings = Settings::from_dir(dir.path()).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn test_rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("local.toml"), "[rating]\ndefault_score = 0\n").unwrap();
        let err = Settings::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("default_score"));

        fs::write(dir.path().join("local.toml"), "[logging]\nlevel = \"loud\"\n").unwrap();
        let err = Settings::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid logging level"));
    }

    #[test]
    fn test_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("local.toml"),
            "[catalog]\npath = \"/nonexistent/catalog.json\"\n",
        )
        .unwrap();
        let err = Settings::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Catalog file not found"));
    }
}
