// Standard library
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use log::{error, info};

// Current module imports
use super::constants::{
    CONFIG_PATH_ENV, DEFAULT_CALL_TIMEOUT_SECS, DEFAULT_CONFIG, DEFAULT_LOG_LEVEL,
    DEFAULT_MAX_CONCURRENT_CALLS, DEFAULT_PAGE_SIZE, ENV_PREFIX, MAX_CONCURRENT_CALLS,
    MAX_PAGE_SIZE,
};
use super::errors::ValidationError;
use super::types::{Api, ConfigManager, Log, Settings, ValidatedSettings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for Api {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_concurrent_calls: DEFAULT_MAX_CONCURRENT_CALLS,
            call_timeout_secs: DEFAULT_CALL_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_page_size(&self) -> i32 {
        self.api.page_size
    }

    pub fn get_max_concurrent_calls(&self) -> usize {
        self.api.max_concurrent_calls
    }

    pub fn get_call_timeout(&self) -> Duration {
        Duration::from_secs(self.api.call_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.api.page_size) {
            return Err(ValidationError::InvalidPageSize {
                got: self.api.page_size,
                max: MAX_PAGE_SIZE,
            });
        }

        if !(1..=MAX_CONCURRENT_CALLS).contains(&self.api.max_concurrent_calls) {
            return Err(ValidationError::InvalidConcurrency {
                got: self.api.max_concurrent_calls,
                max: MAX_CONCURRENT_CALLS,
            });
        }

        if self.api.call_timeout_secs == 0 {
            return Err(ValidationError::InvalidCallTimeout);
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path: PathBuf = Self::get_config_path()?;
        Self::ensure_config_file_exists(&config_path)?;
        Self::from_path(config_path)
    }

    /// Loads and validates the configuration stored at `config_path`.
    pub fn from_path(config_path: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        Ok(ConfigManager {
            settings,
            config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("lobo").join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let settings: Config = Config::builder()
            .add_source(File::from(config_path))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_log_level(&self) -> String {
        self.settings.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
