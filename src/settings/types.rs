// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{
    DEFAULT_CALL_TIMEOUT_SECS, DEFAULT_LOG_LEVEL, DEFAULT_MAX_CONCURRENT_CALLS,
    DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Api {
    #[serde(default = "default_page_size")]
    pub page_size: i32,
    #[serde(default = "default_max_concurrent_calls")]
    pub max_concurrent_calls: usize,
    #[serde(default = "default_call_timeout_secs")]
    pub call_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub api: Api,
}

/// Settings that passed validation; the only form the rest of the program sees.
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);

/// Loads the application settings from file and environment.
pub struct ConfigManager {
    pub settings: ValidatedSettings,
    pub config_path: PathBuf,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_concurrent_calls() -> usize {
    DEFAULT_MAX_CONCURRENT_CALLS
}

fn default_call_timeout_secs() -> u64 {
    DEFAULT_CALL_TIMEOUT_SECS
}
