use crate::error::CricketError;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_STORE_PATH: &str = ".crichit/store.json";
pub const DEFAULT_READY_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrichitConfig {
    pub store: Option<StoreConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub ready_timeout_ms: Option<u64>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<FormatSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Resolved store settings with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub path: String,
    pub ready_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
            ready_timeout: Duration::from_millis(DEFAULT_READY_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl CrichitConfig {
    pub fn store_settings(&self) -> StoreSettings {
        let defaults = StoreSettings::default();
        match &self.store {
            Some(store) => StoreSettings {
                path: store.path.clone().unwrap_or(defaults.path),
                ready_timeout: store
                    .ready_timeout_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.ready_timeout),
                poll_interval: store
                    .poll_interval_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.poll_interval),
            },
            None => defaults,
        }
    }

    pub fn output_format(&self) -> Option<FormatSetting> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), CricketError> {
        if let Some(store) = &self.store {
            if let Some(path) = &store.path {
                if path.trim().is_empty() {
                    return Err(CricketError::ConfigParse(
                        "store.path cannot be empty".to_string(),
                    ));
                }
            }
            if store.poll_interval_ms == Some(0) {
                return Err(CricketError::ConfigParse(
                    "store.poll_interval_ms must be greater than 0".to_string(),
                ));
            }
        }

        let settings = self.store_settings();
        if settings.ready_timeout < settings.poll_interval {
            return Err(CricketError::ConfigParse(format!(
                "store.ready_timeout_ms ({}) must not be shorter than store.poll_interval_ms ({})",
                settings.ready_timeout.as_millis(),
                settings.poll_interval.as_millis()
            )));
        }

        if let Some(level) = self.log_level() {
            if level.trim().is_empty() {
                return Err(CricketError::ConfigParse(
                    "logging.level cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
