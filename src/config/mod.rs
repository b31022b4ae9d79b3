#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::FileConfig;

use crate::adapters::http::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use crate::core::scanner::DEFAULT_MAX_DAYS;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::time::Duration;

/// Effective runtime settings after merging defaults, file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub timeout_seconds: u64,
    pub max_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

/// コマンドラインで明示的に指定された値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_days: Option<u32>,
}

impl Settings {
    /// defaults < file < overrides
    pub fn resolve(file: Option<&FileConfig>, overrides: &SettingsOverrides) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(file) = file {
            file.validate()?;
            if let Some(base_url) = &file.api.base_url {
                settings.api_base = base_url.clone();
            }
            if let Some(timeout) = file.api.timeout_seconds {
                settings.timeout_seconds = timeout;
            }
            if let Some(max_days) = file.scan.max_days {
                settings.max_days = max_days;
            }
        }

        if let Some(base_url) = &overrides.api_base {
            settings.api_base = base_url.clone();
        }
        if let Some(timeout) = overrides.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(max_days) = overrides.max_days {
            settings.max_days = max_days;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_positive_number("max_days", u64::from(self.max_days), 1)?;
        Ok(())
    }
}
