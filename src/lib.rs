pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::JpHolidayApi;
pub use config::{FileConfig, Settings, SettingsOverrides};
pub use crate::core::scanner::BusinessDayScanner;
pub use domain::model::{HolidayStatus, ScanOutcome, SkipReason, SkippedDay};
pub use domain::ports::HolidayOracle;
pub use utils::error::{BizdayError, Result};
