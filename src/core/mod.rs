pub mod scanner;

pub use crate::domain::model::{HolidayStatus, ScanOutcome, SkipReason, SkippedDay};
pub use crate::domain::ports::HolidayOracle;
pub use crate::utils::error::Result;
