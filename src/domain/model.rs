use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 祝日APIの応答 `{"holiday": bool, "name": string}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayStatus {
    #[serde(default)]
    pub holiday: bool,
    #[serde(default)]
    pub name: String,
}

impl HolidayStatus {
    pub fn business_day() -> Self {
        Self::default()
    }

    pub fn holiday(name: impl Into<String>) -> Self {
        Self {
            holiday: true,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Weekend,
    Holiday(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDay {
    pub date: NaiveDate,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub base: NaiveDate,
    pub business_day: NaiveDate,
    pub skipped: Vec<SkippedDay>,
}

impl ScanOutcome {
    /// 途中で飛ばした祝日（週末は含まない）
    pub fn skipped_holidays(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.skipped.iter().filter_map(|day| match &day.reason {
            SkipReason::Holiday(name) => Some((day.date, name.as_str())),
            SkipReason::Weekend => None,
        })
    }
}
