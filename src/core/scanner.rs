use crate::domain::model::{ScanOutcome, SkipReason, SkippedDay};
use crate::domain::ports::HolidayOracle;
use crate::utils::date::is_weekend;
use crate::utils::error::{BizdayError, Result};
use chrono::NaiveDate;

/// 30日あれば年末年始やゴールデンウィークも十分に越えられる。
pub const DEFAULT_MAX_DAYS: u32 = 30;

/// Walks backward from a base date to the closest preceding business day.
///
/// Weekends are rejected locally; every other candidate is checked against the
/// oracle. Each examined day counts toward `max_days`, weekend or not.
pub struct BusinessDayScanner<O: HolidayOracle> {
    oracle: O,
    max_days: u32,
}

impl<O: HolidayOracle> BusinessDayScanner<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_max_days(oracle, DEFAULT_MAX_DAYS)
    }

    pub fn with_max_days(oracle: O, max_days: u32) -> Self {
        Self { oracle, max_days }
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub async fn previous_business_day(&self, from: NaiveDate) -> Result<NaiveDate> {
        Ok(self.scan(from).await?.business_day)
    }

    pub async fn scan(&self, from: NaiveDate) -> Result<ScanOutcome> {
        let mut skipped = Vec::new();
        let mut current = from;

        for attempt in 1..=self.max_days {
            current = current
                .pred_opt()
                .ok_or(BizdayError::DateOutOfRange { date: current })?;

            if is_weekend(current) {
                tracing::debug!("[{}/{}] {} is a weekend", attempt, self.max_days, current);
                skipped.push(SkippedDay {
                    date: current,
                    reason: SkipReason::Weekend,
                });
                continue;
            }

            tracing::debug!("[{}/{}] checking {}", attempt, self.max_days, current);
            let status = self
                .oracle
                .lookup(current)
                .await
                .map_err(|e| BizdayError::LookupFailed {
                    date: current,
                    source: Box::new(e),
                })?;

            if !status.holiday {
                tracing::debug!("{} is a business day", current);
                return Ok(ScanOutcome {
                    base: from,
                    business_day: current,
                    skipped,
                });
            }

            tracing::debug!("{} is a holiday: {}", current, status.name);
            skipped.push(SkippedDay {
                date: current,
                reason: SkipReason::Holiday(status.name),
            });
        }

        tracing::warn!(
            "No business day found within {} days before {}",
            self.max_days,
            from
        );
        Err(BizdayError::NotFound {
            from,
            max_days: self.max_days,
        })
    }
}
