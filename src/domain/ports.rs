use crate::domain::model::HolidayStatus;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Answers "is this date a public holiday?".
#[async_trait]
pub trait HolidayOracle: Send + Sync {
    async fn lookup(&self, date: NaiveDate) -> Result<HolidayStatus>;

    /// The scanner calls `lookup` directly so it can report the holiday name.
    async fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.lookup(date).await?.holiday)
    }
}

#[async_trait]
impl<O: HolidayOracle + ?Sized> HolidayOracle for &O {
    async fn lookup(&self, date: NaiveDate) -> Result<HolidayStatus> {
        (**self).lookup(date).await
    }
}

#[async_trait]
impl<O: HolidayOracle + ?Sized> HolidayOracle for Box<O> {
    async fn lookup(&self, date: NaiveDate) -> Result<HolidayStatus> {
        (**self).lookup(date).await
    }
}
