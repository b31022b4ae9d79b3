use crate::domain::model::HolidayStatus;
use crate::domain::ports::HolidayOracle;
use crate::utils::error::{BizdayError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://jp-holiday.net/api/v1/holiday";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// jp-holiday.net 形式の祝日API (`{base}/{yyyy}/{mm}/{dd}`) クライアント
#[derive(Debug, Clone)]
pub struct JpHolidayApi {
    client: Client,
    base_url: String,
}

impl JpHolidayApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_url("api.base_url", base_url)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_for(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}/{:02}/{:02}",
            self.base_url,
            date.year(),
            date.month(),
            date.day()
        )
    }
}

#[async_trait]
impl HolidayOracle for JpHolidayApi {
    async fn lookup(&self, date: NaiveDate) -> Result<HolidayStatus> {
        let url = self.endpoint_for(date);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("API response status: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(BizdayError::ApiStatusError {
                status: response.status().as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let status: HolidayStatus = serde_json::from_str(&body)?;

        Ok(status)
    }
}
