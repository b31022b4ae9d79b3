pub mod output;

use crate::adapters::http::JpHolidayApi;
use crate::config::Settings;
use crate::core::scanner::BusinessDayScanner;
use crate::domain::model::ScanOutcome;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Scans back from `base` against the configured holiday API.
pub async fn find_previous_business_day(
    settings: &Settings,
    base: NaiveDate,
) -> Result<ScanOutcome> {
    let api = JpHolidayApi::new(&settings.api_base, settings.timeout())?;
    let scanner = BusinessDayScanner::with_max_days(api, settings.max_days);

    tracing::info!(
        "Searching previous business day before {} (max {} days)",
        base,
        scanner.max_days()
    );
    scanner.scan(base).await
}

/// 検索して、出力用の文字列を返す
pub async fn run(settings: &Settings, base: NaiveDate, verbose: bool) -> Result<String> {
    let outcome = find_previous_business_day(settings, base).await?;
    Ok(if verbose {
        output::render_verbose(&outcome)
    } else {
        output::render_simple(&outcome)
    })
}
