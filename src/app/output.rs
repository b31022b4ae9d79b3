use crate::domain::model::ScanOutcome;
use crate::utils::date::{weekday_ja, DATE_FORMAT};
use chrono::{Datelike, NaiveDate};

fn labeled(date: NaiveDate) -> String {
    format!(
        "{} ({})",
        date.format(DATE_FORMAT),
        weekday_ja(date.weekday())
    )
}

pub fn render_simple(outcome: &ScanOutcome) -> String {
    format!("{}\n", outcome.business_day.format(DATE_FORMAT))
}

pub fn render_verbose(outcome: &ScanOutcome) -> String {
    let mut out = format!(
        "基準日: {}\n直前の営業日: {}\n",
        labeled(outcome.base),
        labeled(outcome.business_day)
    );
    for (date, name) in outcome.skipped_holidays() {
        out.push_str(&format!("  スキップした祝日: {} {}\n", labeled(date), name));
    }
    out
}
