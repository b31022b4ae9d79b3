use crate::utils::error::{BizdayError, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc, Weekday};
use regex::Regex;
use std::sync::OnceLock;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 日本標準時 (UTC+9)。日本には夏時間がないので固定オフセットで足りる。
const JST_OFFSET_SECS: i32 = 9 * 3600;

fn date_shape() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"))
}

/// `YYYY-MM-DD` のみ受け付ける。桁数違い・符号・前後の空白は不正とする。
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || BizdayError::InvalidDate {
        input: input.to_string(),
    };

    if !date_shape().is_match(input) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

pub fn jst_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&jst()).date_naive()
}

pub fn today_jst() -> NaiveDate {
    jst_date(Utc::now())
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn weekday_ja(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "日",
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
    }
}
