use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BizdayError {
    #[error("Invalid date format: {input} (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    ApiStatusError { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Holiday lookup failed for {date}: {source}")]
    LookupFailed {
        date: NaiveDate,
        #[source]
        source: Box<BizdayError>,
    },

    #[error("No business day found within {max_days} days before {from}")]
    NotFound { from: NaiveDate, max_days: u32 },

    #[error("Date out of range: cannot step back from {date}")]
    DateOutOfRange { date: NaiveDate },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BizdayError {
    /// 利用者向けのメッセージ（stderr に出す文言）
    pub fn user_friendly_message(&self) -> String {
        match self {
            BizdayError::InvalidDate { input } => format!("無効な日付形式です: {}", input),
            BizdayError::ApiError(e) if e.is_timeout() => {
                "API呼び出しエラー: タイムアウトしました".to_string()
            }
            BizdayError::ApiError(e) => format!("API呼び出しエラー: {}", e),
            BizdayError::ApiStatusError { status, .. } => {
                format!("APIエラー: ステータスコード {}", status)
            }
            BizdayError::SerializationError(e) => format!("JSONパースエラー: {}", e),
            BizdayError::LookupFailed { source, .. } => {
                format!("営業日判定エラー: {}", source.user_friendly_message())
            }
            BizdayError::NotFound { .. } => "営業日が見つかりませんでした".to_string(),
            BizdayError::DateOutOfRange { date } => {
                format!("日付が範囲外です: {}", date)
            }
            BizdayError::IoError(e) => format!("ファイル読み込みエラー: {}", e),
            BizdayError::ConfigError { message } => format!("設定エラー: {}", message),
            BizdayError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("設定値が不正です ({} = {}): {}", field, value, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, BizdayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failed_wraps_inner_message() {
        let err = BizdayError::LookupFailed {
            date: NaiveDate::from_ymd_opt(2025, 7, 23).unwrap(),
            source: Box::new(BizdayError::ApiStatusError {
                status: 503,
                url: "http://localhost/2025/07/23".to_string(),
            }),
        };

        assert_eq!(
            err.user_friendly_message(),
            "営業日判定エラー: APIエラー: ステータスコード 503"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_not_found_message() {
        let err = BizdayError::NotFound {
            from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            max_days: 30,
        };
        assert_eq!(err.user_friendly_message(), "営業日が見つかりませんでした");
        assert!(err.to_string().contains("30 days before 2025-01-01"));
    }
}
