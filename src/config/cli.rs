use crate::config::{FileConfig, Settings, SettingsOverrides};
use crate::utils::date::{parse_date, today_jst};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use chrono::NaiveDate;
use clap::Parser;

const AFTER_HELP: &str = "\
例:
  jp-prev-bizday
  jp-prev-bizday --date 2025-07-24
  jp-prev-bizday --verbose";

#[derive(Debug, Clone, Parser)]
#[command(name = "jp-prev-bizday", version)]
#[command(about = "jp-prev-bizday - 日本の直前の営業日を取得するツール")]
#[command(long_about = "指定された日付（デフォルトは今日）から遡って、\n\
最初の営業日（土日祝日を除く平日）を返します。\n\
日本の祝日に対応しています。")]
#[command(after_help = AFTER_HELP)]
pub struct CliConfig {
    /// 基準日 (YYYY-MM-DD形式、デフォルト: 今日)
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// 詳細表示モード
    #[arg(short, long)]
    pub verbose: bool,

    /// 設定ファイル (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// 祝日APIのベースURL
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// API呼び出しのタイムアウト秒数
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// 遡る最大日数
    #[arg(long, value_name = "DAYS")]
    pub max_days: Option<u32>,

    /// デバッグログを stderr に出力
    #[arg(long)]
    pub debug: bool,

    /// ログを JSON 形式で出力
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    pub fn base_date(&self) -> Result<NaiveDate> {
        match &self.date {
            Some(input) => parse_date(input),
            None => Ok(today_jst()),
        }
    }

    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            api_base: self.api_base.clone(),
            timeout_seconds: self.timeout_secs,
            max_days: self.max_days,
        }
    }

    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path);
                Some(FileConfig::from_file(path)?)
            }
            None => None,
        };
        Settings::resolve(file.as_ref(), &self.overrides())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BizdayError;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "jp-prev-bizday",
            "--date",
            "2025-07-24",
            "-v",
            "--max-days",
            "10",
        ]);

        assert!(cli.verbose);
        assert_eq!(
            cli.base_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 24).unwrap()
        );
        assert_eq!(cli.settings().unwrap().max_days, 10);
    }

    #[test]
    fn test_invalid_date_flag() {
        let cli = CliConfig::parse_from(["jp-prev-bizday", "-d", "2025/07/24"]);
        assert!(matches!(
            cli.base_date(),
            Err(BizdayError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_base_date_defaults_to_today_in_jst() {
        let cli = CliConfig::parse_from(["jp-prev-bizday"]);
        let before = today_jst();
        let base = cli.base_date().unwrap();
        let after = today_jst();

        assert!(base == before || base == after);
    }

    #[test]
    fn test_help_flag_is_recognized() {
        let err = CliConfig::try_parse_from(["jp-prev-bizday", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from(["jp-prev-bizday", "--config", "/nonexistent/bizday.toml"]);
        assert!(matches!(cli.settings(), Err(BizdayError::IoError(_))));
    }
}
