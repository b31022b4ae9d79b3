use crate::utils::error::{BizdayError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// 設定ファイル。すべてのキーは省略可能。
///
/// ```toml
/// [api]
/// base_url = "https://jp-holiday.net/api/v1/holiday"
/// timeout_seconds = 5
///
/// [scan]
/// max_days = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub scan: ScanSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSection {
    pub max_days: Option<u32>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BizdayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

/// `${VAR}` を環境変数で置換する。未定義の変数はそのまま残す。
fn substitute_env_vars(content: &str) -> String {
    env_var_pattern()
        .replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.api.base_url {
            validate_url("api.base_url", base_url)?;
        }
        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }
        if let Some(max_days) = self.scan.max_days {
            validate_positive_number("scan.max_days", u64::from(max_days), 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "http://localhost:9000/holiday"
timeout_seconds = 2

[scan]
max_days = 14
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://localhost:9000/holiday")
        );
        assert_eq!(config.api.timeout_seconds, Some(2));
        assert_eq!(config.scan.max_days, Some(14));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JP_BIZDAY_TEST_API_BASE", "https://holiday.example.com/v1");

        let toml_content = r#"
[api]
base_url = "${JP_BIZDAY_TEST_API_BASE}"
"#;
        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://holiday.example.com/v1")
        );
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let toml_content = r#"
[api]
base_url = "${JP_BIZDAY_TEST_SURELY_UNSET}"
"#;
        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.api.base_url.as_deref(),
            Some("${JP_BIZDAY_TEST_SURELY_UNSET}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let toml_content = r#"
[scan]
max_dayz = 10
"#;
        assert!(matches!(
            FileConfig::from_toml_str(toml_content),
            Err(BizdayError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_zero_values() {
        let config = FileConfig::from_toml_str("[scan]\nmax_days = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = FileConfig::from_toml_str("[api]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\nmax_days = 7").unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scan.max_days, Some(7));
    }

    #[test]
    fn test_from_missing_file() {
        let result = FileConfig::from_file("/nonexistent/jp-prev-bizday.toml");
        assert!(matches!(result, Err(BizdayError::IoError(_))));
    }
}
