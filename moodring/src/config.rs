use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;

fn parse_env_or<T: FromStr>(var: &str, default: T) -> T
where
    T::Err: fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: FromStr>(var: &str) -> Option<T>
where
    T::Err: fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the Messages database. Accepts a bare path, a `file:` url or `:memory:`.
    pub url: String,
    pub busy_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Cap on the number of messages loaded, in `ROWID` order.
    pub message_limit: Option<u64>,
    /// Replace the built-in lexicon with a `word<TAB>valence` file.
    pub lexicon_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub report_format: ReportFormat,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: env::var("CHAT_DB_PATH").unwrap_or_else(|_| "chat.db".to_string()),
                busy_timeout_ms: parse_env_or("DATABASE_BUSY_TIMEOUT_MS", 5000),
            },
            analysis: AnalysisConfig {
                message_limit: parse_env_opt("MESSAGE_LIMIT"),
                lexicon_path: env::var("LEXICON_PATH").ok().filter(|p| !p.is_empty()),
            },
            output: OutputConfig {
                report_format: parse_env_or("REPORT_FORMAT", ReportFormat::Text),
                log_format: parse_env_or("LOG_FORMAT", LogFormat::Pretty),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "CHAT_DB_PATH",
        "DATABASE_BUSY_TIMEOUT_MS",
        "MESSAGE_LIMIT",
        "LEXICON_PATH",
        "REPORT_FORMAT",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();

        let config = Config::default();
        assert_eq!(config.database.url, "chat.db");
        assert_eq!(config.database.busy_timeout_ms, 5000);
        assert!(config.analysis.message_limit.is_none());
        assert!(config.analysis.lexicon_path.is_none());
        assert_eq!(config.output.report_format, ReportFormat::Text);
        assert_eq!(config.output.log_format, LogFormat::Pretty);
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        clear_env();
        std::env::set_var("CHAT_DB_PATH", "/tmp/archive/chat.db");
        std::env::set_var("MESSAGE_LIMIT", "250");
        std::env::set_var("LEXICON_PATH", "/tmp/lexicon.txt");
        std::env::set_var("REPORT_FORMAT", "JSON");

        let config = Config::from_env();
        assert_eq!(config.database.url, "/tmp/archive/chat.db");
        assert_eq!(config.analysis.message_limit, Some(250));
        assert_eq!(
            config.analysis.lexicon_path.as_deref(),
            Some("/tmp/lexicon.txt")
        );
        assert_eq!(config.output.report_format, ReportFormat::Json);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_env();
        std::env::set_var("DATABASE_BUSY_TIMEOUT_MS", "soon");
        std::env::set_var("MESSAGE_LIMIT", "-3");
        std::env::set_var("LOG_FORMAT", "xml");

        let config = Config::default();
        assert_eq!(config.database.busy_timeout_ms, 5000);
        assert!(config.analysis.message_limit.is_none());
        assert_eq!(config.output.log_format, LogFormat::Pretty);

        clear_env();
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("table".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!(" json ".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("csv".parse::<ReportFormat>().is_err());
    }
}
