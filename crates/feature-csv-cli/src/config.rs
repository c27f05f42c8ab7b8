//! Converter configuration parsed from environment variables.
//!
//! Settings can be provided via environment variables prefixed with
//! `FEATURE_CSV_` and overridden by command line flags.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "FEATURE_CSV_LOG_LEVEL";
/// Environment variable holding the default output format.
pub const FORMAT_VAR: &str = "FEATURE_CSV_FORMAT";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so routine runs only show the progress summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging.
    Trace,
    /// Per-scenario conversion details.
    Debug,
    /// Conversion summaries.
    Info,
    /// Skipped or malformed input.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Output format for converted test cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fully quoted, comma-delimited CSV.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    /// File extension used when no output path is given.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown output format '{s}', expected one of: csv, json"
            ))),
        }
    }
}

/// Configuration for a converter run.
///
/// # Environment Variables
///
/// - `FEATURE_CSV_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `FEATURE_CSV_FORMAT`: output format (csv, json)
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level.
    pub log_level: LogLevel,
    /// Output format.
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        let format = match lookup(FORMAT_VAR) {
            Some(val) => val.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self { log_level, format })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// Command line flags take precedence over environment-based values.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] raw: &str, #[case] expected: LogLevel) {
        assert_eq!(raw.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(matches!(
            result,
            Err(CliError::InvalidConfig(message)) if message.contains("unknown log level")
        ));
    }

    #[rstest]
    #[case("csv", OutputFormat::Csv)]
    #[case("JSON", OutputFormat::Json)]
    fn output_format_parses_valid_values(#[case] raw: &str, #[case] expected: OutputFormat) {
        assert_eq!(raw.parse::<OutputFormat>().ok(), Some(expected));
    }

    #[test]
    fn output_format_rejects_invalid_values() {
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn lookup_reads_prefixed_variables() {
        let config = CliConfig::from_lookup(|key| match key {
            LOG_LEVEL_VAR => Some("debug".into()),
            FORMAT_VAR => Some("json".into()),
            _ => None,
        })
        .unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn lookup_defaults_missing_variables() {
        let config = CliConfig::from_lookup(|_| None).unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn lookup_rejects_invalid_values() {
        let result = CliConfig::from_lookup(|key| (key == FORMAT_VAR).then(|| "xml".into()));
        assert!(result.is_err());
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Error), None);
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.format, OutputFormat::Csv);

        let config = CliConfig::default().apply_overrides(None, Some(OutputFormat::Json));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Json);
    }
}
