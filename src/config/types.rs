//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line argument parsing and programmatic configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_OUTPUT_PREFIX;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Doubles as the CLI definition (via clap derive) and the library entry
/// configuration. Library users can construct it programmatically:
///
/// ```no_run
/// use scriptmap::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("scripts.txt"),
///     primary_domain: "example.com".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scriptmap",
    version,
    about = "Classify and map JavaScript dependencies as first- or third-party for security review"
)]
pub struct Config {
    /// Input file containing one script URL or <script> tag per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Primary application domain (e.g. example.com) used to distinguish
    /// first- from third-party scripts
    #[arg(long)]
    pub primary_domain: String,

    /// Prefix for the generated report files
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_PREFIX)]
    pub output_prefix: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("scripts.txt"),
            primary_domain: String::new(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        // Error < Warn < Info < Debug < Trace
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("scripts.txt"));
        assert!(config.primary_domain.is_empty());
        assert_eq!(config.output_prefix, DEFAULT_OUTPUT_PREFIX);
    }

    #[test]
    fn test_cli_parsing_minimal() {
        let config =
            Config::try_parse_from(["scriptmap", "scripts.txt", "--primary-domain", "example.com"])
                .expect("minimal invocation should parse");
        assert_eq!(config.input, PathBuf::from("scripts.txt"));
        assert_eq!(config.primary_domain, "example.com");
        assert_eq!(config.output_prefix, DEFAULT_OUTPUT_PREFIX);
    }

    #[test]
    fn test_cli_parsing_requires_primary_domain() {
        let result = Config::try_parse_from(["scriptmap", "scripts.txt"]);
        assert!(result.is_err(), "--primary-domain should be required");
    }

    #[test]
    fn test_cli_parsing_output_prefix() {
        let config = Config::try_parse_from([
            "scriptmap",
            "scripts.txt",
            "--primary-domain",
            "example.com",
            "-o",
            "audit/acme",
        ])
        .expect("invocation with -o should parse");
        assert_eq!(config.output_prefix, "audit/acme");
    }
}
