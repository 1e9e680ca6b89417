//! Error and counter type definitions.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for report output.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to write a generated report file.
    #[error("Failed to write report {}: {source}", .path.display())]
    Write {
        /// Path of the report that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Per-item anomalies encountered during a run.
///
/// Warnings never abort processing; they are counted and logged at the end
/// so reviewers know what the reports do not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// A URL-shaped token with no parseable host.
    MalformedUrl,
    /// A script src value with no scheme and no host.
    RelativeUrlSkipped,
}

impl WarningType {
    /// Human-readable label for statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MalformedUrl => "Malformed URL token",
            WarningType::RelativeUrlSkipped => "Relative src skipped",
        }
    }
}

/// Notable events that are neither errors nor warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A reference dropped because its normalized URL was already seen.
    DuplicateSuppressed,
    /// A category assigned by the keyword tier rather than a host rule.
    KeywordMatch,
}

impl InfoType {
    /// Human-readable label for statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DuplicateSuppressed => "Duplicate reference suppressed",
            InfoType::KeywordMatch => "Keyword-based category match",
        }
    }
}
