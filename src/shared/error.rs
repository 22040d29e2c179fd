use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to gate on assessment results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report produced (and no failures, when gating is enabled)
    Success = 0,
    /// At least one assessment failed and `--fail-on-failures` was given
    FailuresDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FailuresDetected => write!(f, "Failures Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised at the I/O edge of the assessment tool.
///
/// Malformed payload *content* never produces one of these: it degrades to an
/// empty summary. Only missing files, unreadable files, and bad configuration do.
#[derive(Debug, Error)]
pub enum AssessError {
    #[error("Assessment payload not found: {path}\n\n💡 Hint: {suggestion}")]
    PayloadNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read assessment payload: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    PayloadReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid payload path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a JSON file exported from the SBOM detail page")]
    InvalidPayloadPath { path: PathBuf, reason: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    ConfigError { message: String, hint: String },

    /// Validation error for user-supplied values (patterns, ids)
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
