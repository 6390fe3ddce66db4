use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated (including reports with no matching CVEs)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed feed, download failure, file I/O error, etc.)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Placeholder used in error messages when an advisory has no identifier.
pub const UNKNOWN_IDENTIFIER: &str = "<unknown>";

/// Application-specific errors for CVE report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required advisory field is missing or holds an unusable value.
    /// Fatal for the whole extraction pass.
    #[error("Malformed advisory CVE_Items[{index}] ({identifier}): field '{field}' {reason}\n\n💡 Hint: The NVD feed seems to be damaged or in an unexpected format. Delete it from the input directory to download a fresh copy")]
    MalformedRecord {
        index: usize,
        identifier: String,
        field: &'static str,
        reason: String,
    },

    /// The publish timestamp does not follow `YYYY-MM-DDTHH:MMZ`.
    #[error("Invalid publish date for {identifier}: '{value}'\nDetails: {details}\n\n💡 Hint: Expected the NVD 1.1 format YYYY-MM-DDTHH:MMZ")]
    DateParse {
        identifier: String,
        value: String,
        details: String,
    },

    #[error("NVD feed not found: {path}\n\n💡 Hint: {suggestion}")]
    FeedNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse NVD feed: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is an NVD JSON 1.1 feed")]
    FeedParseError { path: PathBuf, details: String },

    #[error("Failed to download NVD feed from {url}\nDetails: {details}\n\n💡 Hint: Please check your internet connection, or place the feed in the input directory and use --offline")]
    FeedDownloadError { url: String, details: String },

    #[error("Failed to extract feed archive: {path}\nDetails: {details}\n\n💡 Hint: Delete the archive to download it again")]
    ArchiveError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// A CPE component cannot be used as part of the report file name.
    #[error("Invalid report file name component '{component}'\nReason: {reason}\n\n💡 Hint: Use --output to choose the report path explicitly, or --stdout")]
    InvalidOutputName { component: String, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for settings and value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}
