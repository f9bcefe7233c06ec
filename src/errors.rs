//! Error types for the OSF fetcher
//!
//! Each pipeline stage has its own error enum; the top-level [`AppError`]
//! wraps them transparently. Errors are never caught or translated once
//! raised past their originating component - they propagate to `main`,
//! which prints them and exits non-zero.

use thiserror::Error;

/// Download errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// I/O error while writing the downloaded file
    #[error("File I/O error")]
    Io(#[from] std::io::Error),

    /// Server returned a non-success status
    #[error("Failed to download {name} from '{location}' (HTTP {status})")]
    Failed {
        name: String,
        location: String,
        status: u16,
    },

    /// Invalid download URL
    #[error("Invalid URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },
}

/// Archive extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Malformed or unreadable zip archive
    #[error("Unreadable zip archive")]
    Archive(#[from] zip::result::ZipError),

    /// I/O error while writing extracted files
    #[error("File I/O error")]
    Io(#[from] std::io::Error),

    /// Archive contains an entry whose extension has no registered handler
    #[error("No handler registered for extension '{extension}' (entry '{entry}')")]
    UnhandledExtension { entry: String, extension: String },
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Download error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Extraction error
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A spawned dataset task panicked or was cancelled
    #[error("Dataset task failed to complete")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Fetch result type alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Extraction result type alias
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Fetch(_) => "fetch",
            AppError::Extract(_) => "extract",
            AppError::Io(_) => "io",
            AppError::Join(_) => "task",
        }
    }
}
