//! Error taxonomy for the screenshot pipeline.
//!
//! Validation, fetch, extraction and download errors are per-URL: the pipeline
//! logs them and moves on. Only [`ConfigurationError`] aborts a run.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed transport cause (curl error in production, anything in tests).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Input URL rejected before any network traffic.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Missing scheme or host, or not parseable at all.
    #[error("not a valid URL: {0}")]
    Malformed(String),

    /// Host does not contain the allowed domain.
    #[error("domain not allowed (expected {allowed}): {url}")]
    DomainNotAllowed { url: String, allowed: String },
}

/// Source page could not be fetched.
///
/// Per-URL errors end up as single log lines, so causes are folded into the
/// message rather than chained through `source()`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout.
    #[error("request failed: {0}")]
    Transport(BoxError),

    #[error("no connection to website (HTTP {0})")]
    Status(u32),
}

/// Page markup did not contain a usable screenshot element.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("screenshot element #{0} not found")]
    MissingElement(&'static str),

    #[error("image source doesn't exist")]
    MissingSource,
}

/// Image could not be downloaded or written.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Transport(BoxError),

    #[error("image request returned HTTP {0}")]
    Status(u32),

    #[error("error while saving to {}: {cause}", .path.display())]
    Write { path: PathBuf, cause: std::io::Error },
}

/// Fatal: output directory could not be chosen or created.
///
/// Reported through `anyhow` chains, so the io cause stays in `source()` only.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("not a valid directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot list {}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an input URL produced no source record.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractionError),
}
