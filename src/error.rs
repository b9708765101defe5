//! Error types for the menu board.
//!
//! Two kinds of failure are kept apart:
//!
//! * [`BoardError`]: a whole refresh run cannot produce a board (the sheet could
//!   not be fetched, the document is empty, the configuration is invalid, pages
//!   could not be written).
//! * [`SnapshotError`]: one screen could not be captured. These are collected
//!   into a [`crate::snapshot::SnapshotReport`] and never abort the batch.
//!
//! Problems inside a single row or field are not errors at all; they degrade to
//! empty values during card assembly.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// Transport-level failure while requesting the sheet.
    #[error("Failed to fetch sheet from '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The sheet endpoint answered with a non-success status.
    #[error("Sheet request to '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The configured sheet URL cannot be parsed.
    #[error("Invalid sheet URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The sheet was fetched but contained no text.
    #[error("Sheet document is empty")]
    EmptyDocument,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Rendered pages could not be written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize page {page}: {source}")]
    Serialize {
        page: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Capture failure for a single screen.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to launch browser '{binary}': {source}")]
    Launch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Capture of '{url}' timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("Browser exited with {status} while capturing '{url}': {stderr}")]
    BrowserFailed {
        url: String,
        status: String,
        stderr: String,
    },

    /// The browser reported success but no image was written.
    #[error("No image was written to '{path}'")]
    MissingOutput { path: PathBuf },

    #[error("Cannot address page file '{path}' as a URL")]
    InvalidTarget { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, BoardError>;
