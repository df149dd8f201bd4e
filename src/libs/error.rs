//! Error type shared by the fetch, aggregate, filter and render pipeline.
//!
//! Library functions return [`ReportError`] so callers can tell a bad date
//! from a failed provider call from an unresolved selection. Command handlers
//! wrap it into `anyhow::Error` for display.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The input matched none of the accepted date patterns.
    #[error("could not parse date '{0}' (expected DD.MM.YYYY, YYYY-MM-DD or DD-MM-YYYY)")]
    InvalidDateFormat(String),

    #[error("end date {end} lies before start date {start}")]
    InvalidDateRange { start: String, end: String },

    /// The provider answered with a non-success status. Not retried.
    #[error("provider request to {url} failed with status {status}")]
    Transport { status: u16, url: String },

    /// Connection, timeout or body errors raised by the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unexpected provider record: {0}")]
    Decode(#[from] serde_json::Error),

    /// A client or project choice could not be resolved.
    #[error("selection could not be resolved: {0}")]
    AmbiguousSelection(String),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),

    #[error("missing credential: {0}")]
    MissingCredential(String),

    #[error("no account named '{0}' in the configuration")]
    UnknownAccount(String),

    #[error("failed to render PDF: {0}")]
    Pdf(String),
}
