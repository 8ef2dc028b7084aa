//! Custom error types for the application.
//!
//! - [`CatalogError`] - Install catalog parsing and validation
//! - [`ClipboardError`] - Clipboard API failures

use thiserror::Error;

use crate::models::Os;

/// Install catalog errors, reported once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// TOML syntax or schema error.
    #[error("failed to parse install catalog: {0}")]
    Parse(String),
    #[error("install catalog has no methods")]
    Empty,
    #[error("install method #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
    #[error("duplicate install method id '{0}'")]
    DuplicateId(String),
    #[error("multiple primary install methods for {os}: '{first}' and '{second}'")]
    MultiplePrimaries {
        os: Os,
        first: String,
        second: String,
    },
    /// `os = "all"` entries can never be a platform recommendation.
    #[error("install method '{0}' targets all platforms and cannot be primary")]
    PrimaryForAll(String),
    #[error("install method '{0}' has link text but no link")]
    LinkTextWithoutLink(String),
}

/// Clipboard write failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("browser window not available")]
    NoWindow,
    /// `navigator.clipboard` is missing (insecure context or old browser).
    #[error("clipboard API not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
