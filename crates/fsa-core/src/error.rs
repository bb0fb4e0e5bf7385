//! Error types for statement analysis.
//!
//! This module defines [`FsaError`] which covers the failures that abort work on
//! a statement or a report. Expected steady-state conditions (a company with no
//! published data, an endpoint that never answers) are not errors: they surface
//! as [`Statement::Unavailable`](crate::statement::Statement::Unavailable).

use thiserror::Error;

/// Errors that can occur while fetching, parsing or deriving ratios.
#[derive(Error, Debug)]
pub enum FsaError {
    /// Network-related errors (connection failures, timeouts, bad status).
    #[error("Network error: {0}")]
    Network(String),

    /// The source document did not have the expected shape or content.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A ratio formula referenced a line item the statement does not carry.
    #[error("Line item not found: {0}")]
    MissingLineItem(String),

    /// Two series combined by one formula have different lengths.
    #[error("Misaligned series for {context}: {left} vs {right} periods")]
    Misaligned {
        /// What was being computed when the mismatch was found.
        context: String,
        /// Length of the left-hand series.
        left: usize,
        /// Length of the right-hand series.
        right: usize,
    },

    /// The requested company is not part of the store.
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Writing a report artefact failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`FsaError`].
pub type Result<T> = std::result::Result<T, FsaError>;
