//! Error handling for the CSV uploader
//!
//! This module defines the error types used throughout the library.
//! Only usage errors (bad input data, bad configuration) ever reach the
//! caller of [`Uploader::upload`](crate::Uploader::upload); network failures
//! are folded into an [`UploadOutcome`](crate::UploadOutcome) instead.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UploadError>;

/// Error types that can occur when preparing or sending an upload
#[derive(Error, Debug)]
pub enum UploadError {
    /// The record sequence was empty
    #[error("No data provided")]
    NoData,

    /// A record carried a column that is not part of the header
    #[error("Record {row} has column '{column}' which is not in the header")]
    MismatchedColumns { row: usize, column: String },

    /// A structured table failed to render itself as CSV
    #[error("Table rendering failed: {message}")]
    TableError { message: String },

    /// Invalid parameter
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl UploadError {
    /// Create a new mismatched columns error
    pub fn mismatched_columns(row: usize, column: impl Into<String>) -> Self {
        UploadError::MismatchedColumns {
            row,
            column: column.into(),
        }
    }

    /// Create a new table error
    pub fn table_error(message: impl Into<String>) -> Self {
        UploadError::TableError {
            message: message.into(),
        }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        UploadError::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Whether the error is a caller mistake rather than an operational failure
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            UploadError::NoData
                | UploadError::MismatchedColumns { .. }
                | UploadError::TableError { .. }
                | UploadError::InvalidParameter { .. }
        )
    }
}
