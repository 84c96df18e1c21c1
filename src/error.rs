//! Error types for Pool Estimator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading estimate input files.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read the input file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The JSON document does not match the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A keyword option (rounding strategy, season, ...) was not recognized.
    #[error("unknown {kind} '{value}'")]
    UnknownKeyword { kind: &'static str, value: String },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },

    /// The phone number cannot be used to address a WhatsApp chat.
    #[error("invalid phone number '{phone}'")]
    InvalidPhone { phone: String },
}

/// Errors raised by form-level validators before a selection is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A measurement lies outside the range the company builds.
    #[error("{field} must be between {min} and {max} m, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A number is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A price is negative or has more than two decimals.
    #[error("{field} is not a valid price: {value}")]
    InvalidPrice { field: &'static str, value: f64 },
}
