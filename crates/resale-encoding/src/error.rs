//! Error types for attribute parsing and feature encoding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;

/// Errors raised while building an [`AttributeSet`](crate::AttributeSet).
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Storey range string did not match `"NN TO MM"`
    #[error("Invalid storey range {input:?}: {reason}")]
    Parse {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Categorical value that names no known category
    #[error("Unknown {group}: {value:?}")]
    UnknownCategory {
        /// Attribute group ("town", "flat type", "flat model")
        group: &'static str,
        /// The rejected input
        value: String,
    },

    /// Numeric attribute outside its accepted range
    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Attribute name
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },
}

/// Errors raised while loading a [`FeatureSchema`](crate::FeatureSchema).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema file could not be read
    #[error("Failed to read feature schema {path}: {source}")]
    Read {
        /// Path of the schema artifact
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Schema file is not a JSON array of strings
    #[error("Malformed feature schema: {0}")]
    Format(#[from] serde_json::Error),

    /// Schema lists no features
    #[error("Feature schema is empty")]
    Empty,

    /// Same feature name listed twice
    #[error("Duplicate feature {0:?} in schema")]
    Duplicate(String),
}
