//! Error types for model loading and prediction.

use resale_encoding::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a model artifact.
///
/// Any of these at startup means no prediction can be served.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file could not be read
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        /// Path of the artifact
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Artifact is not a valid serialized model
    #[error("Malformed model artifact: {0}")]
    Format(#[from] serde_json::Error),

    /// Feature schema artifact is missing or invalid
    #[error(transparent)]
    Schema(SchemaError),

    /// Artifact feature names are empty or repeated
    #[error("Invalid model feature names: {0}")]
    FeatureNames(#[from] SchemaError),

    /// Artifact parsed but is internally inconsistent
    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

/// Errors raised while serving a single prediction.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Feature vector does not match what the model was trained on
    #[error(
        "Feature schema mismatch at position {position}: model expects {expected:?}, got {found:?}"
    )]
    SchemaMismatch {
        /// First position where the names differ
        position: usize,
        /// Name the model expects there, if any
        expected: Option<String>,
        /// Name the vector has there, if any
        found: Option<String>,
    },

    /// Batch matrix has the wrong number of columns
    #[error("Expected {expected} feature columns, got {found}")]
    DimensionMismatch {
        /// Columns the model expects
        expected: usize,
        /// Columns supplied
        found: usize,
    },

    /// Model produced NaN or infinity
    #[error("Model produced a non-finite prediction: {0}")]
    NonFinite(f64),
}

/// Result type for prediction.
pub type Result<T> = std::result::Result<T, PredictError>;
