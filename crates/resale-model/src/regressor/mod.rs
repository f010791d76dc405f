//! Regression models.
//!
//! Every model kind implements [`Regressor`]; [`ModelSpec`] is the serialized
//! form stored in artifacts.

pub mod constant;
pub mod linear;
pub mod tree;

pub use constant::ConstantRegressor;
pub use linear::LinearRegressor;
pub use tree::{Node, Tree, TreeEnsemble};

use crate::error::ArtifactError;
use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fitted model mapping a positional feature row to a price.
pub trait Regressor: fmt::Debug + Send + Sync {
    /// Short model kind name for logs.
    fn kind(&self) -> &'static str;

    /// Check the model against the width of its input rows.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Invalid`] if the model references features
    /// that do not exist or is otherwise malformed.
    fn validate(&self, n_features: usize) -> Result<(), ArtifactError>;

    /// Predict one row. `row.len()` equals the validated width.
    fn predict_row(&self, row: &[f64]) -> f64;

    /// Predict every row of a matrix.
    fn predict_rows(&self, rows: ArrayView2<'_, f64>) -> Array1<f64> {
        rows.outer_iter()
            .map(|row| match row.as_slice() {
                Some(slice) => self.predict_row(slice),
                None => self.predict_row(&row.to_vec()),
            })
            .collect()
    }
}

/// Serialized model, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Linear regression
    Linear(LinearRegressor),
    /// Gradient boosted trees
    TreeEnsemble(TreeEnsemble),
    /// Fixed output
    Constant(ConstantRegressor),
}

impl ModelSpec {
    fn inner(&self) -> &dyn Regressor {
        match self {
            Self::Linear(m) => m,
            Self::TreeEnsemble(m) => m,
            Self::Constant(m) => m,
        }
    }
}

impl Regressor for ModelSpec {
    fn kind(&self) -> &'static str {
        self.inner().kind()
    }

    fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        self.inner().validate(n_features)
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        self.inner().predict_row(row)
    }

    fn predict_rows(&self, rows: ArrayView2<'_, f64>) -> Array1<f64> {
        self.inner().predict_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_tagging() {
        let spec: ModelSpec =
            serde_json::from_str(r#"{"type": "constant", "value": 250000.0}"#).unwrap();
        assert_eq!(spec.kind(), "constant");
        assert_eq!(spec.predict_row(&[1.0, 2.0]), 250000.0);

        let json = serde_json::to_string(&ModelSpec::Linear(LinearRegressor::new(
            1.0,
            vec![2.0],
        )))
        .unwrap();
        assert!(json.starts_with(r#"{"type":"linear""#));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(serde_json::from_str::<ModelSpec>(r#"{"type": "svm"}"#).is_err());
    }
}
