//! Linear regression.

use super::Regressor;
use crate::error::ArtifactError;
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// `intercept + coefficients . x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    /// Bias term
    pub intercept: f64,
    /// One weight per feature, in feature order
    pub coefficients: Vec<f64>,
}

impl LinearRegressor {
    /// Create a linear model.
    pub const fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    fn weights(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.coefficients.as_slice())
    }
}

impl Regressor for LinearRegressor {
    fn kind(&self) -> &'static str {
        "linear"
    }

    fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        if self.coefficients.len() != n_features {
            return Err(ArtifactError::Invalid(format!(
                "linear model has {} coefficients for {} features",
                self.coefficients.len(),
                n_features
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::Invalid(
                "linear model has non-finite weights".to_string(),
            ));
        }
        Ok(())
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        self.intercept + self.weights().dot(&ArrayView1::from(row))
    }

    fn predict_rows(&self, rows: ArrayView2<'_, f64>) -> Array1<f64> {
        rows.dot(&self.weights()) + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_predict_row() {
        let model = LinearRegressor::new(100.0, vec![2.0, -1.0, 0.5]);
        assert_relative_eq!(model.predict_row(&[10.0, 5.0, 4.0]), 117.0);
    }

    #[test]
    fn test_predict_rows_matches_rows() {
        let model = LinearRegressor::new(1.0, vec![1.0, 2.0]);
        let rows = array![[1.0, 1.0], [0.0, 3.0], [2.0, 0.5]];
        let batch = model.predict_rows(rows.view());
        for (row, predicted) in rows.outer_iter().zip(batch.iter()) {
            assert_relative_eq!(model.predict_row(row.as_slice().unwrap()), *predicted);
        }
        assert_relative_eq!(batch[0], 4.0);
    }

    #[test]
    fn test_validate() {
        let model = LinearRegressor::new(0.0, vec![1.0, 2.0]);
        assert!(model.validate(2).is_ok());
        assert!(model.validate(3).is_err());
        assert!(LinearRegressor::new(f64::NAN, vec![1.0]).validate(1).is_err());
    }
}
