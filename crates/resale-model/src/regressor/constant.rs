//! Constant model.

use super::Regressor;
use crate::error::ArtifactError;
use serde::{Deserialize, Serialize};

/// Returns the same value for every row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantRegressor {
    /// The prediction
    pub value: f64,
}

impl ConstantRegressor {
    /// Create a constant model.
    pub const fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Regressor for ConstantRegressor {
    fn kind(&self) -> &'static str {
        "constant"
    }

    fn validate(&self, _n_features: usize) -> Result<(), ArtifactError> {
        if self.value.is_finite() {
            Ok(())
        } else {
            Err(ArtifactError::Invalid(format!(
                "constant value {} is not finite",
                self.value
            )))
        }
    }

    fn predict_row(&self, _row: &[f64]) -> f64 {
        self.value
    }
}
