//! Price prediction over encoded feature vectors.

use crate::artifact::ModelArtifact;
use crate::error::{ArtifactError, PredictError, Result};
use crate::regressor::Regressor;
use ndarray::{Array1, ArrayView2};
use resale_encoding::{FeatureSchema, FeatureVector};
use std::path::Path;
use std::sync::Arc;

/// A loaded model bound to the feature names it was trained on.
#[derive(Debug)]
pub struct PricePredictor {
    feature_names: Arc<[String]>,
    model: Box<dyn Regressor>,
}

impl PricePredictor {
    /// Bind a model to its feature names, validating both.
    ///
    /// # Errors
    ///
    /// Returns an error if the names are empty or repeated, or the model does
    /// not fit them.
    pub fn new(
        feature_names: Vec<String>,
        model: impl Regressor + 'static,
    ) -> std::result::Result<Self, ArtifactError> {
        let schema = FeatureSchema::new(feature_names)?;
        model.validate(schema.len())?;
        Ok(Self {
            feature_names: schema.shared_names(),
            model: Box::new(model),
        })
    }

    /// Build a predictor from a parsed artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact is inconsistent.
    pub fn from_artifact(artifact: ModelArtifact) -> std::result::Result<Self, ArtifactError> {
        Self::new(artifact.feature_names, artifact.model)
    }

    /// Load a model artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not a valid
    /// model artifact.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ArtifactError> {
        Self::from_artifact(ModelArtifact::load(path)?)
    }

    /// Feature names the model was trained on, in order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Shared handle to the feature names.
    pub fn shared_feature_names(&self) -> Arc<[String]> {
        Arc::clone(&self.feature_names)
    }

    /// Model kind, e.g. `"linear"`.
    pub fn model_kind(&self) -> &'static str {
        self.model.kind()
    }

    /// Check that `names` equal the model's feature names, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::SchemaMismatch`] naming the first differing
    /// position.
    pub fn check_schema(&self, names: &[String]) -> Result<()> {
        if self.feature_names.as_ref() == names {
            return Ok(());
        }
        let position = self
            .feature_names
            .iter()
            .zip(names)
            .position(|(expected, found)| expected != found)
            .unwrap_or_else(|| self.feature_names.len().min(names.len()));
        Err(PredictError::SchemaMismatch {
            position,
            expected: self.feature_names.get(position).cloned(),
            found: names.get(position).cloned(),
        })
    }

    /// Predict the price for one encoded vector.
    ///
    /// Negative model output is clamped to zero.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::SchemaMismatch`] if the vector was encoded
    /// against different feature names, or [`PredictError::NonFinite`] if the
    /// model output is NaN or infinite.
    pub fn predict(&self, vector: &FeatureVector) -> Result<f64> {
        if !vector.matches_names(&self.feature_names) {
            self.check_schema(vector.names())?;
        }
        let raw = self.model.predict_row(vector.values());
        log::debug!("{} model predicted {raw}", self.model.kind());
        finalize(raw)
    }

    /// Predict every row of a feature matrix laid out in model feature order.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::DimensionMismatch`] if the column count is
    /// wrong, or [`PredictError::NonFinite`] if any output is not finite.
    pub fn predict_batch(&self, rows: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if rows.ncols() != self.feature_names.len() {
            return Err(PredictError::DimensionMismatch {
                expected: self.feature_names.len(),
                found: rows.ncols(),
            });
        }
        let mut predictions = self.model.predict_rows(rows);
        for value in &mut predictions {
            *value = finalize(*value)?;
        }
        Ok(predictions)
    }
}

fn finalize(raw: f64) -> Result<f64> {
    if !raw.is_finite() {
        return Err(PredictError::NonFinite(raw));
    }
    if raw < 0.0 {
        log::warn!("Model predicted a negative price ({raw:.2}); clamping to 0");
        return Ok(0.0);
    }
    Ok(raw)
}
