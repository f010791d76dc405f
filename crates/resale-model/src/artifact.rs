//! Serialized model artifacts.

use crate::error::ArtifactError;
use crate::regressor::{ModelSpec, Regressor};
use resale_encoding::FeatureSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A trained model together with the feature names it was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Ordered feature names the model consumes
    pub feature_names: Vec<String>,
    /// The fitted model
    pub model: ModelSpec,
}

impl ModelArtifact {
    /// Parse and validate an artifact from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Format`] for malformed JSON and
    /// [`ArtifactError::FeatureNames`] or [`ArtifactError::Invalid`] for an
    /// inconsistent artifact.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Read, parse and validate an artifact file.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Read`] if the file is missing or unreadable,
    /// otherwise as [`ModelArtifact::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact = Self::from_json(&json)?;
        log::info!(
            "Loaded {} model over {} features from {}",
            artifact.model.kind(),
            artifact.feature_names.len(),
            path.display()
        );
        Ok(artifact)
    }

    /// Check feature names and the model against each other.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature names are empty or repeated, or the
    /// model does not fit the feature count.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        FeatureSchema::new(self.feature_names.clone())?;
        self.model.validate(self.feature_names.len())
    }

    /// Feature names as a schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature names are empty or repeated.
    pub fn schema(&self) -> Result<FeatureSchema, ArtifactError> {
        Ok(FeatureSchema::new(self.feature_names.clone())?)
    }

    /// Serialize as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ArtifactError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regressor::{ConstantRegressor, LinearRegressor};

    #[test]
    fn test_from_json() {
        let artifact = ModelArtifact::from_json(
            r#"{"feature_names": ["a", "b"], "model": {"type": "linear", "intercept": 1.0, "coefficients": [2.0, 3.0]}}"#,
        )
        .unwrap();
        assert_eq!(artifact.feature_names, ["a", "b"]);
        assert_eq!(
            artifact.model,
            ModelSpec::Linear(LinearRegressor::new(1.0, vec![2.0, 3.0]))
        );
    }

    #[test]
    fn test_rejects_inconsistent_artifacts() {
        let short = r#"{"feature_names": ["a", "b"], "model": {"type": "linear", "intercept": 1.0, "coefficients": [2.0]}}"#;
        assert!(matches!(
            ModelArtifact::from_json(short),
            Err(ArtifactError::Invalid(_))
        ));

        let duplicate = r#"{"feature_names": ["a", "a"], "model": {"type": "constant", "value": 1.0}}"#;
        assert!(matches!(
            ModelArtifact::from_json(duplicate),
            Err(ArtifactError::FeatureNames(_))
        ));

        assert!(matches!(
            ModelArtifact::from_json("not json"),
            Err(ArtifactError::Format(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let artifact = ModelArtifact {
            feature_names: vec!["flat_age".into()],
            model: ModelSpec::Constant(ConstantRegressor::new(42.0)),
        };
        let json = artifact.to_json().unwrap();
        assert_eq!(ModelArtifact::from_json(&json).unwrap(), artifact);
    }
}
