//! The encode -> predict -> estimate pipeline.

use crate::settings::{Settings, SettingsError};
use ndarray::{Array2, ArrayView1};
use resale_encoding::{
    AttributeSet, EncoderConfig, EncodingError, FeatureEncoder, FeatureLayout, FeatureSchema,
    FeatureVector,
};
use resale_model::{ArtifactError, PredictError, PricePredictor};
use resale_output::{PredictionRecord, PriceEstimate};
use thiserror::Error;

/// Errors from loading or running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Settings could not be read
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Model or feature schema artifact could not be loaded
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Reference year or attributes were invalid
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Schema artifact and model artifact disagree
    #[error("Feature schema does not match the model: {0}")]
    Incompatible(#[source] PredictError),

    /// Prediction failed
    #[error(transparent)]
    Predict(#[from] PredictError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Loaded schema, encoder and predictor. Read-only once built.
#[derive(Debug)]
pub struct Pipeline {
    schema: FeatureSchema,
    encoder: FeatureEncoder,
    predictor: PricePredictor,
    currency: String,
}

impl Pipeline {
    /// Load both artifacts named by `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if either artifact is missing or invalid, or if the
    /// schema does not list exactly the model's features in the model's order.
    pub fn load(settings: &Settings) -> Result<Self> {
        let schema =
            FeatureSchema::load(&settings.features_path).map_err(ArtifactError::Schema)?;
        let predictor = PricePredictor::load(&settings.model_path)?;
        Self::new(
            schema,
            predictor,
            EncoderConfig {
                reference_year: settings.reference_year,
            },
            settings.currency.clone(),
        )
    }

    /// Assemble a pipeline from loaded parts.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Encoding`] if the reference year is out of
    /// range, or [`PipelineError::Incompatible`] if the schema and the
    /// predictor's feature names differ.
    pub fn new(
        schema: FeatureSchema,
        predictor: PricePredictor,
        config: EncoderConfig,
        currency: impl Into<String>,
    ) -> Result<Self> {
        config.validate()?;
        predictor
            .check_schema(schema.names())
            .map_err(PipelineError::Incompatible)?;

        // Share the predictor's names so encoded vectors match it by pointer.
        let schema = FeatureSchema::from_shared(predictor.shared_feature_names())
            .map_err(ArtifactError::from)?;
        let encoder = FeatureEncoder::with_config(FeatureLayout::resolve(&schema), config);
        log::info!(
            "Pipeline ready: {} features, {} model, reference year {}",
            schema.len(),
            predictor.model_kind(),
            config.reference_year
        );

        Ok(Self {
            schema,
            encoder,
            predictor,
            currency: currency.into(),
        })
    }

    /// The feature schema.
    pub const fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// The encoder.
    pub const fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    /// The predictor.
    pub const fn predictor(&self) -> &PricePredictor {
        &self.predictor
    }

    /// Year flat age is measured against.
    pub const fn reference_year(&self) -> i32 {
        self.encoder.config().reference_year
    }

    /// Encode attributes.
    pub fn encode(&self, attrs: &AttributeSet) -> FeatureVector {
        self.encoder.encode(attrs)
    }

    /// Estimate the price of one flat.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails.
    pub fn estimate(&self, attrs: &AttributeSet) -> Result<PriceEstimate> {
        let vector = self.encode(attrs);
        let amount = self.predictor.predict(&vector)?;
        Ok(PriceEstimate::new(amount, self.currency.clone()))
    }

    /// Estimate the price of one flat, with its inputs, as an exportable record.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails.
    pub fn record(&self, attrs: &AttributeSet) -> Result<PredictionRecord> {
        let estimate = self.estimate(attrs)?;
        Ok(PredictionRecord::new(attrs, self.reference_year(), &estimate))
    }

    /// Estimate many flats with one batched model call.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails for any row.
    pub fn estimate_batch(&self, batch: &[AttributeSet]) -> Result<Vec<PriceEstimate>> {
        let width = self.schema.len();
        let mut rows = Array2::<f64>::zeros((batch.len(), width));
        for (mut row, attrs) in rows.outer_iter_mut().zip(batch) {
            let vector = self.encode(attrs);
            row.assign(&ArrayView1::from(vector.values()));
        }

        let amounts = self.predictor.predict_batch(rows.view())?;
        Ok(amounts
            .iter()
            .map(|amount| PriceEstimate::new(*amount, self.currency.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resale_model::{ConstantRegressor, LinearRegressor};

    fn attrs(town: &str, area: f64) -> AttributeSet {
        AttributeSet::parse(town, "4 ROOM", "MODEL A", area, "07 TO 09", 2005).unwrap()
    }

    #[test]
    fn test_stub_model_output_passes_through() {
        let schema = FeatureSchema::full();
        let predictor =
            PricePredictor::new(schema.names().to_vec(), ConstantRegressor::new(512_345.68))
                .unwrap();
        let pipeline = Pipeline::new(schema, predictor, EncoderConfig::default(), "SGD").unwrap();

        let estimate = pipeline.estimate(&attrs("BEDOK", 90.0)).unwrap();
        assert_eq!(estimate.amount, 512_345.68);
        assert_eq!(estimate.to_string(), "SGD 512,345.68");
    }

    #[test]
    fn test_batch_matches_single() {
        let schema = FeatureSchema::full();
        let mut coefficients = vec![0.0; schema.len()];
        coefficients[0] = 5_000.0;
        coefficients[1] = -2_000.0;
        coefficients[schema.position("town_BISHAN").unwrap()] = 80_000.0;
        let predictor = PricePredictor::new(
            schema.names().to_vec(),
            LinearRegressor::new(100_000.0, coefficients),
        )
        .unwrap();
        let pipeline = Pipeline::new(schema, predictor, EncoderConfig::default(), "SGD").unwrap();

        let batch = [attrs("BEDOK", 90.0), attrs("BISHAN", 120.0)];
        let estimates = pipeline.estimate_batch(&batch).unwrap();
        for (attrs, estimate) in batch.iter().zip(&estimates) {
            assert_eq!(pipeline.estimate(attrs).unwrap(), *estimate);
        }
        assert_eq!(estimates[0].amount, 100_000.0 + 450_000.0 - 40_000.0);
        assert_eq!(estimates[1].amount, 100_000.0 + 600_000.0 - 40_000.0 + 80_000.0);
    }

    #[test]
    fn test_vectors_share_predictor_names() {
        let schema = FeatureSchema::full();
        let predictor =
            PricePredictor::new(schema.names().to_vec(), ConstantRegressor::new(1.0)).unwrap();
        let pipeline = Pipeline::new(schema, predictor, EncoderConfig::default(), "SGD").unwrap();

        let vector = pipeline.encode(&attrs("BEDOK", 90.0));
        assert!(std::ptr::eq(
            vector.names(),
            pipeline.predictor().feature_names()
        ));
        assert!(std::ptr::eq(
            pipeline.schema().names(),
            pipeline.predictor().feature_names()
        ));
    }

    #[test]
    fn test_out_of_range_reference_year_is_rejected() {
        let schema = FeatureSchema::full();
        let predictor =
            PricePredictor::new(schema.names().to_vec(), ConstantRegressor::new(1.0)).unwrap();
        let err = Pipeline::new(
            schema,
            predictor,
            EncoderConfig {
                reference_year: i32::MIN,
            },
            "SGD",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Encoding(EncodingError::OutOfRange {
                field: "reference_year",
                ..
            })
        ));
    }

    #[test]
    fn test_mismatched_artifacts_are_rejected() {
        let predictor = PricePredictor::new(
            vec!["flat_age".into(), "floor_area_sqm".into()],
            ConstantRegressor::new(1.0),
        )
        .unwrap();
        let err = Pipeline::new(
            FeatureSchema::full(),
            predictor,
            EncoderConfig::default(),
            "SGD",
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Incompatible(_)));
    }
}
