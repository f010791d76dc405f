//! One-hot feature encoding.
//!
//! Numeric columns take the floor area and the two derived values:
//!
//! - `flat_age = reference_year - lease_commence_year`
//! - `storey_median = (low + high) / 2`
//!
//! Each one-hot group gets a single `1.0` at the chosen value's column; a
//! value without a column leaves its group all zero. Every other column is
//! `0.0`. Output order is schema order, since the model binds positionally.

use crate::attributes::{AttributeSet, REFERENCE_YEAR_RANGE};
use crate::error::{EncodingError, Result};
use crate::layout::FeatureLayout;
use crate::schema::FeatureSchema;
use crate::vector::FeatureVector;
use serde::{Deserialize, Serialize};

/// Year the bundled model measures flat age against.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Year flat age is computed against
    pub reference_year: i32,
}

impl EncoderConfig {
    /// Settings measuring flat age against `reference_year`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::OutOfRange`] if the year is outside
    /// [`REFERENCE_YEAR_RANGE`].
    pub fn new(reference_year: i32) -> Result<Self> {
        let config = Self { reference_year };
        config.validate()?;
        Ok(config)
    }

    /// Check the reference year.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::OutOfRange`] if the year is outside
    /// [`REFERENCE_YEAR_RANGE`].
    pub fn validate(&self) -> Result<()> {
        if REFERENCE_YEAR_RANGE.contains(&self.reference_year) {
            return Ok(());
        }
        Err(EncodingError::OutOfRange {
            field: "reference_year",
            value: f64::from(self.reference_year),
            min: f64::from(*REFERENCE_YEAR_RANGE.start()),
            max: f64::from(*REFERENCE_YEAR_RANGE.end()),
        })
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

/// Encodes attribute sets against a resolved schema.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    layout: FeatureLayout,
    config: EncoderConfig,
}

impl FeatureEncoder {
    /// Resolve `schema` and build an encoder with default settings.
    pub fn new(schema: &FeatureSchema) -> Self {
        Self::with_config(FeatureLayout::resolve(schema), EncoderConfig::default())
    }

    /// Build an encoder from an already resolved layout.
    pub const fn with_config(layout: FeatureLayout, config: EncoderConfig) -> Self {
        Self { layout, config }
    }

    /// The resolved layout.
    pub const fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    /// Encoder settings.
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode one attribute set.
    pub fn encode(&self, attrs: &AttributeSet) -> FeatureVector {
        let layout = &self.layout;
        let mut values = vec![0.0; layout.len()];

        let numeric = [
            (layout.floor_area_index(), attrs.floor_area_sqm()),
            (
                layout.flat_age_index(),
                f64::from(attrs.flat_age(self.config.reference_year)),
            ),
            (layout.storey_median_index(), attrs.storey_range().median()),
        ];
        for (index, value) in numeric {
            if let Some(i) = index {
                values[i] = value;
            }
        }

        let hot = [
            layout.town_index(attrs.town()),
            layout.flat_type_index(attrs.flat_type()),
            layout.flat_model_index(attrs.flat_model()),
        ];
        for i in hot.into_iter().flatten() {
            values[i] = 1.0;
        }

        log::debug!(
            "Encoded {} / {} / {} into {} features",
            attrs.town(),
            attrs.flat_type(),
            attrs.flat_model(),
            values.len()
        );

        FeatureVector::new(layout.shared_names(), values)
    }
}

/// Encode `attrs` against `schema` with the default reference year.
///
/// Resolves the schema on every call; hold a [`FeatureEncoder`] when
/// encoding more than once.
pub fn encode(attrs: &AttributeSet, schema: &FeatureSchema) -> FeatureVector {
    FeatureEncoder::new(schema).encode(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{FlatModel, FlatType, StoreyRange, Town};
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn bedok() -> AttributeSet {
        AttributeSet::new(
            Town::Bedok,
            FlatType::FourRoom,
            FlatModel::ModelA,
            90.0,
            StoreyRange::new(7, 9),
            2005,
        )
        .unwrap()
    }

    #[test]
    fn test_numeric_features() {
        let vector = encode(&bedok(), &FeatureSchema::full());
        assert_relative_eq!(vector.get("floor_area_sqm").unwrap(), 90.0);
        assert_relative_eq!(vector.get("flat_age").unwrap(), 20.0);
        assert_relative_eq!(vector.get("storey_median").unwrap(), 8.0);
    }

    #[test]
    fn test_reference_year() {
        let encoder = FeatureEncoder::with_config(
            FeatureLayout::resolve(&FeatureSchema::full()),
            EncoderConfig {
                reference_year: 2030,
            },
        );
        assert_eq!(encoder.encode(&bedok()).get("flat_age"), Some(25.0));
    }

    #[rstest]
    #[case(1960)]
    #[case(2025)]
    #[case(2100)]
    fn test_reference_year_accepted(#[case] year: i32) {
        assert_eq!(EncoderConfig::new(year).unwrap().reference_year, year);
    }

    #[rstest]
    #[case(i32::MIN)]
    #[case(0)]
    #[case(1959)]
    #[case(2101)]
    #[case(i32::MAX)]
    fn test_reference_year_rejected(#[case] year: i32) {
        let err = EncoderConfig::new(year).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::OutOfRange {
                field: "reference_year",
                ..
            }
        ));
    }

    #[test]
    fn test_flat_age_saturates() {
        assert_eq!(bedok().flat_age(i32::MIN), i32::MIN);
        assert_eq!(bedok().flat_age(i32::MAX), i32::MAX - 2005);
    }

    #[test]
    fn test_unknown_columns_are_zero() {
        let schema = FeatureSchema::new(vec![
            "remaining_lease".into(),
            "town_BEDOK".into(),
            "town_bedok".into(),
        ])
        .unwrap();
        let vector = encode(&bedok(), &schema);
        assert_eq!(vector.values(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_missing_category_column_gives_zero_group() {
        let schema = FeatureSchema::new(vec![
            "flat_type_3 ROOM".into(),
            "flat_type_5 ROOM".into(),
            "floor_area_sqm".into(),
        ])
        .unwrap();
        let vector = encode(&bedok(), &schema);
        assert_eq!(vector.values(), [0.0, 0.0, 90.0]);
    }
}
