//! Flat attributes collected per estimate.
//!
//! The three categorical attributes share the [`Category`] trait, which ties
//! each value to its one-hot column (`town_BEDOK`, `flat_type_4 ROOM`, ...).

pub mod flat_model;
pub mod flat_type;
pub mod storey;
pub mod town;

pub use flat_model::FlatModel;
pub use flat_type::FlatType;
pub use storey::StoreyRange;
pub use town::Town;

use crate::error::{EncodingError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted floor area in square metres.
pub const FLOOR_AREA_RANGE: RangeInclusive<f64> = 30.0..=200.0;

/// Accepted lease commencement years.
pub const LEASE_YEAR_RANGE: RangeInclusive<i32> = 1960..=2025;

/// Accepted reference years for measuring flat age.
pub const REFERENCE_YEAR_RANGE: RangeInclusive<i32> = 1960..=2100;

/// A categorical attribute encoded as a one-hot group.
pub trait Category: Copy + Eq + Sized + 'static {
    /// Human-readable group name used in error messages.
    const GROUP: &'static str;

    /// Column prefix of the group's one-hot columns.
    const PREFIX: &'static str;

    /// Every value, in declaration order.
    fn all() -> &'static [Self];

    /// Display name, exactly as it appears in column names.
    fn name(&self) -> &'static str;

    /// Position of the value in [`Category::all`].
    fn index(&self) -> usize;

    /// Look up a value by its exact display name.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }

    /// Parse user input: surrounding whitespace and case are ignored.
    fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EncodingError::UnknownCategory {
                group: Self::GROUP,
                value: input.to_string(),
            })
    }

    /// One-hot column name for this value.
    fn column_name(&self) -> String {
        format!("{}{}", Self::PREFIX, self.name())
    }
}

/// The six attributes of a flat. Validated on construction and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeSet {
    town: Town,
    flat_type: FlatType,
    flat_model: FlatModel,
    floor_area_sqm: f64,
    storey_range: StoreyRange,
    lease_commence_year: i32,
}

impl AttributeSet {
    /// Create an attribute set, checking floor area and lease year ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::OutOfRange`] if floor area is outside
    /// [`FLOOR_AREA_RANGE`] (or not finite) or the lease year is outside
    /// [`LEASE_YEAR_RANGE`].
    pub fn new(
        town: Town,
        flat_type: FlatType,
        flat_model: FlatModel,
        floor_area_sqm: f64,
        storey_range: StoreyRange,
        lease_commence_year: i32,
    ) -> Result<Self> {
        if !FLOOR_AREA_RANGE.contains(&floor_area_sqm) {
            return Err(EncodingError::OutOfRange {
                field: "floor_area_sqm",
                value: floor_area_sqm,
                min: *FLOOR_AREA_RANGE.start(),
                max: *FLOOR_AREA_RANGE.end(),
            });
        }
        if !LEASE_YEAR_RANGE.contains(&lease_commence_year) {
            return Err(EncodingError::OutOfRange {
                field: "lease_commence_year",
                value: f64::from(lease_commence_year),
                min: f64::from(*LEASE_YEAR_RANGE.start()),
                max: f64::from(*LEASE_YEAR_RANGE.end()),
            });
        }

        Ok(Self {
            town,
            flat_type,
            flat_model,
            floor_area_sqm,
            storey_range,
            lease_commence_year,
        })
    }

    /// Create an attribute set from display strings.
    ///
    /// # Errors
    ///
    /// Returns an error if a categorical value is unknown, the storey range
    /// is malformed, or a numeric value is out of range.
    pub fn parse(
        town: &str,
        flat_type: &str,
        flat_model: &str,
        floor_area_sqm: f64,
        storey_range: &str,
        lease_commence_year: i32,
    ) -> Result<Self> {
        Self::new(
            Town::parse(town)?,
            FlatType::parse(flat_type)?,
            FlatModel::parse(flat_model)?,
            floor_area_sqm,
            storey_range.parse()?,
            lease_commence_year,
        )
    }

    /// Town the flat is in.
    pub const fn town(&self) -> Town {
        self.town
    }

    /// Flat type (number of rooms).
    pub const fn flat_type(&self) -> FlatType {
        self.flat_type
    }

    /// Flat model.
    pub const fn flat_model(&self) -> FlatModel {
        self.flat_model
    }

    /// Floor area in square metres.
    pub const fn floor_area_sqm(&self) -> f64 {
        self.floor_area_sqm
    }

    /// Storey bucket.
    pub const fn storey_range(&self) -> StoreyRange {
        self.storey_range
    }

    /// Year the 99-year lease started.
    pub const fn lease_commence_year(&self) -> i32 {
        self.lease_commence_year
    }

    /// Flat age relative to `reference_year`.
    ///
    /// Saturates instead of overflowing; callers keep `reference_year`
    /// within [`REFERENCE_YEAR_RANGE`].
    pub const fn flat_age(&self, reference_year: i32) -> i32 {
        reference_year.saturating_sub(self.lease_commence_year)
    }
}

/// Unvalidated attributes as they arrive from a CSV row or a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Town display name
    pub town: String,
    /// Flat type display name
    pub flat_type: String,
    /// Flat model display name
    pub flat_model: String,
    /// Floor area in square metres
    pub floor_area_sqm: f64,
    /// Storey range, `"NN TO MM"`
    pub storey_range: String,
    /// Lease commencement year
    pub lease_commence_year: i32,
}

impl TryFrom<&AttributeRecord> for AttributeSet {
    type Error = EncodingError;

    fn try_from(record: &AttributeRecord) -> Result<Self> {
        Self::parse(
            &record.town,
            &record.flat_type,
            &record.flat_model,
            record.floor_area_sqm,
            &record.storey_range,
            record.lease_commence_year,
        )
    }
}

impl From<&AttributeSet> for AttributeRecord {
    fn from(attrs: &AttributeSet) -> Self {
        Self {
            town: attrs.town.name().to_string(),
            flat_type: attrs.flat_type.name().to_string(),
            flat_model: attrs.flat_model.name().to_string(),
            floor_area_sqm: attrs.floor_area_sqm,
            storey_range: attrs.storey_range.to_string(),
            lease_commence_year: attrs.lease_commence_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_attribute_set() {
        let attrs = AttributeSet::parse("bedok", " 4 room ", "Model A", 90.0, "07 TO 09", 2005)
            .unwrap();
        assert_eq!(attrs.town(), Town::Bedok);
        assert_eq!(attrs.flat_type(), FlatType::FourRoom);
        assert_eq!(attrs.flat_model(), FlatModel::ModelA);
        assert_eq!(attrs.storey_range(), StoreyRange::new(7, 9));
        assert_eq!(attrs.flat_age(2025), 20);
    }

    #[rstest]
    #[case(29.9, 2005, "floor_area_sqm")]
    #[case(200.5, 2005, "floor_area_sqm")]
    #[case(f64::NAN, 2005, "floor_area_sqm")]
    #[case(90.0, 1959, "lease_commence_year")]
    #[case(90.0, 2026, "lease_commence_year")]
    fn test_out_of_range(#[case] area: f64, #[case] year: i32, #[case] expected: &str) {
        let err = AttributeSet::new(
            Town::Bedok,
            FlatType::FourRoom,
            FlatModel::ModelA,
            area,
            StoreyRange::new(1, 3),
            year,
        )
        .unwrap_err();
        match err {
            EncodingError::OutOfRange { field, .. } => assert_eq!(field, expected),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        for (area, year) in [(30.0, 1960), (200.0, 2025)] {
            assert!(
                AttributeSet::new(
                    Town::Yishun,
                    FlatType::Executive,
                    FlatModel::Maisonette,
                    area,
                    StoreyRange::new(49, 51),
                    year,
                )
                .is_ok()
            );
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = AttributeSet::parse("ATLANTIS", "4 ROOM", "MODEL A", 90.0, "01 TO 03", 2005)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown town: \"ATLANTIS\"");
    }

    #[test]
    fn test_record_round_trip_keeps_display_names() {
        let attrs = AttributeSet::parse(
            "KALLANG/WHAMPOA",
            "MULTI GENERATION",
            "TYPE S2",
            150.0,
            "40 TO 42",
            1999,
        )
        .unwrap();
        let record = AttributeRecord::from(&attrs);
        assert_eq!(record.town, "KALLANG/WHAMPOA");
        assert_eq!(record.storey_range, "40 TO 42");
        assert_eq!(AttributeSet::try_from(&record).unwrap(), attrs);
    }

    #[test]
    fn test_column_name() {
        assert_eq!(Town::CentralArea.column_name(), "town_CENTRAL AREA");
        assert_eq!(FlatType::FourRoom.column_name(), "flat_type_4 ROOM");
        assert_eq!(FlatModel::PremiumApartment.column_name(), "flat_model_PREMIUM APARTMENT");
    }
}
