#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod attributes;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod schema;
pub mod vector;

pub use attributes::{
    AttributeRecord, AttributeSet, Category, FLOOR_AREA_RANGE, FlatModel, FlatType,
    LEASE_YEAR_RANGE, REFERENCE_YEAR_RANGE, StoreyRange, Town, storey::storey_median,
};
pub use encoder::{DEFAULT_REFERENCE_YEAR, EncoderConfig, FeatureEncoder, encode};
pub use error::{EncodingError, Result, SchemaError};
pub use layout::{Coverage, FeatureLayout, FeatureSlot};
pub use schema::FeatureSchema;
pub use vector::FeatureVector;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
