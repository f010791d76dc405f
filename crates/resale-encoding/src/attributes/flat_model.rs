//! Flat models (building designs).

use super::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HDB flat model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlatModel {
    /// Improved
    #[serde(rename = "IMPROVED")]
    Improved,

    /// New Generation
    #[serde(rename = "NEW GENERATION")]
    NewGeneration,

    /// Model A
    #[serde(rename = "MODEL A")]
    ModelA,

    /// Standard
    #[serde(rename = "STANDARD")]
    Standard,

    /// Simplified
    #[serde(rename = "SIMPLIFIED")]
    Simplified,

    /// Maisonette
    #[serde(rename = "MAISONETTE")]
    Maisonette,

    /// Apartment
    #[serde(rename = "APARTMENT")]
    Apartment,

    /// Premium Apartment
    #[serde(rename = "PREMIUM APARTMENT")]
    PremiumApartment,

    /// Type S1 (Pinnacle@Duxton)
    #[serde(rename = "TYPE S1")]
    TypeS1,

    /// Type S2 (Pinnacle@Duxton)
    #[serde(rename = "TYPE S2")]
    TypeS2,
}

impl FlatModel {
    /// Number of flat models.
    pub const COUNT: usize = 10;

    /// Every flat model.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Improved,
        Self::NewGeneration,
        Self::ModelA,
        Self::Standard,
        Self::Simplified,
        Self::Maisonette,
        Self::Apartment,
        Self::PremiumApartment,
        Self::TypeS1,
        Self::TypeS2,
    ];

    /// Display name, as used in the `flat_model_*` feature columns.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Improved => "IMPROVED",
            Self::NewGeneration => "NEW GENERATION",
            Self::ModelA => "MODEL A",
            Self::Standard => "STANDARD",
            Self::Simplified => "SIMPLIFIED",
            Self::Maisonette => "MAISONETTE",
            Self::Apartment => "APARTMENT",
            Self::PremiumApartment => "PREMIUM APARTMENT",
            Self::TypeS1 => "TYPE S1",
            Self::TypeS2 => "TYPE S2",
        }
    }
}

impl Category for FlatModel {
    const GROUP: &'static str = "flat model";
    const PREFIX: &'static str = "flat_model_";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn name(&self) -> &'static str {
        Self::name(self)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FlatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
