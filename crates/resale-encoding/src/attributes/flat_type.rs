//! Flat types (room counts).

use super::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HDB flat type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlatType {
    /// 1-room flat
    #[serde(rename = "1 ROOM")]
    OneRoom,

    /// 2-room flat
    #[serde(rename = "2 ROOM")]
    TwoRoom,

    /// 3-room flat
    #[serde(rename = "3 ROOM")]
    ThreeRoom,

    /// 4-room flat
    #[serde(rename = "4 ROOM")]
    FourRoom,

    /// 5-room flat
    #[serde(rename = "5 ROOM")]
    FiveRoom,

    /// Executive flat
    #[serde(rename = "EXECUTIVE")]
    Executive,

    /// Multi-generation flat
    #[serde(rename = "MULTI GENERATION")]
    MultiGeneration,
}

impl FlatType {
    /// Number of flat types.
    pub const COUNT: usize = 7;

    /// Every flat type, smallest first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::OneRoom,
        Self::TwoRoom,
        Self::ThreeRoom,
        Self::FourRoom,
        Self::FiveRoom,
        Self::Executive,
        Self::MultiGeneration,
    ];

    /// Display name, as used in the `flat_type_*` feature columns.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OneRoom => "1 ROOM",
            Self::TwoRoom => "2 ROOM",
            Self::ThreeRoom => "3 ROOM",
            Self::FourRoom => "4 ROOM",
            Self::FiveRoom => "5 ROOM",
            Self::Executive => "EXECUTIVE",
            Self::MultiGeneration => "MULTI GENERATION",
        }
    }
}

impl Category for FlatType {
    const GROUP: &'static str = "flat type";
    const PREFIX: &'static str = "flat_type_";

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

impl fmt::Display for FlatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
