//! HDB towns.

use super::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 26 HDB towns the price model knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Town {
    /// Ang Mo Kio
    #[serde(rename = "ANG MO KIO")]
    AngMoKio,

    /// Bedok
    #[serde(rename = "BEDOK")]
    Bedok,

    /// Bishan
    #[serde(rename = "BISHAN")]
    Bishan,

    /// Bukit Batok
    #[serde(rename = "BUKIT BATOK")]
    BukitBatok,

    /// Bukit Merah
    #[serde(rename = "BUKIT MERAH")]
    BukitMerah,

    /// Bukit Panjang
    #[serde(rename = "BUKIT PANJANG")]
    BukitPanjang,

    /// Bukit Timah
    #[serde(rename = "BUKIT TIMAH")]
    BukitTimah,

    /// Central Area
    #[serde(rename = "CENTRAL AREA")]
    CentralArea,

    /// Choa Chu Kang
    #[serde(rename = "CHOA CHU KANG")]
    ChoaChuKang,

    /// Clementi
    #[serde(rename = "CLEMENTI")]
    Clementi,

    /// Geylang
    #[serde(rename = "GEYLANG")]
    Geylang,

    /// Hougang
    #[serde(rename = "HOUGANG")]
    Hougang,

    /// Jurong East
    #[serde(rename = "JURONG EAST")]
    JurongEast,

    /// Jurong West
    #[serde(rename = "JURONG WEST")]
    JurongWest,

    /// Kallang/Whampoa
    #[serde(rename = "KALLANG/WHAMPOA")]
    KallangWhampoa,

    /// Marine Parade
    #[serde(rename = "MARINE PARADE")]
    MarineParade,

    /// Pasir Ris
    #[serde(rename = "PASIR RIS")]
    PasirRis,

    /// Punggol
    #[serde(rename = "PUNGGOL")]
    Punggol,

    /// Queenstown
    #[serde(rename = "QUEENSTOWN")]
    Queenstown,

    /// Sembawang
    #[serde(rename = "SEMBAWANG")]
    Sembawang,

    /// Sengkang
    #[serde(rename = "SENGKANG")]
    Sengkang,

    /// Serangoon
    #[serde(rename = "SERANGOON")]
    Serangoon,

    /// Tampines
    #[serde(rename = "TAMPINES")]
    Tampines,

    /// Toa Payoh
    #[serde(rename = "TOA PAYOH")]
    ToaPayoh,

    /// Woodlands
    #[serde(rename = "WOODLANDS")]
    Woodlands,

    /// Yishun
    #[serde(rename = "YISHUN")]
    Yishun,
}

impl Town {
    /// Number of towns.
    pub const COUNT: usize = 26;

    /// Every town, in alphabetical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::AngMoKio,
        Self::Bedok,
        Self::Bishan,
        Self::BukitBatok,
        Self::BukitMerah,
        Self::BukitPanjang,
        Self::BukitTimah,
        Self::CentralArea,
        Self::ChoaChuKang,
        Self::Clementi,
        Self::Geylang,
        Self::Hougang,
        Self::JurongEast,
        Self::JurongWest,
        Self::KallangWhampoa,
        Self::MarineParade,
        Self::PasirRis,
        Self::Punggol,
        Self::Queenstown,
        Self::Sembawang,
        Self::Sengkang,
        Self::Serangoon,
        Self::Tampines,
        Self::ToaPayoh,
        Self::Woodlands,
        Self::Yishun,
    ];

    /// Display name, as used in the `town_*` feature columns.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AngMoKio => "ANG MO KIO",
            Self::Bedok => "BEDOK",
            Self::Bishan => "BISHAN",
            Self::BukitBatok => "BUKIT BATOK",
            Self::BukitMerah => "BUKIT MERAH",
            Self::BukitPanjang => "BUKIT PANJANG",
            Self::BukitTimah => "BUKIT TIMAH",
            Self::CentralArea => "CENTRAL AREA",
            Self::ChoaChuKang => "CHOA CHU KANG",
            Self::Clementi => "CLEMENTI",
            Self::Geylang => "GEYLANG",
            Self::Hougang => "HOUGANG",
            Self::JurongEast => "JURONG EAST",
            Self::JurongWest => "JURONG WEST",
            Self::KallangWhampoa => "KALLANG/WHAMPOA",
            Self::MarineParade => "MARINE PARADE",
            Self::PasirRis => "PASIR RIS",
            Self::Punggol => "PUNGGOL",
            Self::Queenstown => "QUEENSTOWN",
            Self::Sembawang => "SEMBAWANG",
            Self::Sengkang => "SENGKANG",
            Self::Serangoon => "SERANGOON",
            Self::Tampines => "TAMPINES",
            Self::ToaPayoh => "TOA PAYOH",
            Self::Woodlands => "WOODLANDS",
            Self::Yishun => "YISHUN",
        }
    }
}

impl Category for Town {
    const GROUP: &'static str = "town";
    const PREFIX: &'static str = "town_";

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

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
