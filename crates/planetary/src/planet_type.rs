//! Planet type categories
//!
//! The catalogue knows five planet types. Labels read back from CSV files or
//! the store that do not match one of them are kept verbatim in `Other`, so a
//! foreign category survives a round trip untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Observable planet category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanetType {
    /// Solid silicate/metal surface (Mercury, Venus, Earth, Mars)
    Rocky,
    /// Deep hydrogen/helium envelope (Jupiter, Saturn)
    GasGiant,
    /// Frozen volatiles dominate (Uranus, Neptune)
    Icy,
    /// Dry surface under a thin atmosphere
    Desert,
    /// Global surface ocean
    Oceanic,
    /// Unrecognized label, preserved as written
    Other(String),
}

impl PlanetType {
    /// Every known category, in generator order
    pub const KNOWN: [PlanetType; 5] = [
        PlanetType::Rocky,
        PlanetType::GasGiant,
        PlanetType::Icy,
        PlanetType::Desert,
        PlanetType::Oceanic,
    ];

    /// Parse a category label; matching is case-insensitive and trims whitespace
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "rocky" => Self::Rocky,
            "gas giant" => Self::GasGiant,
            "icy" => Self::Icy,
            "desert" => Self::Desert,
            "oceanic" => Self::Oceanic,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Catalogue label written to CSV files and the store
    pub fn label(&self) -> &str {
        match self {
            Self::Rocky => "rocky",
            Self::GasGiant => "gas giant",
            Self::Icy => "icy",
            Self::Desert => "desert",
            Self::Oceanic => "oceanic",
            Self::Other(label) => label,
        }
    }

    /// Opening sentence of a generated planet description
    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Rocky => "A solid planet with a massive surface.",
            Self::GasGiant => "An enormous world wrapped in a powerful atmosphere.",
            Self::Icy => "A cold planet with a frozen surface.",
            Self::Desert => "A dry world with a sparse atmosphere.",
            Self::Oceanic => "A planet covered by water.",
            Self::Other(_) => "An unusual world full of mysteries.",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for PlanetType {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<String> for PlanetType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<PlanetType> for String {
    fn from(planet_type: PlanetType) -> Self {
        planet_type.label().to_string()
    }
}
