//! Atmosphere categories
//!
//! Atmospheres are classified by their dominant species. Like `PlanetType`,
//! labels outside the known set are carried through unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dominant atmospheric composition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Atmosphere {
    /// Nitrogen-oxygen, Earth-like
    NitrogenOxygen,
    /// Carbon dioxide, Venus/Mars-like
    CarbonDioxide,
    /// Hydrogen-helium, giant planet envelope
    HydrogenHelium,
    /// Methane-rich, Titan-like
    Methane,
    /// Unrecognized label, preserved as written
    Other(String),
}

impl Atmosphere {
    /// Every known atmosphere, in generator order
    pub const KNOWN: [Atmosphere; 4] = [
        Atmosphere::NitrogenOxygen,
        Atmosphere::CarbonDioxide,
        Atmosphere::HydrogenHelium,
        Atmosphere::Methane,
    ];

    /// Parse an atmosphere label (case-insensitive)
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "N2-O2" => Self::NitrogenOxygen,
            "CO2" => Self::CarbonDioxide,
            "H2-HE" => Self::HydrogenHelium,
            "METHANE" | "CH4" => Self::Methane,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Catalogue label written to CSV files and the store
    pub fn label(&self) -> &str {
        match self {
            Self::NitrogenOxygen => "N2-O2",
            Self::CarbonDioxide => "CO2",
            Self::HydrogenHelium => "H2-He",
            Self::Methane => "Methane",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for Atmosphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Atmosphere {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<String> for Atmosphere {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Atmosphere> for String {
    fn from(atmosphere: Atmosphere) -> Self {
        atmosphere.label().to_string()
    }
}
