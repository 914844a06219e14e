use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Length, Temperature};

/// Broad stellar category shown in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StarType {
    YellowDwarf,
    RedGiant,
    WhiteDwarf,
    /// Unrecognized label, preserved as written
    Other(String),
}

impl StarType {
    pub const KNOWN: [StarType; 3] = [
        StarType::YellowDwarf,
        StarType::RedGiant,
        StarType::WhiteDwarf,
    ];

    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "yellow dwarf" => Self::YellowDwarf,
            "red giant" => Self::RedGiant,
            "white dwarf" => Self::WhiteDwarf,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::YellowDwarf => "yellow dwarf",
            Self::RedGiant => "red giant",
            Self::WhiteDwarf => "white dwarf",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for StarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for StarType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<StarType> for String {
    fn from(star_type: StarType) -> Self {
        star_type.label().to_string()
    }
}

/// The central star of a system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub name: String,
    pub star_type: StarType,
    /// Effective temperature
    pub temperature: Temperature,
    pub radius: Length,
}

impl Star {
    pub fn new(
        name: impl Into<String>,
        star_type: StarType,
        temperature_k: u32,
        radius_solar: f64,
    ) -> Self {
        Self {
            name: name.into(),
            star_type,
            temperature: Temperature::from_kelvin(f64::from(temperature_k)),
            radius: Length::from_solar_radii(radius_solar),
        }
    }

    /// Effective temperature in whole Kelvin
    pub fn temperature_k(&self) -> u32 {
        self.temperature.to_kelvin().round().max(0.0) as u32
    }

    pub fn radius_solar(&self) -> f64 {
        self.radius.to_solar_radii()
    }
}

/// Info card shown when the star is selected
impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Star: {}", self.name)?;
        writeln!(f, "Type: {}", self.star_type)?;
        writeln!(f, "Temperature: {} K", self.temperature_k())?;
        write!(f, "Radius: {:.2} R☉", self.radius_solar())
    }
}
