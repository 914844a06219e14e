//! Planet catalogue record
//!
//! Physical quantities are stored as `units` newtypes; the `*_c`, `*_earth`,
//! `*_au` and `*_days` accessors read them back in catalogue units.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::{Length, Mass, Temperature, Time};

use crate::atmosphere::Atmosphere;
use crate::orbit::nominal_period;
use crate::planet_type::PlanetType;

/// Upper bound of `life_probability` (percent)
pub const MAX_LIFE_PROBABILITY: f64 = 100.0;

/// Violated planet invariant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanetError {
    #[error("life probability {0} is outside 0..=100")]
    LifeProbabilityOutOfRange(f64),
    #[error("orbital radius must be positive, got {0} AU")]
    NonPositiveOrbit(f64),
}

/// A catalogued planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub name: String,
    /// Orbit position, 0 = innermost
    pub slot: u32,
    /// Mean surface temperature
    pub temperature: Temperature,
    /// Planet radius
    pub radius: Length,
    pub mass: Mass,
    /// Orbital semi-major axis
    pub semi_major_axis: Length,
    pub orbital_period: Time,
    pub planet_type: PlanetType,
    pub atmosphere: Atmosphere,
    /// Chance of life in percent (0-100)
    pub life_probability: f64,
    pub satellites: u32,
    /// Image shown for the planet; a missing file is rendered as a placeholder
    pub image_path: Option<String>,
    pub description: String,
}

impl Planet {
    /// Create an Earth-sized rocky planet at the given orbit
    ///
    /// The orbital period is derived from `semi_major_axis`; everything else
    /// starts at Earth-like defaults and is refined with the `with_*` builders.
    pub fn new(name: impl Into<String>, semi_major_axis: Length) -> Self {
        Self {
            name: name.into(),
            slot: 0,
            temperature: Temperature::from_celsius(15.0),
            radius: Length::from_earth_radii(1.0),
            mass: Mass::from_earth_masses(1.0),
            semi_major_axis,
            orbital_period: nominal_period(semi_major_axis),
            planet_type: PlanetType::Rocky,
            atmosphere: Atmosphere::NitrogenOxygen,
            life_probability: 0.0,
            satellites: 0,
            image_path: None,
            description: String::new(),
        }
    }

    pub fn with_slot(mut self, slot: u32) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_radius(mut self, radius: Length) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_mass(mut self, mass: Mass) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_orbital_period(mut self, period: Time) -> Self {
        self.orbital_period = period;
        self
    }

    pub fn with_type(mut self, planet_type: PlanetType) -> Self {
        self.planet_type = planet_type;
        self
    }

    pub fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    pub fn with_life_probability(mut self, percent: f64) -> Self {
        self.life_probability = percent;
        self
    }

    pub fn with_satellites(mut self, satellites: u32) -> Self {
        self.satellites = satellites;
        self
    }

    pub fn with_image(mut self, image_path: Option<String>) -> Self {
        self.image_path = image_path.filter(|p| !p.is_empty());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), PlanetError> {
        if !(0.0..=MAX_LIFE_PROBABILITY).contains(&self.life_probability) {
            return Err(PlanetError::LifeProbabilityOutOfRange(self.life_probability));
        }
        let orbit_au = self.semi_major_axis.to_au();
        if orbit_au.is_nan() || orbit_au <= 0.0 {
            return Err(PlanetError::NonPositiveOrbit(orbit_au));
        }
        Ok(())
    }

    /// Rewrite `description` from the planet type, temperature and atmosphere
    pub fn generate_description(&mut self) {
        self.description = describe(&self.planet_type, self.temperature, &self.atmosphere);
    }

    /// Reassign the image; an empty path clears it
    pub fn set_image(&mut self, image_path: Option<String>) {
        self.image_path = image_path.filter(|p| !p.is_empty());
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature.to_celsius()
    }

    pub fn size_earth(&self) -> f64 {
        self.radius.to_earth_radii()
    }

    pub fn mass_earth(&self) -> f64 {
        self.mass.to_earth_masses()
    }

    pub fn orbital_radius_au(&self) -> f64 {
        self.semi_major_axis.to_au()
    }

    pub fn orbital_period_days(&self) -> f64 {
        self.orbital_period.to_days()
    }

    /// Image path as written to CSV files (empty when unset)
    pub fn image_label(&self) -> &str {
        self.image_path.as_deref().unwrap_or("")
    }
}

/// Description text for a planet of the given type, temperature and atmosphere
///
/// ```
/// use planetary::{Atmosphere, PlanetType, planet::describe};
/// use units::Temperature;
///
/// let text = describe(&PlanetType::Icy, Temperature::from_celsius(-195.0), &Atmosphere::HydrogenHelium);
/// assert_eq!(
///     text,
///     "A cold planet with a frozen surface. Average temperature: -195.0°C. Atmosphere: H2-He."
/// );
/// ```
pub fn describe(planet_type: &PlanetType, temperature: Temperature, atmosphere: &Atmosphere) -> String {
    format!(
        "{} Average temperature: {:.1}°C. Atmosphere: {}.",
        planet_type.blurb(),
        temperature.to_celsius(),
        atmosphere
    )
}

/// Info card shown when a planet is selected
impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Type: {}", self.planet_type)?;
        writeln!(f, "Temperature: {:.1} °C", self.temperature_c())?;
        writeln!(f, "Radius: {:.2} R⊕", self.size_earth())?;
        writeln!(f, "Mass: {:.2} M⊕", self.mass_earth())?;
        writeln!(f, "Orbital radius: {:.3} AU", self.orbital_radius_au())?;
        writeln!(f, "Orbital period: {:.1} days", self.orbital_period_days())?;
        writeln!(f, "Atmosphere: {}", self.atmosphere)?;
        writeln!(f, "Life probability: {:.1}%", self.life_probability)?;
        writeln!(f, "Satellites: {}", self.satellites)?;
        write!(f, "Description: {}", self.description)
    }
}
