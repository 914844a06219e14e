//! Raw table records
//!
//! Rows mirror the table columns one to one. They are what the store reads and
//! writes; conversion to and from the domain types happens here.

use rusqlite::Row;
use serde::Serialize;
use units::{Length, Mass, Temperature, Time};

use planetary::{Atmosphere, Planet, PlanetType};
use star_system::{Star, StarSystem, StarType};

/// One row of the `systems` table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRow {
    pub id: i64,
    pub name: String,
    pub star_name: String,
    pub star_type: String,
    pub star_temperature: f64,
    pub star_radius: f64,
    pub planet_count: i64,
}

impl SystemRow {
    /// Row for a system that has not been inserted yet (`id` is 0)
    pub fn from_system(system: &StarSystem) -> Self {
        Self {
            id: 0,
            name: system.name.clone(),
            star_name: system.star.name.clone(),
            star_type: system.star.star_type.label().to_string(),
            star_temperature: f64::from(system.star.temperature_k()),
            star_radius: system.star.radius_solar(),
            planet_count: i64::try_from(system.planet_count()).unwrap_or(i64::MAX),
        }
    }

    pub(crate) fn from_sql(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            star_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            star_type: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            star_temperature: row.get::<_, Option<f64>>(4)?.unwrap_or_default(),
            star_radius: row.get::<_, Option<f64>>(5)?.unwrap_or_default(),
            planet_count: row.get::<_, Option<i64>>(6)?.unwrap_or_default(),
        })
    }

    pub fn to_star(&self) -> Star {
        let temperature_k = self.star_temperature.round().clamp(0.0, f64::from(u32::MAX)) as u32;
        Star::new(
            self.star_name.clone(),
            StarType::from_label(&self.star_type),
            temperature_k,
            self.star_radius,
        )
    }
}

/// One row of the `planets` table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRow {
    pub id: i64,
    pub system_name: String,
    pub name: String,
    pub temperature_c: f64,
    pub size_earth: f64,
    pub mass_earth: f64,
    pub orbital_radius_au: f64,
    pub orbital_period_days: f64,
    pub planet_type: String,
    pub atmosphere: String,
    pub life_probability: f64,
    pub satellites: i64,
    pub image_path: Option<String>,
    pub description: String,
    pub slot: i64,
}

impl PlanetRow {
    pub fn from_planet(system_name: &str, planet: &Planet) -> Self {
        Self {
            id: 0,
            system_name: system_name.to_string(),
            name: planet.name.clone(),
            temperature_c: planet.temperature_c(),
            size_earth: planet.size_earth(),
            mass_earth: planet.mass_earth(),
            orbital_radius_au: planet.orbital_radius_au(),
            orbital_period_days: planet.orbital_period_days(),
            planet_type: planet.planet_type.label().to_string(),
            atmosphere: planet.atmosphere.label().to_string(),
            life_probability: planet.life_probability,
            satellites: i64::from(planet.satellites),
            image_path: planet.image_path.clone(),
            description: planet.description.clone(),
            slot: i64::from(planet.slot),
        }
    }

    pub(crate) fn from_sql(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            system_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            temperature_c: row.get::<_, Option<f64>>(3)?.unwrap_or_default(),
            size_earth: row.get::<_, Option<f64>>(4)?.unwrap_or_default(),
            mass_earth: row.get::<_, Option<f64>>(5)?.unwrap_or_default(),
            orbital_radius_au: row.get::<_, Option<f64>>(6)?.unwrap_or_default(),
            orbital_period_days: row.get::<_, Option<f64>>(7)?.unwrap_or_default(),
            planet_type: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
            atmosphere: row.get::<_, Option<String>>(9)?.unwrap_or_default(),
            life_probability: row.get::<_, Option<f64>>(10)?.unwrap_or_default(),
            satellites: row.get::<_, Option<i64>>(11)?.unwrap_or_default(),
            image_path: row.get(12)?,
            description: row.get::<_, Option<String>>(13)?.unwrap_or_default(),
            slot: row.get(14)?,
        })
    }

    pub fn to_planet(&self) -> Planet {
        Planet::new(self.name.clone(), Length::from_au(self.orbital_radius_au))
            .with_slot(saturating_u32(self.slot))
            .with_temperature(Temperature::from_celsius(self.temperature_c))
            .with_radius(Length::from_earth_radii(self.size_earth))
            .with_mass(Mass::from_earth_masses(self.mass_earth))
            .with_orbital_period(Time::from_days(self.orbital_period_days))
            .with_type(PlanetType::from_label(&self.planet_type))
            .with_atmosphere(Atmosphere::from_label(&self.atmosphere))
            .with_life_probability(self.life_probability)
            .with_satellites(saturating_u32(self.satellites))
            .with_image(self.image_path.clone())
            .with_description(self.description.clone())
    }
}

fn saturating_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Full contents of both tables, in row id order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreSnapshot {
    pub systems: Vec<SystemRow>,
    pub planets: Vec<PlanetRow>,
}
