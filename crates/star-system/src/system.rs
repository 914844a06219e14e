//! Star system structure

use serde::{Deserialize, Serialize};
use units::Temperature;

use planetary::Planet;

use crate::solar::DEFAULT_SYSTEM_NAME;
use crate::star::Star;

/// One star plus its planets, innermost first
///
/// The system name is the catalogue key: the store and the manager both keep
/// at most one system per name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub name: String,
    pub star: Star,
    /// Planets sorted by slot
    pub planets: Vec<Planet>,
}

impl StarSystem {
    /// Create a new star system
    ///
    /// Planets are sorted by slot. The sort is stable, so planets sharing a
    /// slot keep the order they were given in.
    pub fn new(name: impl Into<String>, star: Star, mut planets: Vec<Planet>) -> Self {
        planets.sort_by_key(|p| p.slot);
        Self {
            name: name.into(),
            star,
            planets,
        }
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn planet(&self, index: usize) -> Option<&Planet> {
        self.planets.get(index)
    }

    pub fn planet_mut(&mut self, index: usize) -> Option<&mut Planet> {
        self.planets.get_mut(index)
    }

    /// Mean planet temperature, `None` for a system without planets
    pub fn average_temperature(&self) -> Option<Temperature> {
        Temperature::mean(self.planets.iter().map(|p| p.temperature))
    }

    /// Total number of moons across all planets
    pub fn total_satellites(&self) -> u32 {
        self.planets.iter().map(|p| p.satellites).sum()
    }

    /// Whether this is the built-in Solar System (name match, case-insensitive)
    pub fn is_default(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case(DEFAULT_SYSTEM_NAME)
    }

    /// Star info card followed by the owning system
    pub fn star_info(&self) -> String {
        format!(
            "{}\nSystem: {}\n\nCentral source of light and heat.",
            self.star, self.name
        )
    }
}
