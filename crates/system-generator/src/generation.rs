//! Star-system generation
//!
//! Planets sit on the nominal slot layout (`0.4 + 0.4·i` AU) and get cooler
//! with distance. Every other attribute is drawn uniformly from a fixed range:
//!
//! | Attribute          | Range                          | Rounding |
//! |--------------------|--------------------------------|----------|
//! | temperature        | `300 − r·U(25, 60)` °C         | 1dp      |
//! | size               | `U(0.3, 10.0)` R⊕              | 2dp      |
//! | mass               | `size · U(0.5, 2.5)` M⊕        | 2dp      |
//! | life probability   | `U(0, 80)` %                   | 1dp      |
//! | satellites         | `0..=5`                        |          |
//! | star temperature   | `3000..=10000` K               |          |
//! | star radius        | `U(0.5, 2.5)` R☉               | 2dp      |

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use thiserror::Error;
use tracing::debug;
use units::{Length, Mass, Temperature, round_to};
use uuid::Uuid;

use planetary::{Atmosphere, Planet, PlanetType, nominal_orbit, nominal_period};
use star_system::{DEFAULT_IMAGE_DIR, Star, StarSystem};

use crate::images::ImagePool;
use crate::names;

pub const DEFAULT_MIN_PLANETS: usize = 4;
pub const DEFAULT_MAX_PLANETS: usize = 8;

/// Temperature at the star, before distance cooling (°C)
const BASE_TEMPERATURE_C: f64 = 300.0;
/// Cooling per AU of orbital radius (°C)
const COOLING_PER_AU: (f64, f64) = (25.0, 60.0);
const SIZE_EARTH: (f64, f64) = (0.3, 10.0);
/// Mass-to-size ratio
const DENSITY_FACTOR: (f64, f64) = (0.5, 2.5);
const LIFE_PROBABILITY: (f64, f64) = (0.0, 80.0);
const MAX_SATELLITES: u32 = 5;
const STAR_TEMPERATURE_K: (u32, u32) = (3000, 10000);
const STAR_RADIUS_SOLAR: (f64, f64) = (0.5, 2.5);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("invalid planet range: min {min} is greater than max {max}")]
    InvalidPlanetRange { min: usize, max: usize },
}

/// Seeded source of random star systems
///
/// # Example
/// ```
/// use system_generator::SystemGenerator;
///
/// let mut first = SystemGenerator::from_seed(42);
/// let mut second = SystemGenerator::from_seed(42);
/// assert_eq!(first.generate(), second.generate());
/// ```
#[derive(Debug, Clone)]
pub struct SystemGenerator {
    rng: ChaChaRng,
    image_dir: String,
}

impl SystemGenerator {
    /// Generator with a fixed seed; the same seed yields the same systems
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaChaRng::seed_from_u64(seed),
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
        }
    }

    /// Generator seeded from a random UUID
    pub fn from_entropy() -> Self {
        let seed = Uuid::new_v4().as_u64_pair().0;
        Self::from_seed(seed)
    }

    /// Resolve planet images under `image_dir` instead of the bundled directory
    pub fn with_image_dir(mut self, image_dir: impl Into<String>) -> Self {
        self.image_dir = image_dir.into();
        self
    }

    pub fn image_dir(&self) -> &str {
        &self.image_dir
    }

    /// Generate a system with the default 4 to 8 planets
    pub fn generate(&mut self) -> StarSystem {
        let count = self
            .rng
            .random_range(DEFAULT_MIN_PLANETS..=DEFAULT_MAX_PLANETS);
        self.build_system(count)
    }

    /// Generate a system with a planet count drawn uniformly from `min..=max`
    pub fn generate_random_system(
        &mut self,
        min_planets: usize,
        max_planets: usize,
    ) -> Result<StarSystem, GeneratorError> {
        if min_planets > max_planets {
            return Err(GeneratorError::InvalidPlanetRange {
                min: min_planets,
                max: max_planets,
            });
        }
        let count = self.rng.random_range(min_planets..=max_planets);
        Ok(self.build_system(count))
    }

    fn build_system(&mut self, count: usize) -> StarSystem {
        let mut images = ImagePool::new(&self.image_dir);
        let planets = (0u32..)
            .take(count)
            .map(|slot| self.generate_planet(slot, &mut images))
            .collect();

        let name = names::system_name(&mut self.rng);
        let star = self.generate_star();
        debug!(system = %name, planets = count, "generated star system");

        StarSystem::new(name, star, planets)
    }

    fn generate_star(&mut self) -> Star {
        let rng = &mut self.rng;
        let name = names::star_name(rng);
        let star_type = names::star_type(rng);
        let temperature_k = rng.random_range(STAR_TEMPERATURE_K.0..=STAR_TEMPERATURE_K.1);
        let radius = round_to(
            rng.random_range(STAR_RADIUS_SOLAR.0..STAR_RADIUS_SOLAR.1),
            2,
        );
        Star::new(name, star_type, temperature_k, radius)
    }

    fn generate_planet(&mut self, slot: u32, images: &mut ImagePool) -> Planet {
        let rng = &mut self.rng;
        let orbit = nominal_orbit(slot);
        let orbit_au = orbit.to_au();

        let cooling = rng.random_range(COOLING_PER_AU.0..COOLING_PER_AU.1);
        let temperature_c = round_to(BASE_TEMPERATURE_C - orbit_au * cooling, 1);
        let size = round_to(rng.random_range(SIZE_EARTH.0..SIZE_EARTH.1), 2);
        let planet_type = PlanetType::KNOWN[rng.random_range(0..PlanetType::KNOWN.len())].clone();
        let atmosphere = Atmosphere::KNOWN[rng.random_range(0..Atmosphere::KNOWN.len())].clone();
        let mass = round_to(size * rng.random_range(DENSITY_FACTOR.0..DENSITY_FACTOR.1), 2);
        let life = round_to(rng.random_range(LIFE_PROBABILITY.0..LIFE_PROBABILITY.1), 1);
        let satellites = rng.random_range(0..=MAX_SATELLITES);
        let name = names::planet_name(rng);

        let mut planet = Planet::new(name, orbit)
            .with_slot(slot)
            .with_temperature(Temperature::from_celsius(temperature_c))
            .with_radius(Length::from_earth_radii(size))
            .with_mass(Mass::from_earth_masses(mass))
            .with_orbital_period(nominal_period(orbit))
            .with_type(planet_type)
            .with_atmosphere(atmosphere)
            .with_life_probability(life)
            .with_satellites(satellites)
            .with_image(Some(images.next_image()));
        planet.generate_description();
        planet
    }
}
