//! The built-in Solar System
//!
//! Used to seed an empty catalogue. Orbits follow the nominal slot layout, not
//! the real semi-major axes, so the default system renders like any generated one.

use planetary::{Atmosphere, Planet, PlanetType, nominal_orbit, nominal_period};
use units::{Length, Mass, Temperature};

use crate::star::{Star, StarType};
use crate::system::StarSystem;

pub const DEFAULT_SYSTEM_NAME: &str = "Solar System";

/// Directory holding the bundled planet images
pub const DEFAULT_IMAGE_DIR: &str = "data/planet_images";

struct SolarPlanet {
    name: &'static str,
    planet_type: PlanetType,
    temperature_c: f64,
    size_earth: f64,
    life_probability: f64,
    satellites: u32,
    atmosphere: Atmosphere,
    description: &'static str,
}

fn solar_planets() -> [SolarPlanet; 8] {
    [
        SolarPlanet {
            name: "Mercury",
            planet_type: PlanetType::Rocky,
            temperature_c: 167.0,
            size_earth: 0.38,
            life_probability: 0.0,
            satellites: 0,
            atmosphere: Atmosphere::CarbonDioxide,
            description: "The smallest planet.",
        },
        SolarPlanet {
            name: "Venus",
            planet_type: PlanetType::Rocky,
            temperature_c: 464.0,
            size_earth: 0.95,
            life_probability: 0.0,
            satellites: 0,
            atmosphere: Atmosphere::CarbonDioxide,
            description: "Dense atmosphere and scorching heat.",
        },
        SolarPlanet {
            name: "Earth",
            planet_type: PlanetType::Rocky,
            temperature_c: 15.0,
            size_earth: 1.0,
            life_probability: 100.0,
            satellites: 1,
            atmosphere: Atmosphere::NitrogenOxygen,
            description: "The only planet known to harbour life.",
        },
        SolarPlanet {
            name: "Mars",
            planet_type: PlanetType::Rocky,
            temperature_c: -60.0,
            size_earth: 0.53,
            life_probability: 10.0,
            satellites: 2,
            atmosphere: Atmosphere::CarbonDioxide,
            description: "The red planet with its dust storms.",
        },
        SolarPlanet {
            name: "Jupiter",
            planet_type: PlanetType::GasGiant,
            temperature_c: -110.0,
            size_earth: 11.2,
            life_probability: 0.0,
            satellites: 79,
            atmosphere: Atmosphere::HydrogenHelium,
            description: "The largest planet.",
        },
        SolarPlanet {
            name: "Saturn",
            planet_type: PlanetType::GasGiant,
            temperature_c: -140.0,
            size_earth: 9.45,
            life_probability: 0.0,
            satellites: 82,
            atmosphere: Atmosphere::HydrogenHelium,
            description: "Famous for its rings.",
        },
        SolarPlanet {
            name: "Uranus",
            planet_type: PlanetType::Icy,
            temperature_c: -195.0,
            size_earth: 4.0,
            life_probability: 0.0,
            satellites: 27,
            atmosphere: Atmosphere::HydrogenHelium,
            description: "A planet that spins on its side.",
        },
        SolarPlanet {
            name: "Neptune",
            planet_type: PlanetType::Icy,
            temperature_c: -200.0,
            size_earth: 3.88,
            life_probability: 0.0,
            satellites: 14,
            atmosphere: Atmosphere::HydrogenHelium,
            description: "The most distant planet.",
        },
    ]
}

/// Build the default Solar System with images resolved under `image_dir`
pub fn solar_system(image_dir: &str) -> StarSystem {
    let star = Star::new("Sun", StarType::YellowDwarf, 5778, 1.0);
    let image_dir = image_dir.trim_end_matches('/');

    let planets = (0u32..)
        .zip(solar_planets())
        .map(|(slot, p)| {
            let orbit = nominal_orbit(slot);
            Planet::new(p.name, orbit)
                .with_slot(slot)
                .with_temperature(Temperature::from_celsius(p.temperature_c))
                .with_radius(Length::from_earth_radii(p.size_earth))
                .with_mass(Mass::from_earth_masses(p.size_earth))
                .with_orbital_period(nominal_period(orbit))
                .with_type(p.planet_type)
                .with_atmosphere(p.atmosphere)
                .with_life_probability(p.life_probability)
                .with_satellites(p.satellites)
                .with_image(Some(format!(
                    "{image_dir}/{}.png",
                    p.name.to_lowercase()
                )))
                .with_description(p.description)
        })
        .collect();

    StarSystem::new(DEFAULT_SYSTEM_NAME, star, planets)
}
