use approx::assert_relative_eq;
use planetary::{Atmosphere, PlanetType};

use crate::solar::{DEFAULT_IMAGE_DIR, DEFAULT_SYSTEM_NAME, solar_system};
use crate::star::StarType;

#[test]
fn test_solar_system_star() {
    let system = solar_system(DEFAULT_IMAGE_DIR);

    assert_eq!(system.name, DEFAULT_SYSTEM_NAME);
    assert!(system.is_default());
    assert_eq!(system.star.name, "Sun");
    assert_eq!(system.star.star_type, StarType::YellowDwarf);
    assert_eq!(system.star.temperature_k(), 5778);
    assert_relative_eq!(system.star.radius_solar(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_solar_system_planets() {
    let system = solar_system(DEFAULT_IMAGE_DIR);

    let names: Vec<_> = system.planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
    );

    for (slot, planet) in (0u32..).zip(&system.planets) {
        assert_eq!(planet.slot, slot);
        assert_relative_eq!(planet.mass_earth(), planet.size_earth(), epsilon = 1e-9);
        assert!(planet.validate().is_ok());
    }
}

#[test]
fn test_earth_record() {
    let system = solar_system("assets/");
    let earth = system.planet(2).unwrap();

    assert_eq!(earth.planet_type, PlanetType::Rocky);
    assert_eq!(earth.atmosphere, Atmosphere::NitrogenOxygen);
    assert_relative_eq!(earth.temperature_c(), 15.0, epsilon = 1e-9);
    assert_relative_eq!(earth.orbital_radius_au(), 1.2, epsilon = 1e-9);
    assert_relative_eq!(earth.orbital_period_days(), 479.8, epsilon = 1e-9);
    assert_relative_eq!(earth.life_probability, 100.0);
    assert_eq!(earth.satellites, 1);
    assert_eq!(earth.image_path.as_deref(), Some("assets/earth.png"));
}

#[test]
fn test_giants_have_hydrogen_envelopes() {
    let system = solar_system(DEFAULT_IMAGE_DIR);

    for planet in &system.planets[4..] {
        assert_eq!(planet.atmosphere, Atmosphere::HydrogenHelium);
    }
    assert_eq!(system.planet(4).unwrap().planet_type, PlanetType::GasGiant);
    assert_eq!(system.planet(7).unwrap().planet_type, PlanetType::Icy);
}
