use units::{Length, Temperature};

use planetary::{Atmosphere, Planet, PlanetType};
use star_system::{DEFAULT_IMAGE_DIR, Star, StarSystem, StarType, solar_system};

use crate::encode::{encode, write_to_path};
use crate::error::CsvError;

const HEADER: &str = "#PlanetName;Temperature_C;Size_Earth;Mass_Earth;Orbital_Radius_AU;Orbital_Period_Days;Planet_Type;Atmosphere;Life_Probability;Satellites;Sat_Names;Image_Path;Description";

fn one_planet_system() -> StarSystem {
    let planet = Planet::new("Ari-b17", Length::from_au(0.4))
        .with_temperature(Temperature::from_celsius(283.456))
        .with_radius(Length::from_earth_radii(1.254))
        .with_type(PlanetType::Desert)
        .with_atmosphere(Atmosphere::CarbonDioxide)
        .with_life_probability(12.5)
        .with_satellites(2)
        .with_description("Dry; dusty \"and\" hot");
    StarSystem::new(
        "Tau-64",
        Star::new("Altair", StarType::RedGiant, 4321, 1.237),
        vec![planet],
    )
}

#[test]
fn test_encode_layout() {
    let text = encode(&one_planet_system());
    let lines: Vec<_> = text.lines().collect();

    assert!(text.starts_with('\u{FEFF}'));
    assert!(text.ends_with('\n'));
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "\u{FEFF}SystemName;Tau-64");
    assert_eq!(lines[1], "StarName;Altair");
    assert_eq!(lines[2], "StarType;red giant");
    assert_eq!(lines[3], "StarTempK;4321");
    assert_eq!(lines[4], "StarRadiusSolar;1.237");
    assert_eq!(lines[5], HEADER);
    assert_eq!(
        lines[6],
        "Ari-b17;283.46;1.25;1.00;0.400;92.3;desert;CO2;12.50;2;;\"Dry; dusty \"\"and\"\" hot\""
    );
}

#[test]
fn test_encode_solar_system_rows() {
    let text = encode(&solar_system(DEFAULT_IMAGE_DIR));
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 6 + 8);
    assert_eq!(lines[3], "StarTempK;5778");
    assert_eq!(lines[4], "StarRadiusSolar;1");
    assert_eq!(
        lines[8],
        "Earth;15.00;1.00;1.00;1.200;479.8;rocky;N2-O2;100.00;1;data/planet_images/earth.png;The only planet known to harbour life."
    );
    for line in &lines[6..] {
        assert_eq!(line.split(';').count(), 12);
    }
}

#[test]
fn test_encode_empty_system() {
    let system = StarSystem::new("Empty", Star::new("Nova", StarType::WhiteDwarf, 8000, 0.9), Vec::new());
    let text = encode(&system);

    assert_eq!(text.lines().count(), 6);
    assert_eq!(text.lines().last(), Some(HEADER));
}

#[test]
fn test_write_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tau.csv");
    let system = one_planet_system();

    write_to_path(&system, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, encode(&system));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("tau.csv");

    let err = write_to_path(&one_planet_system(), &path).unwrap_err();
    assert!(matches!(err, CsvError::Io { .. }));
}
