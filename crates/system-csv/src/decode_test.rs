use approx::assert_relative_eq;

use planetary::{Atmosphere, PlanetType};
use star_system::{DEFAULT_IMAGE_DIR, Star, StarSystem, StarType, solar_system};

use crate::decode::{SkipReason, parse, parse_report, read_from_path};
use crate::encode::{encode, write_to_path};
use crate::error::CsvError;

const PREAMBLE: &str = "\u{FEFF}SystemName;Kepler-42
StarName;Vega
StarType;white dwarf
StarTempK;9602
StarRadiusSolar;2.36
#PlanetName;Temperature_C;Size_Earth;Mass_Earth;Orbital_Radius_AU;Orbital_Period_Days;Planet_Type;Atmosphere;Life_Probability;Satellites;Sat_Names;Image_Path;Description
";

#[test]
fn test_header_only_file() {
    let system = parse(PREAMBLE).unwrap();

    assert_eq!(system.name, "Kepler-42");
    assert_eq!(system.star.name, "Vega");
    assert_eq!(system.star.star_type, StarType::WhiteDwarf);
    assert_eq!(system.star.temperature_k(), 9602);
    assert_relative_eq!(system.star.radius_solar(), 2.36, epsilon = 1e-9);
    assert_eq!(system.planet_count(), 0);
}

#[test]
fn test_planet_lines() {
    let text = format!(
        "{PREAMBLE}Ari-I5;120.5;2.5;3.75;0.4;92.3;gas giant;H2-He;0.0;3;img/a.png;Big\nZor-b9;-12;0.8;0.4;0.8;261.2;icy;methane;4.5;0\n"
    );
    let system = parse(&text).unwrap();

    assert_eq!(system.planet_count(), 2);

    let first = &system.planets[0];
    assert_eq!(first.name, "Ari-I5");
    assert_eq!(first.slot, 0);
    assert_eq!(first.planet_type, PlanetType::GasGiant);
    assert_eq!(first.atmosphere, Atmosphere::HydrogenHelium);
    assert_eq!(first.satellites, 3);
    assert_eq!(first.image_path.as_deref(), Some("img/a.png"));
    assert_eq!(first.description, "Big");
    assert_relative_eq!(first.temperature_c(), 120.5, epsilon = 1e-9);
    assert_relative_eq!(first.size_earth(), 2.5, epsilon = 1e-9);
    assert_relative_eq!(first.mass_earth(), 3.75, epsilon = 1e-9);
    assert_relative_eq!(first.orbital_period_days(), 92.3, epsilon = 1e-9);

    let second = &system.planets[1];
    assert_eq!(second.slot, 1);
    assert_eq!(second.atmosphere, Atmosphere::Methane);
    assert!(second.image_path.is_none());
    assert!(second.description.is_empty());
}

#[test]
fn test_too_few_lines() {
    let text = "SystemName;A\nStarName;B\n\n\nStarType;C\n";
    let err = parse(text).unwrap_err();

    assert!(matches!(err, CsvError::TooFewLines { found: 3 }));
}

#[test]
fn test_missing_header_values_use_defaults() {
    let text = "SystemName\nStarName\nStarType\nStarTempK\nStarRadiusSolar\n#PlanetName\n";
    let system = parse(text).unwrap();

    assert_eq!(system.name, "unnamed system");
    assert_eq!(system.star.name, "Star");
    assert_eq!(system.star.star_type, StarType::Other("unknown type".to_string()));
    assert_eq!(system.star.temperature_k(), 5778);
    assert_relative_eq!(system.star.radius_solar(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_non_numeric_star_temperature_rejected() {
    let text = PREAMBLE.replace("StarTempK;9602", "StarTempK;hot");
    let err = parse(&text).unwrap_err();

    match err {
        CsvError::InvalidHeader { field, value } => {
            assert_eq!(field, "StarTempK");
            assert_eq!(value, "hot");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_bad_rows_skipped_later_rows_kept() {
    let text = format!(
        "{PREAMBLE}Bad-1;warm;1;1;0.4;92.3;rocky;CO2;0;0\nShort;1;2;3\nGood-1;10;1;1;0.8;261.2;rocky;CO2;5;1\n"
    );
    let import = parse_report(&text).unwrap();

    assert_eq!(import.system.planet_count(), 1);
    assert_eq!(import.system.planets[0].name, "Good-1");
    assert_eq!(import.system.planets[0].slot, 0);

    assert_eq!(import.skipped.len(), 2);
    assert_eq!(import.skipped[0].line, 7);
    assert_eq!(
        import.skipped[0].reason,
        SkipReason::InvalidNumber {
            column: "Temperature_C",
            value: "warm".to_string()
        }
    );
    assert_eq!(import.skipped[1].line, 8);
    assert_eq!(import.skipped[1].reason, SkipReason::TooFewFields { found: 4 });
}

#[test]
fn test_rows_violating_invariants_skipped() {
    let text = format!(
        "{PREAMBLE}Hot;10;1;1;0.4;92.3;rocky;CO2;150;0\nFlat;10;1;1;0;0;rocky;CO2;5;0\nMoons;10;1;1;0.4;92.3;rocky;CO2;5;-2\n"
    );
    let import = parse_report(&text).unwrap();

    assert_eq!(import.system.planet_count(), 0);
    assert_eq!(import.skipped.len(), 3);
    assert!(matches!(import.skipped[0].reason, SkipReason::Invalid(_)));
    assert!(matches!(import.skipped[1].reason, SkipReason::Invalid(_)));
    assert!(matches!(
        import.skipped[2].reason,
        SkipReason::InvalidNumber { column: "Satellites", .. }
    ));
}

#[test]
fn test_fractional_satellites_truncated() {
    let text = format!("{PREAMBLE}Moony;10;1;1;0.4;92.3;rocky;CO2;5;3.0\n");
    let system = parse(&text).unwrap();

    assert_eq!(system.planets[0].satellites, 3);
}

#[test]
fn test_crlf_and_blank_lines() {
    let text = format!("{PREAMBLE}\nA;1;1;1;0.4;92.3;rocky;CO2;0;0\n\n").replace('\n', "\r\n");
    let system = parse(&text).unwrap();

    assert_eq!(system.name, "Kepler-42");
    assert_eq!(system.planet_count(), 1);
}

#[test]
fn test_round_trip_solar_system() {
    let original = solar_system(DEFAULT_IMAGE_DIR);
    let parsed = parse(&encode(&original)).unwrap();

    assert_eq!(parsed.name, original.name);
    assert_eq!(parsed.star.name, original.star.name);
    assert_eq!(parsed.star.star_type, original.star.star_type);
    assert_eq!(parsed.star.temperature_k(), original.star.temperature_k());
    assert_eq!(parsed.star.radius_solar(), original.star.radius_solar());
    assert_eq!(parsed.planet_count(), original.planet_count());

    for (p, o) in parsed.planets.iter().zip(&original.planets) {
        assert_eq!(p.name, o.name);
        assert_eq!(p.slot, o.slot);
        assert_eq!(p.planet_type, o.planet_type);
        assert_eq!(p.atmosphere, o.atmosphere);
        assert_eq!(p.satellites, o.satellites);
        assert_eq!(p.image_path, o.image_path);
        assert_eq!(p.description, o.description);
        assert_relative_eq!(p.temperature_c(), o.temperature_c(), epsilon = 0.005);
        assert_relative_eq!(p.size_earth(), o.size_earth(), epsilon = 0.005);
        assert_relative_eq!(p.orbital_radius_au(), o.orbital_radius_au(), epsilon = 0.0005);
        assert_relative_eq!(p.orbital_period_days(), o.orbital_period_days(), epsilon = 0.05);
    }
}

#[test]
fn test_round_trip_keeps_star_fields() {
    let original = StarSystem::new(
        "Tau-64",
        Star::new("Altair", StarType::RedGiant, 4321, 1.237),
        Vec::new(),
    );
    let parsed = parse(&encode(&original)).unwrap();

    assert_eq!(parsed.star, original.star);
    assert_eq!(parsed.star.radius_solar(), 1.237);
    assert_eq!(parsed.star.temperature_k(), 4321);
}

#[test]
fn test_fractional_star_temperature_rounded() {
    let text = PREAMBLE.replace("StarTempK;9602", "StarTempK;9601.6");
    let system = parse(&text).unwrap();

    assert_eq!(system.star.temperature_k(), 9602);
}

#[test]
fn test_round_trip_quoted_text() {
    let mut original = solar_system("dir;with;semicolons");
    if let Some(earth) = original.planet_mut(2) {
        earth.description = "Home \"sweet\" home;\nsecond line".to_string();
    }
    let parsed = parse(&encode(&original)).unwrap();

    assert_eq!(parsed.planets[2].description, original.planets[2].description);
    assert_eq!(parsed.planets[2].image_path, original.planets[2].image_path);
}

#[test]
fn test_read_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solar.csv");
    write_to_path(&solar_system(DEFAULT_IMAGE_DIR), &path).unwrap();

    let import = read_from_path(&path).unwrap();
    assert_eq!(import.system.planet_count(), 8);
    assert!(import.skipped.is_empty());
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_from_path(dir.path().join("absent.csv")).unwrap_err();

    assert!(matches!(err, CsvError::Io { .. }));
}
