use crate::planet_type::PlanetType;

#[test]
fn test_label_round_trip() {
    for planet_type in PlanetType::KNOWN {
        assert_eq!(PlanetType::from_label(planet_type.label()), planet_type);
    }
}

#[test]
fn test_label_parsing_is_lenient() {
    assert_eq!(PlanetType::from_label("  Gas Giant "), PlanetType::GasGiant);
    assert_eq!(PlanetType::from_label("ROCKY"), PlanetType::Rocky);
    assert_eq!(
        PlanetType::from_label("Lava World"),
        PlanetType::Other("Lava World".to_string())
    );
    assert_eq!(PlanetType::from_label("Lava World").label(), "Lava World");
}

#[test]
fn test_display_matches_label() {
    assert_eq!(PlanetType::GasGiant.to_string(), "gas giant");
    assert_eq!(String::from(PlanetType::Oceanic), "oceanic");
}
