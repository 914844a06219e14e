mod tests {
    use approx::assert_relative_eq;

    use crate::length::{AU_TO_EARTH_RADIUS, Length, LengthUnit};

    #[test]
    fn test_length_conversions() {
        let orbit = Length::from_au(1.0);
        assert_relative_eq!(orbit.to_earth_radii(), AU_TO_EARTH_RADIUS, epsilon = 1e-6);

        // The Sun is ~109 Earth radii
        let sun = Length::from_solar_radii(1.0);
        assert!(sun.to_earth_radii() > 108.0 && sun.to_earth_radii() < 110.0);
        assert_relative_eq!(sun.to_au(), 1.0 / 215.032, epsilon = 1e-12);
    }

    #[test]
    fn test_catalogue_units_read_back_exactly() {
        for size in [1.57, 0.38, 11.2, 9.45, 3.88] {
            assert_eq!(Length::from_earth_radii(size).to_earth_radii(), size);
        }
        for radius in [1.49, 1.237, 0.51] {
            assert_eq!(Length::from_solar_radii(radius).to_solar_radii(), radius);
        }
        assert_eq!(Length::from_au(2.8).to_au(), 2.8);
        assert_eq!(Length::from_earth_radii(2.0).unit(), LengthUnit::EarthRadius);
    }

    #[test]
    fn test_length_compares_across_units() {
        let orbit = Length::from_au(0.4);
        let planet = Length::from_earth_radii(11.2);
        let star = Length::from_solar_radii(1.0);

        assert!(planet < star);
        assert!(star < orbit);
        assert_eq!(Length::from_au(1.0), Length::from_au(1.0));
        assert_ne!(Length::from_earth_radii(1.0), Length::from_earth_radii(1.01));
    }

    #[test]
    fn test_length_powf() {
        assert_relative_eq!(Length::from_au(4.0).powf(1.5), 8.0);
    }
}
