mod tests {
    use crate::mass::Mass;

    #[test]
    fn test_earth_masses_are_exact() {
        let mass = Mass::from_earth_masses(3.88);
        assert_eq!(mass.to_earth_masses(), 3.88);
        assert!(Mass::from_earth_masses(0.5) < mass);
    }
}
