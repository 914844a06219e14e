use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::names::{
    CATALOGUE_PREFIXES, PLANET_PREFIXES, PLANET_SUFFIXES, STAR_NAMES, planet_name, star_name,
    system_name,
};

#[test]
fn test_planet_name_shape() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..500 {
        let name = planet_name(&mut rng);
        let prefix = PLANET_PREFIXES
            .iter()
            .find(|p| name.starts_with(*p))
            .unwrap();
        let rest = &name[prefix.len()..];
        let digits_at = rest
            .char_indices()
            .rfind(|(_, c)| !c.is_ascii_digit())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap();
        let (suffix, number) = rest.split_at(digits_at);

        assert!(PLANET_SUFFIXES.contains(&suffix), "suffix {suffix} in {name}");
        let number: u32 = number.parse().unwrap();
        assert!((1..=999).contains(&number));
    }
}

#[test]
fn test_system_name_shape() {
    let mut rng = ChaChaRng::seed_from_u64(3);

    for _ in 0..500 {
        let name = system_name(&mut rng);
        let (prefix, number) = name.split_once('-').unwrap();

        assert!(CATALOGUE_PREFIXES.contains(&prefix));
        let number: u32 = number.parse().unwrap();
        assert!((10..=999).contains(&number));
    }
}

#[test]
fn test_star_names_come_from_fixed_set() {
    let mut rng = ChaChaRng::seed_from_u64(8);

    for _ in 0..100 {
        assert!(STAR_NAMES.contains(&star_name(&mut rng).as_str()));
    }
}
