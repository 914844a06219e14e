//! Name synthesis for generated systems
//!
//! Names are flavour only. Nothing guarantees uniqueness; a collision with an
//! existing catalogue entry replaces that entry when the system is stored.

use rand::Rng;
use rand_chacha::ChaChaRng;
use star_system::StarType;

pub const PLANET_PREFIXES: [&str; 13] = [
    "Ari", "Zor", "Orv", "Ke", "Tau", "Pro", "Xen", "Eri", "Vela", "Luma", "Oph", "Hydra", "Draco",
];

pub const PLANET_SUFFIXES: [&str; 11] = [
    "-I", "-II", "-III", "-Prime", "b", "c", "d", "IV", "V", "-α", "-β",
];

/// Survey prefixes used for system names
pub const CATALOGUE_PREFIXES: [&str; 9] = [
    "Kepler", "Gliese", "Tau", "HD", "Alpha", "Sigma", "Epsilon", "Zeta", "Beta",
];

pub const STAR_NAMES: [&str; 9] = [
    "Helios", "Vega", "Altair", "Rigel", "Solis", "Nova", "Aster", "Centra", "Aurion",
];

fn pick<'a>(rng: &mut ChaChaRng, options: &[&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

/// Prefix, suffix and a number in 1..=999, e.g. `Xen-Prime417`
pub fn planet_name(rng: &mut ChaChaRng) -> String {
    let prefix = pick(rng, &PLANET_PREFIXES);
    let suffix = pick(rng, &PLANET_SUFFIXES);
    let number: u32 = rng.random_range(1..=999);
    format!("{prefix}{suffix}{number}")
}

/// Catalogue prefix and a number in 10..=999, e.g. `Gliese-581`
pub fn system_name(rng: &mut ChaChaRng) -> String {
    let prefix = pick(rng, &CATALOGUE_PREFIXES);
    let number: u32 = rng.random_range(10..=999);
    format!("{prefix}-{number}")
}

pub fn star_name(rng: &mut ChaChaRng) -> String {
    pick(rng, &STAR_NAMES).to_string()
}

pub fn star_type(rng: &mut ChaChaRng) -> StarType {
    StarType::KNOWN[rng.random_range(0..StarType::KNOWN.len())].clone()
}
