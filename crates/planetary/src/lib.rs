//! Planet records for the star system catalogue
//!
//! A planet is a flat bag of catalogue attributes: physical quantities carried
//! as `units` newtypes, two category labels (type and atmosphere) and a
//! free-form description that can be regenerated from those categories.

pub mod atmosphere;
pub mod orbit;
pub mod planet;
pub mod planet_type;

// Re-export key types at crate root
pub use atmosphere::Atmosphere;
pub use orbit::{nominal_orbit, nominal_period};
pub use planet::{Planet, PlanetError};
pub use planet_type::PlanetType;

#[cfg(test)]
mod planet_type_test;
