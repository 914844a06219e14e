//! Star system records
//!
//! A star system is one star plus an ordered list of planets. Planet order is
//! the orbit order and is carried explicitly by each planet's `slot`.

pub mod solar;
pub mod star;
pub mod system;

// Re-export main types at crate root
pub use solar::{DEFAULT_IMAGE_DIR, DEFAULT_SYSTEM_NAME, solar_system};
pub use star::{Star, StarType};
pub use system::StarSystem;

// Re-export planetary types for convenience
pub use planetary::{Atmosphere, Planet, PlanetType};

#[cfg(test)]
mod solar_test;
