//! Random star-system generation
//!
//! Systems are drawn from a `ChaChaRng`, so a generator built from a fixed
//! seed always produces the same sequence of systems.

pub mod generation;
pub mod images;
pub mod names;

// Re-export main generation types
pub use generation::{DEFAULT_MAX_PLANETS, DEFAULT_MIN_PLANETS, GeneratorError, SystemGenerator};
pub use images::{FALLBACK_IMAGE, ImagePool, STOCK_IMAGES};

#[cfg(test)]
mod images_test;
#[cfg(test)]
mod names_test;
