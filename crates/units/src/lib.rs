pub mod length;
pub mod mass;
pub mod rounding;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;

pub use length::{Length, LengthUnit};
pub use mass::Mass;
pub use rounding::round_to;
pub use temperature::Temperature;
pub use time::Time;
