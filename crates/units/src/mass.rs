use serde::{Deserialize, Serialize};

/// A physical mass quantity using f64 precision.
///
/// Earth masses are the base unit: every planet in the catalogue is sized
/// against Earth, so values read back in M⊕ are exact.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let mass = Mass::from_earth_masses(3.88);
/// assert_eq!(mass.to_earth_masses(), 3.88);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Earth masses

impl Mass {
    /// Creates a new `Mass` from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value)
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0
    }
}
