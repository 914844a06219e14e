use serde::{Deserialize, Serialize};

/// A physical time quantity using f64 precision.
///
/// Days are the base unit, matching how orbital periods are catalogued.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let period = Time::from_days(687.0);
/// assert_eq!(period.to_days(), 687.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: days

impl Time {
    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value)
    }

    /// Returns the time in days.
    pub fn to_days(&self) -> f64 {
        self.0
    }
}
