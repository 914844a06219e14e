use serde::{Deserialize, Serialize};

/// Offset between the Kelvin and Celsius scales
pub const CELSIUS_OFFSET: f64 = 273.15;

/// A physical temperature quantity using f64 precision.
///
/// Celsius is the base unit: planet temperatures are catalogued in °C and read
/// back exactly. Star temperatures are whole Kelvin, which survive the offset
/// once rounded.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let photosphere = Temperature::from_kelvin(5778.0);
/// let surface = Temperature::from_celsius(265.7);
///
/// assert_eq!(surface.to_celsius(), 265.7);
/// assert_eq!(photosphere.to_kelvin().round(), 5778.0);
/// assert!(photosphere > surface);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Celsius

impl Temperature {
    /// Creates a new `Temperature` from a value in Celsius.
    pub fn from_celsius(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Kelvin.
    ///
    /// Converts Kelvin to Celsius: °C = K - 273.15
    pub fn from_kelvin(value: f64) -> Self {
        Self(value - CELSIUS_OFFSET)
    }

    /// Returns the temperature value in Celsius.
    pub fn to_celsius(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Kelvin (K = °C + 273.15).
    pub fn to_kelvin(&self) -> f64 {
        self.0 + CELSIUS_OFFSET
    }

    /// Arithmetic mean of a set of temperatures, `None` when empty.
    pub fn mean<I>(temperatures: I) -> Option<Self>
    where
        I: IntoIterator<Item = Temperature>,
    {
        let (sum, count) = temperatures
            .into_iter()
            .fold((0.0, 0usize), |(sum, n), t| (sum + t.0, n + 1));
        (count > 0).then(|| Self(sum / count as f64))
    }
}
