use serde::{Deserialize, Serialize};

pub const AU_TO_EARTH_RADIUS: f64 = 23481.4;

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;

/// Unit a [`Length`] was created in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Au,
    EarthRadius,
    SolarRadius,
}

impl LengthUnit {
    /// Size of one unit in AU
    fn in_au(self) -> f64 {
        match self {
            Self::Au => 1.0,
            Self::EarthRadius => 1.0 / AU_TO_EARTH_RADIUS,
            Self::SolarRadius => SOLAR_RADIUS_AU,
        }
    }
}

/// A physical length quantity using f64 precision.
///
/// Orbits are catalogued in AU, planet radii in Earth radii and star radii in
/// solar radii. A `Length` keeps the value in the unit it was created in, so
/// reading it back in that unit returns exactly the catalogued number. Other
/// units are converted through AU.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.2);
/// let radius = Length::from_earth_radii(1.57);
///
/// assert!(orbit > radius);
/// assert_eq!(radius.to_earth_radii(), 1.57);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Au,
        }
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::EarthRadius,
        }
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::SolarRadius,
        }
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The value expressed in `unit`
    pub fn to_unit(&self, unit: LengthUnit) -> f64 {
        if unit == self.unit {
            self.value
        } else {
            self.value * self.unit.in_au() / unit.in_au()
        }
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.to_unit(LengthUnit::Au)
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.to_unit(LengthUnit::EarthRadius)
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.to_unit(LengthUnit::SolarRadius)
    }

    /// Power function on the AU value
    pub fn powf(&self, n: f64) -> f64 {
        self.to_au().powf(n)
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        if self.unit == other.unit {
            self.value == other.value
        } else {
            self.to_au() == other.to_au()
        }
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.unit == other.unit {
            self.value.partial_cmp(&other.value)
        } else {
            self.to_au().partial_cmp(&other.to_au())
        }
    }
}
