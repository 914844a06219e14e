//! Nominal orbit layout
//!
//! Catalogue systems place planets on evenly spaced orbits and derive the
//! period with a Kepler-like scaling against a 365-day year. The scaling is not
//! calibrated to the host star's mass.

use units::{Length, Time, round_to};

/// Orbit of the innermost slot (AU)
pub const INNER_ORBIT_AU: f64 = 0.4;

/// Spacing between neighbouring slots (AU)
pub const ORBIT_SPACING_AU: f64 = 0.4;

/// Length of the reference year used by the period scaling (days)
pub const NOMINAL_YEAR_DAYS: f64 = 365.0;

/// Orbital radius of a given slot: `0.4 + 0.4·slot` AU, rounded to 2dp
pub fn nominal_orbit(slot: u32) -> Length {
    Length::from_au(round_to(
        INNER_ORBIT_AU + ORBIT_SPACING_AU * f64::from(slot),
        2,
    ))
}

/// Orbital period for a semi-major axis: `365·a^1.5` days, rounded to 1dp
pub fn nominal_period(semi_major_axis: Length) -> Time {
    Time::from_days(round_to(
        NOMINAL_YEAR_DAYS * semi_major_axis.powf(1.5),
        1,
    ))
}
