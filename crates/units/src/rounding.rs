/// Round `value` to `decimals` places after the decimal point.
///
/// Ties round away from zero, so `round_to(2.345, 2)` gives `2.35` when the
/// binary value sits on or above the midpoint.
///
/// ```rust
/// use units::round_to;
///
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(-7.25, 1), -7.3);
/// assert_eq!(round_to(12.0, 3), 12.0);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
