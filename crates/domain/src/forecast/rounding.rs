//! Shared rounding rule for every derived figure

/// Round `value` to `decimals` places, halves away from zero
///
/// All summary fields go through this function so that the ordering of
/// min, average and max survives rounding.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
