/// Truncate `value` toward zero at `decimals` decimal places.
///
/// Unlike `f64::round`, this never moves a value away from zero, so
/// `truncate(459.99, 1)` is `459.9` and `truncate(-0.25, 1)` is `-0.2`.
pub fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).trunc() / factor
}

/// One-decimal truncation used for plant bounds and allocations.
pub fn truncate_mw(value: f64) -> f64 {
    truncate(value, 1)
}
