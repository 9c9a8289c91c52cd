//! Rounding and guarded division for result figures
//!
//! Aggregation happens on unrounded values. Rounding is applied once,
//! when a figure is written into a result row.

/// Rounds half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    // Collapse -0.0 so tiny negative sums do not print as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Monetary figure, 2 decimal places
pub fn money(value: f64) -> f64 {
    round_to(value, 2)
}

/// Whole days
pub fn whole(value: f64) -> f64 {
    round_to(value, 0)
}

/// `numerator / denominator * 100` to 2 decimal places.
///
/// `None` when the denominator rounds to zero cents or either operand is
/// not finite. Sums that cancel out leave float residue such as 5.55e-17;
/// that residue prints as 0.00 and must not produce a finite percentage.
pub fn percentage(numerator: f64, denominator: f64) -> Option<f64> {
    if !denominator.is_finite() || !numerator.is_finite() || money(denominator) == 0.0 {
        return None;
    }
    let pct = numerator / denominator * 100.0;
    pct.is_finite().then(|| round_to(pct, 2))
}

/// Percent change from `previous` to `current`.
///
/// `None` when there is no previous value or it is zero.
pub fn percent_change(previous: Option<f64>, current: f64) -> Option<f64> {
    let previous = previous?;
    percentage(current - previous, previous)
}

/// Arithmetic mean, `None` for an empty input
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}
