//! Trapezoidal integration of sampled data.

/// Integrate `ys` over `xs` with the composite trapezoidal rule.
///
/// Points are taken in the given order; sort by `x` first for a signed area
/// that follows the axis direction. Fewer than two points integrate to zero.
///
/// # Panics
/// Panics if `xs` and `ys` have different lengths.
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    assert_eq!(xs.len(), ys.len(), "trapezoid: xs and ys must have equal length");
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) * 0.5)
        .sum()
}
