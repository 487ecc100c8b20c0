//! Two-point linear interpolation on unevenly spaced abscissae.

/// Linear interpolation (or extrapolation) through `(x1, y1)` and `(x2, y2)`.
///
/// Callers must ensure `x1 != x2`.
pub fn lerp(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}

/// Indices of the two abscissae closest to `target`, nearest first.
///
/// Distances are `|x - target|`; ties keep slice order. The second index is
/// the nearest point whose abscissa differs from the first, so the returned
/// pair always spans a non-zero interval. Returns `None` when no such pair exists.
pub fn nearest_pair(xs: &[f64], target: f64) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..xs.len()).collect();
    order.sort_by(|&a, &b| {
        let da = (xs[a] - target).abs();
        let db = (xs[b] - target).abs();
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    let first = *order.first()?;
    let second = order
        .iter()
        .skip(1)
        .copied()
        .find(|&i| xs[i] != xs[first])?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_midpoint() {
        assert!((lerp(5.0, 0.0, 0.5, 10.0, 1.0) - 0.75).abs() < 1e-12);
        assert!((lerp(5.0, 0.0, 0.0, 10.0, -0.1) + 0.05).abs() < 1e-12);
    }

    #[test]
    fn lerp_extrapolates_beyond_pair() {
        // Line through (0, 0) and (1, 2) evaluated at 3.
        assert!((lerp(3.0, 0.0, 0.0, 1.0, 2.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn nearest_pair_orders_by_distance() {
        let xs = [-4.0, 0.0, 4.0, 8.0];
        assert_eq!(nearest_pair(&xs, 5.0), Some((2, 3)));
        assert_eq!(nearest_pair(&xs, -10.0), Some((0, 1)));
    }

    #[test]
    fn nearest_pair_skips_duplicate_abscissa() {
        let xs = [2.0, 2.0, 6.0];
        assert_eq!(nearest_pair(&xs, 3.0), Some((0, 2)));
    }

    #[test]
    fn nearest_pair_none_without_spread() {
        assert_eq!(nearest_pair(&[1.0], 0.0), None);
        assert_eq!(nearest_pair(&[1.0, 1.0], 0.0), None);
        assert_eq!(nearest_pair(&[], 0.0), None);
    }
}
