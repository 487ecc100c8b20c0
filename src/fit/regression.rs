//! Aerodynamic-center regression.
//!
//! About the aerodynamic center the pitching moment does not change with lift,
//! so a moment measured about the quarter chord varies linearly with `Cl`:
//!
//! ```text
//! Cm = (dCm/dCl) Cl + Cm0,    h_ac = 0.25 - dCm/dCl
//! ```
//!
//! Only samples inside the linear lift region (`angle <= cutoff`) take part.

use log::debug;

use crate::domain::{QUARTER_CHORD, RegressionResult, RegressionSums, Sample};
use crate::math::{LineSums, solve_line};

/// Fit `Cm` against `Cl` over samples with `angle_deg <= angle_cutoff`.
///
/// Returns `None` when fewer than two samples survive the filter or when all
/// surviving `Cl` values are identical.
pub fn fit(samples: &[Sample], angle_cutoff: f64) -> Option<RegressionResult> {
    let sums = linear_region_sums(samples, angle_cutoff);
    let Some(line) = solve_line(&sums) else {
        if sums.n < 2 {
            debug!("regression skipped: {} sample(s) at or below {angle_cutoff} deg", sums.n);
        } else {
            debug!("regression skipped: Cl has no spread across {} samples", sums.n);
        }
        return None;
    };

    Some(RegressionResult {
        n: sums.n,
        slope: line.slope,
        intercept: line.intercept,
        aerodynamic_center_offset: QUARTER_CHORD - line.slope,
    })
}

/// Normal-equation sums for the samples inside the linear region.
pub fn regression_sums(samples: &[Sample], angle_cutoff: f64) -> RegressionSums {
    let sums = linear_region_sums(samples, angle_cutoff);
    RegressionSums {
        n: sums.n,
        sum_cl: sums.sum_x,
        sum_cm: sums.sum_y,
        sum_cl_cm: sums.sum_xy,
        sum_cl_sq: sums.sum_xx,
    }
}

/// Partition samples into `(included, excluded)` by the angle cutoff, keeping order.
pub fn split_linear_region(samples: &[Sample], angle_cutoff: f64) -> (Vec<Sample>, Vec<Sample>) {
    samples
        .iter()
        .copied()
        .partition(|s| in_linear_region(s, angle_cutoff))
}

fn in_linear_region(sample: &Sample, angle_cutoff: f64) -> bool {
    sample.angle_deg <= angle_cutoff
}

fn linear_region_sums(samples: &[Sample], angle_cutoff: f64) -> LineSums {
    samples
        .iter()
        .filter(|s| in_linear_region(s, angle_cutoff))
        .map(|s| (s.cl, s.cm))
        .collect()
}
