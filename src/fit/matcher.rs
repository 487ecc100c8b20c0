//! RMSE matching of simulated polars against an experimental polar.
//!
//! For every experimental angle we need the simulated coefficients at exactly
//! that angle. A simulated row with the same angle is used as-is; otherwise the
//! two simulated rows nearest in angle are linearly interpolated (extrapolated
//! if both lie on the same side).

use crate::domain::{ClRmseScore, PolarPoint, RmseScore, RmseWeights};
use crate::math::{lerp, nearest_pair};

/// Score a simulated polar against the experimental one on both `Cl` and `Cm`.
///
/// `combined = weights.cl * rmse_cl + weights.cm * rmse_cm`.
///
/// Returns `None` when `simulated` has fewer than two points, when
/// `experimental` is empty, or when an angle cannot be bracketed by two
/// distinct simulated angles.
pub fn score(experimental: &[PolarPoint], simulated: &[PolarPoint], weights: RmseWeights) -> Option<RmseScore> {
    let aligned = align(experimental, simulated)?;

    let rmse_cl = rmse(experimental.iter().map(|p| p.cl), aligned.iter().map(|p| p.cl));
    let rmse_cm = rmse(experimental.iter().map(|p| p.cm), aligned.iter().map(|p| p.cm));

    Some(RmseScore {
        rmse_cl,
        rmse_cm,
        combined: weights.cl * rmse_cl + weights.cm * rmse_cm,
    })
}

/// Lift-only variant of [`score`].
pub fn score_cl(experimental: &[PolarPoint], simulated: &[PolarPoint]) -> Option<ClRmseScore> {
    let aligned = align(experimental, simulated)?;
    let rmse_cl = rmse(experimental.iter().map(|p| p.cl), aligned.iter().map(|p| p.cl));
    Some(ClRmseScore { rmse_cl })
}

/// Simulated `Cl`/`Cm` at `angle_deg`: exact row if present, else interpolated.
pub fn sample_polar(simulated: &[PolarPoint], angle_deg: f64) -> Option<PolarPoint> {
    if simulated.len() < 2 {
        return None;
    }
    if let Some(exact) = simulated.iter().find(|p| p.angle_deg == angle_deg) {
        return Some(*exact);
    }

    let angles: Vec<f64> = simulated.iter().map(|p| p.angle_deg).collect();
    let (i1, i2) = nearest_pair(&angles, angle_deg)?;
    let (a, b) = (simulated[i1], simulated[i2]);
    Some(PolarPoint {
        angle_deg,
        cl: lerp(angle_deg, a.angle_deg, a.cl, b.angle_deg, b.cl),
        cm: lerp(angle_deg, a.angle_deg, a.cm, b.angle_deg, b.cm),
    })
}

fn align(experimental: &[PolarPoint], simulated: &[PolarPoint]) -> Option<Vec<PolarPoint>> {
    if experimental.is_empty() || simulated.len() < 2 {
        return None;
    }
    experimental
        .iter()
        .map(|p| sample_polar(simulated, p.angle_deg))
        .collect()
}

fn rmse(observed: impl Iterator<Item = f64>, predicted: impl Iterator<Item = f64>) -> f64 {
    let (sse, n) = observed
        .zip(predicted)
        .fold((0.0, 0usize), |(sse, n), (o, p)| (sse + (o - p).powi(2), n + 1));
    (sse / n as f64).sqrt()
}
