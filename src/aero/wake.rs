//! Profile drag from a wake rake survey (momentum deficit method).
//!
//! Applying the momentum equation to a control volume around the model gives
//! the drag per unit span as the momentum flux deficit through the wake:
//!
//! ```text
//! D = ρ b ∫ u (U∞ - u) dy
//! Cd = D / (½ ρ U∞² S)
//! ```
//!
//! The integral is evaluated with the trapezoidal rule over the rake heights.

use crate::aero::coefficients::dynamic_pressure;
use crate::domain::{DragEstimate, WakeStation, WakeSurveyConfig};
use crate::error::{AeroError, ErrorKind};
use crate::math::trapezoid;

/// Integrate the wake momentum deficit into a drag force and coefficient.
///
/// Stations without a height are dropped and the rest are sorted by height.
/// At least two stations must remain.
pub fn survey_drag(stations: &[WakeStation], config: &WakeSurveyConfig) -> Result<DragEstimate, AeroError> {
    validate_wake_config(config)?;

    let mut profile: Vec<(f64, f64)> = stations
        .iter()
        .filter_map(|s| s.height_m.map(|h| (h, s.velocity)))
        .collect();
    if profile.len() < 2 {
        return Err(AeroError::new(
            ErrorKind::InsufficientData,
            format!("wake survey needs at least 2 stations with a height, got {}", profile.len()),
        ));
    }
    if profile.iter().any(|(h, u)| !(h.is_finite() && u.is_finite())) {
        return Err(AeroError::new(ErrorKind::InvalidInput, "wake survey contains non-finite values"));
    }
    profile.sort_by(|a, b| a.0.total_cmp(&b.0));

    let heights: Vec<f64> = profile.iter().map(|p| p.0).collect();
    let deficit: Vec<f64> = profile
        .iter()
        .map(|&(_, u)| u * (config.freestream_velocity - u))
        .collect();

    let integral = trapezoid(&heights, &deficit);
    let drag_force = config.air_density * config.span * integral;
    let q = dynamic_pressure(config.air_density, config.freestream_velocity);

    let n = profile.len();
    let (velocity_min, velocity_max) = profile
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, u)| (lo.min(u), hi.max(u)));

    Ok(DragEstimate {
        n_stations: n,
        velocity_min,
        velocity_max,
        height_min: heights[0],
        height_max: heights[n - 1],
        height_mean: heights.iter().sum::<f64>() / n as f64,
        momentum_deficit_integral: integral,
        drag_force,
        dynamic_pressure: q,
        drag_coefficient: drag_force / (q * config.reference_area),
    })
}

pub(crate) fn validate_wake_config(config: &WakeSurveyConfig) -> Result<(), AeroError> {
    let fields = [
        ("freestream_velocity", config.freestream_velocity),
        ("air_density", config.air_density),
        ("span", config.span),
        ("reference_area", config.reference_area),
    ];
    for (name, value) in fields {
        if !(value.is_finite() && value > 0.0) {
            return Err(AeroError::config(format!("wake.{name} must be a positive number, got {value}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_deficit_integrates_to_rectangle() {
        let config = WakeSurveyConfig {
            freestream_velocity: 10.0,
            air_density: 1.0,
            span: 2.0,
            reference_area: 0.5,
        };
        // u = 8 everywhere: deficit = 8 * 2 = 16 over 0.5 m.
        let stations = [
            WakeStation::new(Some(0.5), 8.0),
            WakeStation::new(Some(0.0), 8.0),
            WakeStation::new(Some(0.25), 8.0),
        ];
        let est = survey_drag(&stations, &config).unwrap();
        assert_eq!(est.n_stations, 3);
        assert!((est.momentum_deficit_integral - 8.0).abs() < 1e-12);
        assert!((est.drag_force - 16.0).abs() < 1e-12);
        assert!((est.dynamic_pressure - 50.0).abs() < 1e-12);
        assert!((est.drag_coefficient - 16.0 / 25.0).abs() < 1e-12);
        assert_eq!(est.height_min, 0.0);
        assert_eq!(est.height_max, 0.5);
    }

    #[test]
    fn freestream_wake_has_no_drag() {
        let config = WakeSurveyConfig::default();
        let stations = [
            WakeStation::new(Some(0.1), config.freestream_velocity),
            WakeStation::new(Some(0.2), config.freestream_velocity),
        ];
        let est = survey_drag(&stations, &config).unwrap();
        assert_eq!(est.drag_force, 0.0);
        assert_eq!(est.drag_coefficient, 0.0);
    }

    #[test]
    fn stations_without_height_are_dropped() {
        let stations = [WakeStation::new(Some(0.1), 11.0), WakeStation::new(None, 11.3)];
        let err = survey_drag(&stations, &WakeSurveyConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn rejects_non_positive_constants() {
        let stations = [WakeStation::new(Some(0.1), 11.0), WakeStation::new(Some(0.2), 10.0)];
        let config = WakeSurveyConfig {
            reference_area: 0.0,
            ..WakeSurveyConfig::default()
        };
        let err = survey_drag(&stations, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }
}
