//! Force and moment coefficients.
//!
//! Conventions follow the lab tables:
//!
//! - `q = ½ ρ V²`
//! - `Cl = L / (q S)`, `Cd = D / (q S)`, `Cm = M / (q S c)`
//! - induced drag `CDi = Cl² / (π e AR)`
//! - skin friction (turbulent flat plate, both faces) `Cf = 2 · 0.074 / Re^0.2`

use std::f64::consts::PI;

use crate::error::{AeroError, ErrorKind};

/// Turbulent flat-plate skin-friction constant (per face).
const FLAT_PLATE_CF: f64 = 0.074;

/// Dynamic pressure `½ ρ V²` (Pa).
pub fn dynamic_pressure(air_density: f64, velocity: f64) -> f64 {
    0.5 * air_density * velocity * velocity
}

/// Velocity recovered from a pitot dynamic-pressure reading, `sqrt(2 q / ρ)`.
pub fn velocity_from_dynamic_pressure(dynamic_pressure: f64, air_density: f64) -> Result<f64, AeroError> {
    if !(air_density.is_finite() && air_density > 0.0) {
        return Err(AeroError::new(ErrorKind::InvalidInput, format!("air density must be > 0, got {air_density}")));
    }
    if dynamic_pressure < 0.0 {
        return Err(AeroError::new(
            ErrorKind::InvalidInput,
            format!("dynamic pressure must be >= 0, got {dynamic_pressure}"),
        ));
    }
    Ok((2.0 * dynamic_pressure / air_density).sqrt())
}

/// `Cl = L / (q S)`.
pub fn lift_coefficient(lift: f64, dynamic_pressure: f64, reference_area: f64) -> Result<f64, AeroError> {
    Ok(lift / reference_force(dynamic_pressure, reference_area)?)
}

/// `Cd = D / (q S)`.
pub fn drag_coefficient(drag: f64, dynamic_pressure: f64, reference_area: f64) -> Result<f64, AeroError> {
    Ok(drag / reference_force(dynamic_pressure, reference_area)?)
}

/// `Cm = M / (q S c)`.
pub fn moment_coefficient(
    moment: f64,
    dynamic_pressure: f64,
    reference_area: f64,
    chord: f64,
) -> Result<f64, AeroError> {
    if !(chord.is_finite() && chord > 0.0) {
        return Err(AeroError::new(ErrorKind::InvalidInput, format!("chord must be > 0, got {chord}")));
    }
    Ok(moment / (reference_force(dynamic_pressure, reference_area)? * chord))
}

/// Induced drag of a finite wing, `Cl² / (π e AR)`.
pub fn induced_drag_coefficient(cl: f64, oswald_efficiency: f64, aspect_ratio: f64) -> Result<f64, AeroError> {
    if !(oswald_efficiency.is_finite() && aspect_ratio.is_finite() && oswald_efficiency > 0.0 && aspect_ratio > 0.0) {
        return Err(AeroError::new(
            ErrorKind::InvalidInput,
            format!("span efficiency and aspect ratio must be > 0, got e={oswald_efficiency}, AR={aspect_ratio}"),
        ));
    }
    Ok(cl * cl / (PI * oswald_efficiency * aspect_ratio))
}

/// Skin-friction drag coefficient for both faces of a turbulent flat plate.
pub fn skin_friction_coefficient(reynolds: f64) -> Result<f64, AeroError> {
    if !(reynolds.is_finite() && reynolds > 0.0) {
        return Err(AeroError::new(ErrorKind::InvalidInput, format!("Reynolds number must be > 0, got {reynolds}")));
    }
    Ok(2.0 * FLAT_PLATE_CF / reynolds.powf(0.2))
}

/// Balance drag with the rig's parasitic drag removed.
pub fn real_drag(nominal_drag: f64, parasitic_drag: f64) -> f64 {
    nominal_drag - parasitic_drag
}

/// Lift-to-drag ratio; `None` when drag is zero.
pub fn lift_to_drag(lift: f64, drag: f64) -> Option<f64> {
    if drag == 0.0 { None } else { Some(lift / drag) }
}

fn reference_force(dynamic_pressure: f64, reference_area: f64) -> Result<f64, AeroError> {
    let qs = dynamic_pressure * reference_area;
    if !(qs.is_finite() && qs > 0.0) {
        return Err(AeroError::new(
            ErrorKind::InvalidInput,
            format!("q*S must be > 0, got q={dynamic_pressure}, S={reference_area}"),
        ));
    }
    Ok(qs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitot_velocity_matches_lab_table() {
        // 76 Pa at sea-level density is the first wake station (11.13919 m/s).
        let v = velocity_from_dynamic_pressure(76.0, 1.225).unwrap();
        assert!((v - 11.13919).abs() < 1e-4, "v={v}");
        let q = dynamic_pressure(1.225, v);
        assert!((q - 76.0).abs() < 1e-9);
    }

    #[test]
    fn coefficients_round_trip_forces() {
        let q = dynamic_pressure(1.225, 20.0);
        let s = 0.12;
        let cl = lift_coefficient(29.4 * 0.5, q, s).unwrap();
        assert!((cl - 0.5).abs() < 1e-12);
        let cd = drag_coefficient(29.4 * 0.02, q, s).unwrap();
        assert!((cd - 0.02).abs() < 1e-12);
        let cm = moment_coefficient(-29.4 * 0.15 * 0.08, q, s, 0.15).unwrap();
        assert!((cm + 0.08).abs() < 1e-12);
    }

    #[test]
    fn zero_reference_area_is_rejected() {
        let err = lift_coefficient(1.0, 100.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(moment_coefficient(1.0, 100.0, 0.1, 0.0).is_err());
    }

    #[test]
    fn induced_drag_formula() {
        let cdi = induced_drag_coefficient(1.0, 0.8, 5.0).unwrap();
        assert!((cdi - 1.0 / (PI * 4.0)).abs() < 1e-12);
        assert!(induced_drag_coefficient(1.0, 0.0, 5.0).is_err());
    }

    #[test]
    fn skin_friction_decreases_with_reynolds() {
        let low = skin_friction_coefficient(1.0e5).unwrap();
        let high = skin_friction_coefficient(1.0e6).unwrap();
        assert!((low - 0.148 / 10.0).abs() < 1e-12);
        assert!(high < low);
        assert!(skin_friction_coefficient(0.0).is_err());
    }

    #[test]
    fn lift_to_drag_guards_zero_drag() {
        assert_eq!(lift_to_drag(10.0, 0.0), None);
        assert_eq!(lift_to_drag(10.0, 2.0), Some(5.0));
        assert!((real_drag(3.5, 1.25) - 2.25).abs() < 1e-12);
    }
}
