//! Lab measurements as structured values.
//!
//! - four balance experiments (2D/3D models at low/high Reynolds number)
//! - the experimental polar used for airfoil matching (20° omitted: the
//!   panel-method polars are unreliable past stall)
//! - the wake rake survey behind the 2D model

use crate::domain::{Experiment, PolarPoint, Sample, WakeStation};

const ANGLES_DEG: [f64; 9] = [-4.0, 0.0, 4.0, 8.0, 12.0, 16.0, 17.0, 18.0, 20.0];

const EXP1_CL: [f64; 9] = [0.219, 0.515, 0.816, 1.059, 1.230, 1.330, 1.306, 1.306, 1.298];
const EXP1_CM: [f64; 9] = [
    -0.087320271, -0.087453789, -0.056285658, -0.083613917, -0.085173052, -0.088358206, -0.113314182,
    -0.119997384, -0.124163071,
];

const EXP2_CL: [f64; 9] = [0.047, 0.338, 0.655, 0.905, 1.072, 1.157, 1.146, 1.097, 1.093];
const EXP2_CM: [f64; 9] = [
    -0.076997843, -0.057471156, -0.054130599, -0.051839529, -0.064091257, -0.075497476, -0.090844304,
    -0.095154435, -0.106791884,
];

const EXP3_CL: [f64; 9] = [0.017, 0.279, 0.550, 0.765, 0.942, 1.074, 1.062, 1.074, 1.077];
const EXP3_CM: [f64; 9] = [
    -0.10091933, -0.076467428, -0.072400268, -0.073229073, -0.080903977, -0.089227422, -0.112009902,
    -0.123527623, -0.133407249,
];

const EXP4_CL: [f64; 9] = [
    -0.00506009, 0.291584419, 0.544479017, 0.771548338, 0.956943851, 1.083356161, 1.097075841, 1.095730431,
    1.105413116,
];
const EXP4_CM: [f64; 9] = [
    -0.070500135, -0.063649553, -0.054527757, -0.05722711, -0.075309479, -0.079515418, -0.096344357,
    -0.106985619, -0.123512666,
];

/// The four balance experiments, in run order.
pub fn experiments() -> Vec<Experiment> {
    vec![
        build("Experiment_1_2D_airfoil_low_Re", &EXP1_CL, &EXP1_CM),
        build("Experiment_2_2D_airfoil_high_Re", &EXP2_CL, &EXP2_CM),
        build("Experiment_3_3D_airfoil", &EXP3_CL, &EXP3_CM),
        build("Experiment_4_3D_airfoil_high_Re", &EXP4_CL, &EXP4_CM),
    ]
}

/// Experimental polar used to rank simulated airfoils.
pub fn matcher_polar() -> Vec<PolarPoint> {
    vec![
        PolarPoint::new(-4.0, 0.219, -0.08732),
        PolarPoint::new(0.0, 0.515, -0.08745),
        PolarPoint::new(4.0, 0.816, -0.05629),
        PolarPoint::new(8.0, 1.059, -0.08361),
        PolarPoint::new(12.0, 1.23, -0.08517),
        PolarPoint::new(16.0, 1.33, -0.08836),
    ]
}

/// Wake rake readings: height above the floor (m) and velocity (m/s).
///
/// The last reading was logged without a height.
pub fn wake_survey() -> Vec<WakeStation> {
    const HEIGHTS: [Option<f64>; 22] = [
        Some(0.1016),
        Some(0.127),
        Some(0.1524),
        Some(0.1778),
        Some(0.2032),
        Some(0.2286),
        Some(0.254),
        Some(0.2794),
        Some(0.3048),
        Some(0.3302),
        Some(0.3556),
        Some(0.381),
        Some(0.4064),
        Some(0.4318),
        Some(0.4572),
        Some(0.4826),
        Some(0.508000001),
        Some(0.533400001),
        Some(0.558800001),
        Some(0.584200001),
        Some(0.609600001),
        None,
    ];
    const VELOCITIES: [f64; 22] = [
        11.13919, 11.06567, 10.99165, 10.76654, 10.30158, 9.646825, 9.124983, 8.852533, 8.666143, 9.124983,
        9.476071, 9.476071, 10.22203, 10.53662, 11.13919, 11.21224, 11.06567, 11.7803, 11.8494, 11.7803, 11.7803,
        11.35692,
    ];

    HEIGHTS
        .iter()
        .zip(VELOCITIES.iter())
        .map(|(&h, &u)| WakeStation::new(h, u))
        .collect()
}

fn build(name: &str, cl: &[f64; 9], cm: &[f64; 9]) -> Experiment {
    let samples = ANGLES_DEG
        .iter()
        .zip(cl.iter().zip(cm.iter()))
        .map(|(&a, (&l, &m))| Sample::new(a, l, m))
        .collect();
    Experiment::new(name, samples)
}
