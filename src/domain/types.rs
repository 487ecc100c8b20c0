//! Shared domain types.
//!
//! Inputs are plain immutable records supplied by the caller. Outputs derive
//! `Serialize` so callers can export them without extra mapping.

use serde::{Deserialize, Serialize};

/// Quarter-chord reference point (fraction of chord).
pub const QUARTER_CHORD: f64 = 0.25;

/// Upper angle of attack (deg) of the linear lift region used for regression.
///
/// Beyond this the lab data departs from linearity as the section approaches stall.
pub const DEFAULT_AOA_CUTOFF_DEG: f64 = 16.0;

/// One measured point of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Angle of attack in degrees.
    pub angle_deg: f64,
    /// Lift coefficient.
    pub cl: f64,
    /// Pitching-moment coefficient.
    pub cm: f64,
}

impl Sample {
    pub const fn new(angle_deg: f64, cl: f64, cm: f64) -> Self {
        Self { angle_deg, cl, cm }
    }
}

/// A named experiment: an ordered series of samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl Experiment {
    pub fn new(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    /// Experiment name with underscores shown as spaces.
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// Normal-equation sums over the samples inside the linear region.
///
/// Sums are reported even when `n < 2`; with `n == 0` they are all zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegressionSums {
    pub n: usize,
    pub sum_cl: f64,
    pub sum_cm: f64,
    pub sum_cl_cm: f64,
    pub sum_cl_sq: f64,
}

/// Least-squares fit of `Cm = slope * Cl + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Number of samples used in the fit.
    pub n: usize,
    /// `dCm/dCl`.
    pub slope: f64,
    /// `Cm0`.
    pub intercept: f64,
    /// Aerodynamic center as a fraction of chord, `0.25 - slope`.
    pub aerodynamic_center_offset: f64,
}

impl RegressionResult {
    /// How far the aerodynamic center sits from the quarter chord (fraction of chord).
    pub fn distance_from_quarter_chord(&self) -> f64 {
        (self.aerodynamic_center_offset - QUARTER_CHORD).abs()
    }

    /// Evaluate the fitted line at a lift coefficient.
    pub fn predict_cm(&self, cl: f64) -> f64 {
        self.slope * cl + self.intercept
    }
}

/// One row of an experimental or simulated polar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub angle_deg: f64,
    pub cl: f64,
    pub cm: f64,
}

impl PolarPoint {
    pub const fn new(angle_deg: f64, cl: f64, cm: f64) -> Self {
        Self { angle_deg, cl, cm }
    }
}

impl From<Sample> for PolarPoint {
    fn from(s: Sample) -> Self {
        Self::new(s.angle_deg, s.cl, s.cm)
    }
}

/// Simulated polar for a single airfoil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPolar {
    pub airfoil: String,
    pub points: Vec<PolarPoint>,
}

/// Weighting of the Cl and Cm errors in the combined RMSE.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RmseWeights {
    pub cl: f64,
    pub cm: f64,
}

impl Default for RmseWeights {
    fn default() -> Self {
        Self { cl: 0.6, cm: 0.4 }
    }
}

/// Combined RMSE score of a simulated polar against the experimental polar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RmseScore {
    pub rmse_cl: f64,
    pub rmse_cm: f64,
    pub combined: f64,
}

/// Lift-only RMSE score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClRmseScore {
    pub rmse_cl: f64,
}

/// A wake rake station.
///
/// Stations without a recorded height are ignored by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WakeStation {
    /// Distance from the tunnel floor (m).
    pub height_m: Option<f64>,
    /// Local wake velocity (m/s).
    pub velocity: f64,
}

impl WakeStation {
    pub const fn new(height_m: Option<f64>, velocity: f64) -> Self {
        Self { height_m, velocity }
    }
}

/// Tunnel and model constants for the wake survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WakeSurveyConfig {
    /// Freestream velocity `U∞` (m/s).
    pub freestream_velocity: f64,
    /// Air density `ρ` (kg/m³).
    pub air_density: f64,
    /// Model span `b` (m).
    pub span: f64,
    /// Reference area `S` (m²).
    pub reference_area: f64,
}

impl Default for WakeSurveyConfig {
    fn default() -> Self {
        Self {
            freestream_velocity: 11.36,
            air_density: 1.225,
            span: 0.71,
            reference_area: 0.12425,
        }
    }
}

/// Output of the wake momentum integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragEstimate {
    /// Stations used (after dropping those without a height).
    pub n_stations: usize,
    pub velocity_min: f64,
    pub velocity_max: f64,
    pub height_min: f64,
    pub height_max: f64,
    pub height_mean: f64,
    /// `∫ u (U∞ - u) dy` over the rake (m³/s²).
    pub momentum_deficit_integral: f64,
    /// Drag force (N).
    pub drag_force: f64,
    /// Freestream dynamic pressure (Pa).
    pub dynamic_pressure: f64,
    /// Drag coefficient `D / (q S)`.
    pub drag_coefficient: f64,
}

/// Tunables for a full analysis run.
///
/// All fields have lab defaults; missing keys in JSON fall back to them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Samples with an angle above this (deg) are excluded from the regression.
    pub aoa_cutoff_deg: f64,
    pub rmse_weights: RmseWeights,
    /// How many airfoils to keep in each ranking.
    pub top_n: usize,
    pub wake: WakeSurveyConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            aoa_cutoff_deg: DEFAULT_AOA_CUTOFF_DEG,
            rmse_weights: RmseWeights::default(),
            top_n: 10,
            wake: WakeSurveyConfig::default(),
        }
    }
}
