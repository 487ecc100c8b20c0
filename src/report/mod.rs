//! Reporting utilities: per-experiment summaries and airfoil rankings.
//!
//! Everything here produces plain records; printing and plotting are left to
//! the caller.

use serde::Serialize;

use crate::domain::{ClRmseScore, Experiment, RegressionResult, RegressionSums, RmseScore, Sample};
use crate::fit::{fit, regression_sums, split_linear_region};

/// Regression outputs for one experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentSummary {
    pub name: String,
    /// Angle cutoff (deg) the linear region was selected with.
    pub aoa_cutoff_deg: f64,
    pub sums: RegressionSums,
    /// `None` when the linear region has too few points or no `Cl` spread.
    pub regression: Option<RegressionResult>,
    /// Samples inside the linear region, in input order.
    pub included: Vec<Sample>,
    /// Samples past the cutoff, in input order.
    pub excluded: Vec<Sample>,
}

/// One airfoil in the combined (Cl + Cm) ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedMatch {
    pub airfoil: String,
    pub score: RmseScore,
}

/// One airfoil in the CL-only ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClMatch {
    pub airfoil: String,
    pub score: ClRmseScore,
}

/// Both airfoil rankings (best first, top-N each).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MatchReport {
    pub combined: Vec<CombinedMatch>,
    pub cl_only: Vec<ClMatch>,
}

/// Run the regression for one experiment and collect everything a report needs.
pub fn summarize_experiment(experiment: &Experiment, aoa_cutoff_deg: f64) -> ExperimentSummary {
    let (included, excluded) = split_linear_region(&experiment.samples, aoa_cutoff_deg);
    ExperimentSummary {
        name: experiment.name.clone(),
        aoa_cutoff_deg,
        sums: regression_sums(&experiment.samples, aoa_cutoff_deg),
        regression: fit(&experiment.samples, aoa_cutoff_deg),
        included,
        excluded,
    }
}

/// Keep the `top_n` airfoils with the smallest combined RMSE.
pub fn rank_combined(mut matches: Vec<CombinedMatch>, top_n: usize) -> Vec<CombinedMatch> {
    matches.sort_by(|a, b| a.score.combined.total_cmp(&b.score.combined));
    matches.truncate(top_n);
    matches
}

/// Keep the `top_n` airfoils with the smallest lift RMSE.
pub fn rank_cl_only(mut matches: Vec<ClMatch>, top_n: usize) -> Vec<ClMatch> {
    matches.sort_by(|a, b| a.score.rmse_cl.total_cmp(&b.score.rmse_cl));
    matches.truncate(top_n);
    matches
}
