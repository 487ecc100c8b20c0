//! Batch runs over many experiments or airfoils.
//!
//! Every experiment and every airfoil is scored independently, so the work is
//! spread over rayon's pool. Results come back in input order.

use log::{debug, info};
use rayon::prelude::*;

use crate::aero::survey_drag;
use crate::domain::{AnalysisConfig, DragEstimate, Experiment, PolarPoint, SimulatedPolar, WakeStation};
use crate::error::AeroError;
use crate::fit::{score, score_cl};
use crate::report::{ClMatch, CombinedMatch, ExperimentSummary, MatchReport, rank_cl_only, rank_combined, summarize_experiment};

/// Regress every experiment over its linear region.
pub fn analyze_experiments(experiments: &[Experiment], config: &AnalysisConfig) -> Vec<ExperimentSummary> {
    let summaries: Vec<ExperimentSummary> = experiments
        .par_iter()
        .map(|exp| summarize_experiment(exp, config.aoa_cutoff_deg))
        .collect();

    let fitted = summaries.iter().filter(|s| s.regression.is_some()).count();
    for s in summaries.iter().filter(|s| s.regression.is_none()) {
        debug!("{}: no regression ({} point(s) in linear region)", s.name, s.sums.n);
    }
    info!(
        "regression: {fitted}/{} experiments fitted (alpha <= {} deg)",
        summaries.len(),
        config.aoa_cutoff_deg
    );
    summaries
}

/// Score every simulated polar against `experimental` and rank the best matches.
///
/// Airfoils whose polar cannot be scored are left out of both rankings.
pub fn match_airfoils(
    experimental: &[PolarPoint],
    simulated: &[SimulatedPolar],
    config: &AnalysisConfig,
) -> MatchReport {
    let scored: Vec<(Option<CombinedMatch>, Option<ClMatch>)> = simulated
        .par_iter()
        .map(|polar| {
            let combined = score(experimental, &polar.points, config.rmse_weights).map(|score| CombinedMatch {
                airfoil: polar.airfoil.clone(),
                score,
            });
            let cl_only = score_cl(experimental, &polar.points).map(|score| ClMatch {
                airfoil: polar.airfoil.clone(),
                score,
            });
            if combined.is_none() {
                debug!("{}: polar cannot be aligned with the experimental angles", polar.airfoil);
            }
            (combined, cl_only)
        })
        .collect();

    let (combined, cl_only): (Vec<_>, Vec<_>) = scored.into_iter().unzip();
    let combined: Vec<CombinedMatch> = combined.into_iter().flatten().collect();
    let cl_only: Vec<ClMatch> = cl_only.into_iter().flatten().collect();
    info!(
        "matching: {} of {} airfoils scored",
        combined.len(),
        simulated.len()
    );

    MatchReport {
        combined: rank_combined(combined, config.top_n),
        cl_only: rank_cl_only(cl_only, config.top_n),
    }
}

/// Group flat `(airfoil, point)` rows into one polar per airfoil.
///
/// Airfoils appear in order of first occurrence; points keep their row order.
pub fn group_by_airfoil<S, I>(rows: I) -> Vec<SimulatedPolar>
where
    S: Into<String> + AsRef<str>,
    I: IntoIterator<Item = (S, PolarPoint)>,
{
    let mut polars: Vec<SimulatedPolar> = Vec::new();
    for (airfoil, point) in rows {
        match polars.iter_mut().find(|p| p.airfoil == airfoil.as_ref()) {
            Some(polar) => polar.points.push(point),
            None => polars.push(SimulatedPolar {
                airfoil: airfoil.into(),
                points: vec![point],
            }),
        }
    }
    polars
}

/// Wake-survey drag with the configured tunnel constants.
pub fn wake_drag(stations: &[WakeStation], config: &AnalysisConfig) -> Result<DragEstimate, AeroError> {
    let estimate = survey_drag(stations, &config.wake)?;
    info!(
        "wake survey: {} stations, D={:.4} N, Cd={:.4}",
        estimate.n_stations, estimate.drag_force, estimate.drag_coefficient
    );
    Ok(estimate)
}
