//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - measured inputs (`Sample`, `PolarPoint`, `WakeStation`, `Experiment`)
//! - engine outputs (`RegressionResult`, `RegressionSums`, `RmseScore`, `DragEstimate`)
//! - tunables (`AnalysisConfig`, `RmseWeights`, `WakeSurveyConfig`)

pub mod types;

pub use types::*;
