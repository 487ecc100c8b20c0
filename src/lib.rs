//! `aero-lab` library crate.
//!
//! Analysis routines for wind-tunnel lab data:
//!
//! - aerodynamic center from a Cm-vs-Cl regression (`fit::regression`)
//! - RMSE matching of simulated airfoil polars (`fit::matcher`)
//! - wake-survey momentum drag and coefficient helpers (`aero`)
//! - batch runs over experiments and airfoils (`pipeline`)
//!
//! The crate only computes; tables and plots are up to the caller.

pub mod aero;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod pipeline;
pub mod report;

pub use domain::{AnalysisConfig, Experiment, PolarPoint, RegressionResult, Sample};
pub use error::{AeroError, ErrorKind};
pub use fit::{fit, score, score_cl};
