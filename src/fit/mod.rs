//! Fitting engines.
//!
//! Responsibilities:
//!
//! - Cm-vs-Cl regression over the linear lift region (aerodynamic center)
//! - RMSE scoring of simulated polars against an experimental polar

pub mod matcher;
pub mod regression;

pub use matcher::*;
pub use regression::*;
