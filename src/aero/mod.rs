//! Aerodynamic relations used by the lab: force coefficients and wake-survey drag.

pub mod coefficients;
pub mod wake;

pub use coefficients::*;
pub use wake::*;
