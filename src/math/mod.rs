//! Numerical utilities: straight-line least squares, two-point interpolation
//! and trapezoidal integration.

pub mod integrate;
pub mod interp;
pub mod ols;

pub use integrate::*;
pub use interp::*;
pub use ols::*;
