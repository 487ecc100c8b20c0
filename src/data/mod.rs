//! Reference datasets recorded in the lab sessions.

pub mod lab;

pub use lab::*;
