//! Solvers for the Hedon animations.
//!
//! # Solvers
//!
//! - [`sweep`] — evaluates a model over a fixed time grid once per swept
//!   parameter value, emitting one frame per value

pub mod sweep;
