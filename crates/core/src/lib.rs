//! Core traits and types for the Hedon animations.
//!
//! This crate defines the shared abstractions that the sweep solver, the
//! observers, and the utility models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Sample`] — a `(t, param)` point at which a swept model is evaluated
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Grid`] — a fixed, evenly spaced sequence used for time and sweeps

mod grid;
mod model;
mod observer;

pub use grid::{Grid, GridError};
pub use observer::Observer;
pub use model::{Model, Sample};
