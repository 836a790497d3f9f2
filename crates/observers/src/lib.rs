//! Sweep observers for the Hedon animations.
//!
//! This crate turns the frames produced by [`hedon_solvers::sweep`] into an
//! animated image.
//!
//! # Modules
//!
//! - [`clip`] — cuts curves at the edge of the plot window
//!
//! The [`GifRecorder`] renders frames with `plotters` and writes them to a
//! GIF as the sweep runs; [`Figure`] describes the canvas and axes.

pub mod clip;

mod figure;
mod gif;

pub use figure::{Figure, FigureError};
pub use gif::{GifRecorder, RenderError};
