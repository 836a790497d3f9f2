//! Parameter sweep solver.
//!
//! Evaluates a model over a fixed time grid once per swept parameter value:
//!
//! ```text
//! frame_i = [ model(t, sweep_i) for t in grid ]
//! ```
//!
//! Frames are produced strictly in sweep order and handed to an observer one
//! at a time. Each frame depends only on the grid and its own sweep value.
//!
//! # Example
//!
//! ```ignore
//! use hedon_solvers::sweep;
//!
//! let solution = sweep::solve(&model, &grid, &sweep, |event: &sweep::Event<'_>| {
//!     println!("frame {} at {:.2}", event.index, event.param);
//!     None
//! })?;
//! ```

mod action;
mod error;
mod event;
mod frame;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use frame::Frame;
pub use solution::{Solution, Status};

use hedon_core::{Grid, Model, Observer, Sample};
use tracing::info;

/// Sweeps a model across `sweep`, evaluating it over `grid` for each value.
///
/// # Algorithm
///
/// For each sweep index `i`:
///
/// 1. Evaluate the model at every `(t, sweep[i])` on the grid, overwriting the
///    frame buffer.
/// 2. Emit an [`Event`] to the observer.
/// 3. If the observer returns [`Action::StopEarly`], terminate.
///
/// # Errors
///
/// Returns an error on the first model failure. No frames after the failing
/// one are computed.
pub fn solve<M, Obs>(
    model: &M,
    grid: &Grid,
    sweep: &Grid,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = Sample, Output = f64>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    info!(frames = sweep.len(), points = grid.len(), "starting sweep");

    let mut frame = Frame::with_grid(grid.values());

    for (index, param) in sweep.iter().enumerate() {
        for (u, t) in frame.utility_mut().iter_mut().zip(grid.iter()) {
            *u = model
                .call(&Sample::new(t, param))
                .map_err(|err| Error::model(index, err))?;
        }

        let event = Event {
            index,
            param,
            frame: &frame,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            info!(frames = index + 1, "sweep stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                frames: index + 1,
            });
        }
    }

    info!(frames = sweep.len(), "sweep complete");

    Ok(Solution {
        status: Status::Complete,
        frames: sweep.len(),
    })
}

/// Sweeps a model without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model fails at any point.
pub fn solve_unobserved<M>(model: &M, grid: &Grid, sweep: &Grid) -> Result<Solution, Error>
where
    M: Model<Input = Sample, Output = f64>,
{
    solve(model, grid, sweep, ())
}
