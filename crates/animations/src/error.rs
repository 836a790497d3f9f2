use hedon_core::GridError;
use hedon_models::ParamsError;
use hedon_observers::{FigureError, RenderError};
use hedon_solvers::sweep;

/// Errors that can occur while setting up or rendering an animation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("invalid parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("invalid figure: {0}")]
    Figure(#[from] FigureError),

    #[error("sweep failed: {0}")]
    Sweep(#[from] sweep::Error),

    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}
