use hedon_core::Grid;
use hedon_models::{Params, Utility, ValueCurve};
use hedon_observers::{Figure, GifRecorder};
use hedon_solvers::sweep;
use tracing::info;

use crate::Error;

/// One complete animation: what to compute, what to sweep, and how to draw it.
#[derive(Debug, Clone)]
pub struct Animation<V> {
    pub(crate) name: &'static str,
    pub(crate) output: &'static str,
    pub(crate) params: Params,
    pub(crate) value: V,
    pub(crate) grid: Grid,
    pub(crate) sweep: Grid,
    pub(crate) figure: Figure,
    pub(crate) title: fn(f64) -> String,
}

impl<V> Animation<V>
where
    V: ValueCurve + Clone,
{
    /// File the animation is written to, relative to the working directory.
    #[must_use]
    pub fn output(&self) -> &'static str {
        self.output
    }

    /// The time grid shared by every frame.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The swept parameter values, one per frame.
    #[must_use]
    pub fn sweep(&self) -> &Grid {
        &self.sweep
    }

    #[must_use]
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Chart title for a given parameter value.
    #[must_use]
    pub fn title(&self, param: f64) -> String {
        (self.title)(param)
    }

    /// The utility model evaluated for every frame.
    #[must_use]
    pub fn utility(&self) -> Utility<V> {
        Utility::with_params(self.value.clone(), &self.params)
    }

    /// Renders every frame and writes the animation to [`output`][Self::output].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, a utility value is not
    /// finite, or a frame fails to render.
    pub fn run(&self) -> Result<(), Error> {
        info!(animation = self.name, output = self.output, "rendering animation");

        let utility = self.utility();
        let mut recorder = GifRecorder::create(self.output, self.figure.clone(), self.title)?;
        let solution = sweep::solve(&utility, &self.grid, &self.sweep, &mut recorder)?;
        let frames = recorder.finish()?;

        info!(
            animation = self.name,
            frames,
            status = ?solution.status,
            "animation saved"
        );

        Ok(())
    }
}
