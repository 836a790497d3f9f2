//! Animated GIF recorder for sweep frames.
//!
//! See [`GifRecorder`] for usage.

use std::{error::Error as StdError, path::Path};

use hedon_core::Observer;
use hedon_solvers::sweep::{Action, Event, Frame};
use plotters::{coord::Shift, drawing::DrawingArea, prelude::*};
use tracing::{debug, warn};

use crate::{Figure, clip::clip_polyline};

/// Errors that can occur while recording an animation.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to open animation output: {0}")]
    Open(#[source] Box<dyn StdError + Send + Sync>),

    #[error("failed to render frame {index}: {source}")]
    Draw {
        index: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// An observer that renders each sweep frame into an animated GIF.
///
/// Every event replaces the displayed curve and retitles the chart with
/// `title(param)`; nothing carries over between frames. Frames are appended
/// to the file as they arrive, and the file is finalized by
/// [`finish`][GifRecorder::finish].
///
/// A rendering failure stops the sweep (the recorder returns
/// [`Action::StopEarly`]) and is reported by `finish`. Once a failure is
/// stored, no further frames are drawn.
///
/// # Example
///
/// ```ignore
/// let mut recorder = GifRecorder::create("out.gif", figure, |r| format!("R = {r:.2}"))?;
/// sweep::solve(&model, &grid, &sweep, &mut recorder)?;
/// let frames = recorder.finish()?;
/// ```
pub struct GifRecorder<'a, F> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
    figure: Figure,
    title: F,
    frames: usize,
    failure: Option<RenderError>,
}

impl<'a, F> GifRecorder<'a, F>
where
    F: Fn(f64) -> String,
{
    /// Creates the output file and prepares a recorder for it.
    ///
    /// An existing file at `path` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create<P>(path: &'a P, figure: Figure, title: F) -> Result<Self, RenderError>
    where
        P: AsRef<Path> + ?Sized,
    {
        let (width, height) = figure.dimensions();
        let backend = BitMapBackend::gif(path, (width, height), figure.frame_delay_ms())
            .map_err(|err| RenderError::Open(Box::new(err)))?;

        Ok(Self {
            area: backend.into_drawing_area(),
            figure,
            title,
            frames: 0,
            failure: None,
        })
    }

    /// Renders one frame and appends it to the animation.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or encoding the frame fails.
    pub fn render(&mut self, index: usize, param: f64, frame: &Frame) -> Result<(), RenderError> {
        self.draw(param, frame)
            .map_err(|source| RenderError::Draw { index, source })?;
        self.frames += 1;

        debug!(index, param, "rendered frame");
        Ok(())
    }

    /// Finalizes the file and returns the number of frames written.
    ///
    /// # Errors
    ///
    /// Returns the first rendering failure seen while observing a sweep.
    pub fn finish(self) -> Result<usize, RenderError> {
        let Self {
            area,
            frames,
            failure,
            ..
        } = self;

        if let Some(err) = failure {
            return Err(err);
        }

        // Dropping the backend writes the GIF trailer.
        drop(area);
        Ok(frames)
    }

    fn draw(&self, param: f64, frame: &Frame) -> Result<(), Box<dyn StdError + Send + Sync>> {
        let x_range = self.figure.x_range();
        let y_range = self.figure.y_range();
        let (color, width) = self.figure.line_style();

        self.area.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&self.area)
            .caption((self.title)(param), ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range.clone(), y_range.clone())?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(self.figure.x_desc())
            .y_desc(self.figure.y_desc())
            .axis_desc_style(("sans-serif", 20))
            .draw()?;

        for run in clip_polyline(frame.points(), &x_range, &y_range) {
            chart.draw_series(LineSeries::new(run, color.stroke_width(width)))?;
        }

        self.area.present()?;
        Ok(())
    }
}

impl<'e, F> Observer<Event<'e>, Action> for GifRecorder<'_, F>
where
    F: Fn(f64) -> String,
{
    fn observe(&mut self, event: &Event<'e>) -> Option<Action> {
        if self.failure.is_some() {
            return Some(Action::StopEarly);
        }

        match self.render(event.index, event.param, event.frame) {
            Ok(()) => None,
            Err(err) => {
                warn!(index = event.index, error = %err, "stopping sweep after render failure");
                self.failure = Some(err);
                Some(Action::StopEarly)
            }
        }
    }
}

/// Allows `&mut GifRecorder` to be passed to solvers that take an observer by
/// value, so [`GifRecorder::finish`] can be called after the sweep completes.
impl<'e, F> Observer<Event<'e>, Action> for &mut GifRecorder<'_, F>
where
    F: Fn(f64) -> String,
{
    fn observe(&mut self, event: &Event<'e>) -> Option<Action> {
        (**self).observe(event)
    }
}
