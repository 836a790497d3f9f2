use std::ops::Range;

use plotters::style::RGBColor;
use thiserror::Error;

/// Errors that can occur when building a [`Figure`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FigureError {
    #[error("x range must be finite and increasing")]
    XRange,

    #[error("y range must be finite and increasing")]
    YRange,
}

/// Layout of the frames written by a [`GifRecorder`].
///
/// Construct with [`Figure::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// let figure = Figure::new(0.0..20.0, 0.0..1.0)?
///     .x_label("Time (t)")
///     .y_label("Instantaneous Utility")
///     .fps(10);
/// ```
///
/// [`GifRecorder`]: crate::GifRecorder
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    size: (u32, u32),
    x_range: Range<f64>,
    y_range: Range<f64>,
    x_label: String,
    y_label: String,
    fps: u32,
    line_width: u32,
    color: RGBColor,
}

impl Figure {
    /// Creates a figure with the given axis windows.
    ///
    /// Defaults: 1000×600 pixels, no axis labels, 10 frames per second, and a
    /// 2 px blue line.
    ///
    /// # Errors
    ///
    /// Returns an error if either range is non-finite or not increasing.
    pub fn new(x_range: Range<f64>, y_range: Range<f64>) -> Result<Self, FigureError> {
        if !is_valid(&x_range) {
            return Err(FigureError::XRange);
        }
        if !is_valid(&y_range) {
            return Err(FigureError::YRange);
        }

        Ok(Self {
            size: (1000, 600),
            x_range,
            y_range,
            x_label: String::new(),
            y_label: String::new(),
            fps: 10,
            line_width: 2,
            color: RGBColor(31, 119, 180),
        })
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Sets the playback rate. Zero is treated as one frame per second.
    #[must_use]
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.size
    }

    #[must_use]
    pub fn x_range(&self) -> Range<f64> {
        self.x_range.clone()
    }

    #[must_use]
    pub fn y_range(&self) -> Range<f64> {
        self.y_range.clone()
    }

    #[must_use]
    pub fn x_desc(&self) -> &str {
        &self.x_label
    }

    #[must_use]
    pub fn y_desc(&self) -> &str {
        &self.y_label
    }

    #[must_use]
    pub fn line_style(&self) -> (RGBColor, u32) {
        (self.color, self.line_width)
    }

    /// Delay between frames in milliseconds.
    #[must_use]
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps
    }
}

fn is_valid(range: &Range<f64>) -> bool {
    range.start.is_finite() && range.end.is_finite() && range.start < range.end
}
