use thiserror::Error;

/// Errors that can occur when constructing a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must contain at least one point")]
    Empty,

    #[error("grid endpoints must be finite")]
    NonFinite,
}

/// A fixed, ordered sequence of evenly spaced values.
///
/// Used both for the time axis and for the swept parameter. A grid is
/// immutable once built; callers only ever read it.
///
/// # Example
///
/// ```
/// use hedon_core::Grid;
///
/// let t = Grid::linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(t.values(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    values: Vec<f64>,
}

impl Grid {
    /// Creates `n` evenly spaced values from `start` to `stop`, inclusive.
    ///
    /// The first value is exactly `start` and, for `n > 1`, the last is
    /// exactly `stop`. Interior values are `start + i * step`. A decreasing
    /// grid results when `stop < start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero or either endpoint is not finite.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Self, GridError> {
        if n == 0 {
            return Err(GridError::Empty);
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(GridError::NonFinite);
        }
        if n == 1 {
            return Ok(Self {
                values: vec![start],
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let step = (stop - start) / (n - 1) as f64;

        #[allow(clippy::cast_precision_loss)]
        let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
        values[n - 1] = stop;

        Ok(Self { values })
    }

    /// Returns the grid values in order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of points in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; a grid has at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the grid values.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.values.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
