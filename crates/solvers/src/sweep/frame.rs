/// The `(t, U(t))` arrays for one sweep value.
///
/// The solver owns a single frame and overwrites it in place for each sweep
/// value; observers only ever borrow it for the duration of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    t: Vec<f64>,
    utility: Vec<f64>,
}

impl Frame {
    pub(crate) fn with_grid(t: &[f64]) -> Self {
        Self {
            t: t.to_vec(),
            utility: vec![0.0; t.len()],
        }
    }

    pub(crate) fn utility_mut(&mut self) -> &mut [f64] {
        &mut self.utility
    }

    /// The time grid.
    #[must_use]
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Returns `(t, U(t))` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.utility.iter().copied())
    }
}
