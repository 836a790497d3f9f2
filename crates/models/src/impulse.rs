use std::f64::consts::PI;

/// Narrow-Gaussian stand-in for a Dirac impulse centered at `t = 0`.
///
/// `δ_w(t) = exp(-(t/w)²) / (w·√π)`. The normalization gives unit area over
/// the whole real line; on `t ≥ 0` only half of that mass is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    width: f64,
}

impl Impulse {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// Returns the impulse density at `t`.
    #[must_use]
    pub fn density(&self, t: f64) -> f64 {
        let z = t / self.width;
        (-(z * z)).exp() / (self.width * PI.sqrt())
    }
}
