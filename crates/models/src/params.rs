use thiserror::Error;

/// Constants shared by the value, discount, and impulse functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    v0: f64,
    k: f64,
    lambda: f64,
    width: f64,
}

/// Errors that can occur when validating [`Params`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("v0 must be finite")]
    V0,

    #[error("k must be finite and non-negative")]
    K,

    #[error("lambda must be finite and non-negative")]
    Lambda,

    #[error("impulse width must be finite and positive")]
    Width,
}

impl Default for Params {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, 1.0, 0.5, 0.05).unwrap()
    }
}

impl Params {
    /// Creates a validated parameter set.
    ///
    /// - `v0`: undiscounted value at `t = 0`
    /// - `k`: hyperbolic discount rate
    /// - `lambda`: exponential decay rate of the value function
    /// - `width`: width of the Gaussian impulse approximation
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite, if `k` or `lambda` is
    /// negative, or if `width` is not positive.
    pub fn new(v0: f64, k: f64, lambda: f64, width: f64) -> Result<Self, ParamsError> {
        if !v0.is_finite() {
            return Err(ParamsError::V0);
        }
        if !k.is_finite() || k < 0.0 {
            return Err(ParamsError::K);
        }
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(ParamsError::Lambda);
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(ParamsError::Width);
        }

        Ok(Self {
            v0,
            k,
            lambda,
            width,
        })
    }

    #[must_use]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }

    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = Params::default();

        assert_eq!(params.v0(), 1.0);
        assert_eq!(params.k(), 1.0);
        assert_eq!(params.lambda(), 0.5);
        assert_eq!(params.width(), 0.05);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(Params::new(f64::NAN, 1.0, 0.5, 0.05), Err(ParamsError::V0));
        assert_eq!(Params::new(1.0, -1.0, 0.5, 0.05), Err(ParamsError::K));
        assert_eq!(
            Params::new(1.0, 1.0, f64::INFINITY, 0.05),
            Err(ParamsError::Lambda)
        );
        assert_eq!(Params::new(1.0, 1.0, 0.5, 0.0), Err(ParamsError::Width));
    }
}
