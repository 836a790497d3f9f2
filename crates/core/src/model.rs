/// A callable that maps a typed input to a typed output.
///
/// Models are the pure-math layer: they hold their parameters and evaluate a
/// single input at a time. Solvers drive models; observers never see them.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot produce an output.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A single point at which a swept model is evaluated.
///
/// `t` is the position on the time grid and `param` is the current value of
/// the swept parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub param: f64,
}

impl Sample {
    #[must_use]
    pub fn new(t: f64, param: f64) -> Self {
        Self { t, param }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Square;

    impl Model for Square {
        type Input = Sample;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Sample) -> Result<f64, Infallible> {
            Ok(input.t * input.t * input.param)
        }
    }

    #[test]
    fn call_with_sample() {
        let input = Sample::new(3.0, 2.0);

        assert_eq!(input, Sample { t: 3.0, param: 2.0 });
        assert_eq!(Square.call(&input).unwrap(), 18.0);
    }
}
