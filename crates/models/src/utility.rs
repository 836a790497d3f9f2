use hedon_core::{Model, Sample};
use thiserror::Error;

use crate::{Discount, Params, ValueCurve};

/// Errors that can occur when evaluating a [`Utility`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum UtilityError {
    #[error("utility is not finite at t = {t}, param = {param}")]
    NonFinite { t: f64, param: f64 },
}

/// Instantaneous utility: `U(t) = V(t; param)·W(t)`.
///
/// Implements [`Model`] over [`Sample`] inputs, so a sweep solver can evaluate
/// it point by point. A non-finite result is an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utility<V> {
    value: V,
    discount: Discount,
}

impl<V: ValueCurve> Utility<V> {
    #[must_use]
    pub fn new(value: V, discount: Discount) -> Self {
        Self { value, discount }
    }

    /// Pairs a value function with the discount defined by `params`.
    #[must_use]
    pub fn with_params(value: V, params: &Params) -> Self {
        Self::new(value, Discount::new(params.k()))
    }
}

impl<V: ValueCurve> Model for Utility<V> {
    type Input = Sample;
    type Output = f64;
    type Error = UtilityError;

    fn call(&self, input: &Sample) -> Result<f64, UtilityError> {
        let Sample { t, param } = *input;
        let u = self.value.value(t, param) * self.discount.weight(t);

        if u.is_finite() {
            Ok(u)
        } else {
            Err(UtilityError::NonFinite { t, param })
        }
    }
}
