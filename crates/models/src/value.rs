//! Value functions `V(t; param)` for each perturbation.
//!
//! Every variant builds on the same exponential decay `V0·e^(−λt)` and
//! perturbs it through one swept parameter:
//!
//! - [`ImmediateReward`] — adds an impulse of magnitude `R` at `t = 0`
//! - [`LeftShift`] — holds `V0` until `τ`, then decays from there
//! - [`TimeCompression`] — scales time by `α` inside the exponent

use crate::{Impulse, Params};

/// A value function parameterized by one swept scalar.
pub trait ValueCurve {
    /// Returns the undiscounted value at time `t` for parameter `param`.
    fn value(&self, t: f64, param: f64) -> f64;
}

/// Unperturbed exponential decay: `V0·e^(−λt)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    v0: f64,
    lambda: f64,
}

impl Exponential {
    #[must_use]
    pub fn new(v0: f64, lambda: f64) -> Self {
        Self { v0, lambda }
    }

    #[must_use]
    pub fn from_params(params: &Params) -> Self {
        Self::new(params.v0(), params.lambda())
    }

    #[must_use]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// Returns `V0·e^(−λt)`.
    #[must_use]
    pub fn at(&self, t: f64) -> f64 {
        self.v0 * (-self.lambda * t).exp()
    }
}

/// `V(t; R) = V0·e^(−λt) + R·δ_w(t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImmediateReward {
    base: Exponential,
    impulse: Impulse,
}

impl ImmediateReward {
    #[must_use]
    pub fn new(params: &Params) -> Self {
        Self {
            base: Exponential::from_params(params),
            impulse: Impulse::new(params.width()),
        }
    }
}

impl ValueCurve for ImmediateReward {
    fn value(&self, t: f64, reward: f64) -> f64 {
        self.base.at(t) + reward * self.impulse.density(t)
    }
}

/// `V(t; τ) = V0` for `t < τ`, otherwise `V0·e^(−λ(t−τ))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeftShift {
    base: Exponential,
}

impl LeftShift {
    #[must_use]
    pub fn new(params: &Params) -> Self {
        Self {
            base: Exponential::from_params(params),
        }
    }
}

impl ValueCurve for LeftShift {
    fn value(&self, t: f64, shift: f64) -> f64 {
        if t < shift {
            self.base.v0()
        } else {
            self.base.at(t - shift)
        }
    }
}

/// `V(t; α) = V0·e^(−λ·α·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeCompression {
    base: Exponential,
}

impl TimeCompression {
    #[must_use]
    pub fn new(params: &Params) -> Self {
        Self {
            base: Exponential::from_params(params),
        }
    }
}

impl ValueCurve for TimeCompression {
    fn value(&self, t: f64, alpha: f64) -> f64 {
        self.base.at(alpha * t)
    }
}
