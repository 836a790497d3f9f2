//! Value, discount, and utility functions for the Hedon animations.
//!
//! The math here is pure: nothing in this crate knows about grids, sweeps, or
//! rendering. [`Utility`] ties a [`ValueCurve`] to a [`Discount`] and exposes
//! the product as a [`hedon_core::Model`].

mod discount;
mod impulse;
mod params;
mod utility;

pub mod value;

pub use discount::Discount;
pub use impulse::Impulse;
pub use params::{Params, ParamsError};
pub use utility::{Utility, UtilityError};
pub use value::{Exponential, ImmediateReward, LeftShift, TimeCompression, ValueCurve};
