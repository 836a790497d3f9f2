//! Animated visualizations of a discounted-utility curve.
//!
//! Each animation sweeps one parameter of the value function `V(t)`, computes
//! the instantaneous utility `U(t) = V(t)·W(t)` with `W(t) = 1 / (1 + k·t)`
//! over a fixed time grid, and writes one GIF frame per parameter value:
//!
//! - [`immediate_reward`] — an impulse reward of magnitude `R` at `t = 0`
//! - [`left_shift`] — the value function shifted left by `τ`
//! - [`time_compression`] — time scaled by a factor `α`
//!
//! Each has a matching binary that writes its GIF to the working directory.

mod animation;
mod error;
mod variants;

pub use animation::Animation;
pub use error::Error;
pub use variants::{FRAMES, immediate_reward, left_shift, time_compression};

use tracing_subscriber::{EnvFilter, fmt};

/// Initializes logging to stderr.
///
/// Use the `RUST_LOG` environment variable to override the default filter,
/// which is `warn` so that a normal run stays quiet.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
