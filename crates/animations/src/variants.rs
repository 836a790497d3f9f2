//! The three perturbation animations.
//!
//! All three share the same constants: `V0 = 1`, `k = 1`, `λ = 0.5`, a time
//! grid of 500 points on `[0, 20]`, and a 40-frame sweep.

use hedon_core::Grid;
use hedon_models::{ImmediateReward, LeftShift, Params, TimeCompression};
use hedon_observers::Figure;

use crate::{Animation, Error};

/// Number of frames in every sweep.
pub const FRAMES: usize = 40;

const T_END: f64 = 20.0;
const T_POINTS: usize = 500;

const X_LABEL: &str = "Time (t)";
const Y_LABEL: &str = "Instantaneous Utility";

fn time_grid() -> Result<Grid, Error> {
    Ok(Grid::linspace(0.0, T_END, T_POINTS)?)
}

fn figure(x_end: f64, y_end: f64) -> Result<Figure, Error> {
    Ok(Figure::new(0.0..x_end, 0.0..y_end)?
        .x_label(X_LABEL)
        .y_label(Y_LABEL)
        .fps(10))
}

/// An impulse of magnitude `R ∈ [0, 2]` injected at `t = 0`.
///
/// # Errors
///
/// Returns an error if the built-in constants fail validation.
pub fn immediate_reward() -> Result<Animation<ImmediateReward>, Error> {
    let params = Params::default();

    Ok(Animation {
        name: "immediate reward",
        output: "immediate_reward_utility.gif",
        value: ImmediateReward::new(&params),
        params,
        grid: time_grid()?,
        sweep: Grid::linspace(0.0, 2.0, FRAMES)?,
        figure: figure(5.0, 3.0)?,
        title: |r| format!("Immediate Reward R = {r:.2}"),
    })
}

/// The value function held at `V0` until `τ ∈ [0, 5]`, then decaying.
///
/// # Errors
///
/// Returns an error if the built-in constants fail validation.
pub fn left_shift() -> Result<Animation<LeftShift>, Error> {
    let params = Params::default();

    Ok(Animation {
        name: "left shift",
        output: "left_shift_utility.gif",
        value: LeftShift::new(&params),
        params,
        grid: time_grid()?,
        sweep: Grid::linspace(0.0, 5.0, FRAMES)?,
        figure: figure(T_END, 1.0)?,
        title: |tau| format!("Shift τ = {tau:.2}"),
    })
}

/// Time compressed by `α`, swept from 1.0 down to 0.2.
///
/// # Errors
///
/// Returns an error if the built-in constants fail validation.
pub fn time_compression() -> Result<Animation<TimeCompression>, Error> {
    let params = Params::default();

    Ok(Animation {
        name: "time compression",
        output: "time_compression_utility.gif",
        value: TimeCompression::new(&params),
        params,
        grid: time_grid()?,
        sweep: Grid::linspace(1.0, 0.2, FRAMES)?,
        figure: figure(T_END, 1.0)?,
        title: |alpha| format!("Time Compression: α = {alpha:.2}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use hedon_models::ValueCurve;
    use hedon_solvers::sweep::{self, Event, Frame, Status};

    fn frames<V: ValueCurve + Clone>(animation: &Animation<V>) -> Vec<(f64, Frame)> {
        let mut frames = Vec::new();
        let solution = sweep::solve(
            &animation.utility(),
            animation.grid(),
            animation.sweep(),
            |event: &Event<'_>| {
                frames.push((event.param, event.frame.clone()));
                None
            },
        )
        .expect("sweep should succeed");

        assert_eq!(solution.status, Status::Complete);
        frames
    }

    fn discounted_decay(t: f64) -> f64 {
        (-0.5 * t).exp() / (1.0 + t)
    }

    #[test]
    fn every_variant_renders_forty_frames() {
        assert_eq!(frames(&immediate_reward().unwrap()).len(), FRAMES);
        assert_eq!(frames(&left_shift().unwrap()).len(), FRAMES);
        assert_eq!(frames(&time_compression().unwrap()).len(), FRAMES);
    }

    #[test]
    fn every_frame_uses_the_shared_time_grid() {
        let animation = left_shift().unwrap();
        for (_, frame) in frames(&animation) {
            assert_eq!(frame.t(), animation.grid().values());
            assert_eq!(frame.points().count(), 500);
        }
    }

    #[test]
    fn sweeps_match_their_ranges() {
        let reward = immediate_reward().unwrap();
        let shift = left_shift().unwrap();
        let compression = time_compression().unwrap();

        assert_eq!(reward.sweep().values()[0], 0.0);
        assert_eq!(reward.sweep().values()[FRAMES - 1], 2.0);
        assert_eq!(shift.sweep().values()[FRAMES - 1], 5.0);
        assert_eq!(compression.sweep().values()[0], 1.0);
        assert_eq!(compression.sweep().values()[FRAMES - 1], 0.2);
    }

    #[test]
    fn first_reward_frame_is_plain_discounted_decay() {
        let (r, frame) = frames(&immediate_reward().unwrap()).remove(0);

        assert_eq!(r, 0.0);
        for (t, u) in frame.points() {
            assert_relative_eq!(u, discounted_decay(t), max_relative = 1e-15);
        }
    }

    #[test]
    fn shift_frames_hold_until_tau() {
        for (tau, frame) in frames(&left_shift().unwrap()) {
            for (t, u) in frame.points() {
                let v = if t < tau { 1.0 } else { (-0.5 * (t - tau)).exp() };
                assert_relative_eq!(u, v / (1.0 + t), max_relative = 1e-15);
            }
        }
    }

    #[test]
    fn compression_slows_decay_frame_over_frame() {
        let frames = frames(&time_compression().unwrap());

        for (t, u) in frames[0].1.points() {
            assert_relative_eq!(u, discounted_decay(t), max_relative = 1e-15);
        }
        for pair in frames.windows(2) {
            for ((t, before), (_, after)) in pair[0].1.points().zip(pair[1].1.points()) {
                if t > 0.0 {
                    assert!(after > before, "U({t}) did not increase as α decreased");
                }
            }
        }
    }

    #[test]
    fn reruns_are_identical() {
        let animation = immediate_reward().unwrap();
        assert_eq!(frames(&animation), frames(&animation));
    }

    #[test]
    fn titles_use_two_decimals() {
        assert_eq!(immediate_reward().unwrap().title(0.0512), "Immediate Reward R = 0.05");
        assert_eq!(left_shift().unwrap().title(5.0), "Shift τ = 5.00");
        assert_eq!(
            time_compression().unwrap().title(0.979_487),
            "Time Compression: α = 0.98"
        );
    }

    #[test]
    fn figures_match_the_axis_windows() {
        let reward = immediate_reward().unwrap();
        assert_eq!(reward.figure().x_range(), 0.0..5.0);
        assert_eq!(reward.figure().y_range(), 0.0..3.0);
        assert_eq!(reward.figure().frame_delay_ms(), 100);

        let compression = time_compression().unwrap();
        assert_eq!(compression.figure().x_range(), 0.0..20.0);
        assert_eq!(compression.figure().y_range(), 0.0..1.0);
        assert_eq!(compression.figure().x_desc(), "Time (t)");
        assert_eq!(compression.figure().y_desc(), "Instantaneous Utility");
    }

    #[test]
    fn output_names() {
        assert_eq!(immediate_reward().unwrap().output(), "immediate_reward_utility.gif");
        assert_eq!(left_shift().unwrap().output(), "left_shift_utility.gif");
        assert_eq!(time_compression().unwrap().output(), "time_compression_utility.gif");
    }
}
