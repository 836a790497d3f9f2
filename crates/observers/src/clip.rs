//! Clipping of polylines to a rectangular plot window.
//!
//! Curves routinely leave the visible axis window (the reward spike at the
//! origin is far taller than the y range). Rather than let the backend draw
//! outside the plotting area, lines are cut at the window edge: the result is
//! one or more visible runs, each a polyline fully inside the window.

use std::ops::Range;

type Point = (f64, f64);

/// Clips a polyline to `x × y`, returning its visible runs in order.
///
/// Points inside the window are kept as-is. Where a segment crosses the
/// window boundary, the crossing point is interpolated. A run ends wherever
/// the line leaves the window, and a new run starts where it re-enters.
/// Segments touching a non-finite coordinate are dropped.
#[must_use]
pub fn clip_polyline<I>(points: I, x: &Range<f64>, y: &Range<f64>) -> Vec<Vec<Point>>
where
    I: IntoIterator<Item = Point>,
{
    let mut runs = Vec::new();
    let mut run: Vec<Point> = Vec::new();
    let mut points = points.into_iter();

    let Some(mut prev) = points.next() else {
        return runs;
    };
    let mut single = true;

    for next in points {
        single = false;
        match clip_segment(prev, next, x, y) {
            Some((a, b)) => {
                if run.last() != Some(&a) {
                    flush(&mut runs, &mut run);
                    run.push(a);
                }
                run.push(b);
            }
            None => flush(&mut runs, &mut run),
        }
        prev = next;
    }

    if single && contains(prev, x, y) {
        run.push(prev);
    }
    flush(&mut runs, &mut run);

    runs
}

fn flush(runs: &mut Vec<Vec<Point>>, run: &mut Vec<Point>) {
    if !run.is_empty() {
        runs.push(std::mem::take(run));
    }
}

fn contains(p: Point, x: &Range<f64>, y: &Range<f64>) -> bool {
    (x.start..=x.end).contains(&p.0) && (y.start..=y.end).contains(&p.1)
}

/// Liang–Barsky clipping of one segment.
///
/// Unclipped endpoints are returned bit-for-bit so consecutive segments chain.
fn clip_segment(p0: Point, p1: Point, x: &Range<f64>, y: &Range<f64>) -> Option<(Point, Point)> {
    if ![p0.0, p0.1, p1.0, p1.1].iter().all(|v| v.is_finite()) {
        return None;
    }

    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, p0.0 - x.start),
        (dx, x.end - p0.0),
        (-dy, p0.1 - y.start),
        (dy, y.end - p0.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |s: f64| (p0.0 + s * dx, p0.1 + s * dy);
    let a = if t0 == 0.0 { p0 } else { at(t0) };
    let b = if t1 == 1.0 { p1 } else { at(t1) };

    Some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const X: Range<f64> = 0.0..10.0;
    const Y: Range<f64> = 0.0..1.0;

    #[test]
    fn inside_polyline_is_unchanged() {
        let points = vec![(0.0, 0.5), (1.0, 0.4), (2.0, 0.3), (3.0, 0.2)];
        let runs = clip_polyline(points.clone(), &X, &Y);

        assert_eq!(runs, vec![points]);
    }

    #[test]
    fn spike_above_window_is_cut_at_the_top() {
        // Starts far above the window and falls into it.
        let runs = clip_polyline([(0.0, 3.0), (1.0, 0.5), (2.0, 0.25)], &X, &Y);

        assert_eq!(runs.len(), 1);
        let run = &runs[0];
        assert_eq!(run.len(), 3);
        assert_relative_eq!(run[0].0, 0.8, epsilon = 1e-12);
        assert_relative_eq!(run[0].1, 1.0, epsilon = 1e-12);
        assert_eq!(run[1], (1.0, 0.5));
        assert_eq!(run[2], (2.0, 0.25));
    }

    #[test]
    fn leaving_and_reentering_splits_runs() {
        let runs = clip_polyline(
            [(0.0, 0.5), (1.0, 2.0), (2.0, 2.0), (3.0, 0.5)],
            &X,
            &Y,
        );

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0][0], (0.0, 0.5));
        assert_relative_eq!(runs[0][1].1, 1.0, epsilon = 1e-12);
        assert_relative_eq!(runs[1][0].1, 1.0, epsilon = 1e-12);
        assert_eq!(runs[1][1], (3.0, 0.5));
    }

    #[test]
    fn points_past_x_end_are_truncated() {
        let runs = clip_polyline([(9.0, 0.5), (11.0, 0.3), (12.0, 0.2)], &X, &Y);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 2);
        assert_relative_eq!(runs[0][1].0, 10.0);
        assert_relative_eq!(runs[0][1].1, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn fully_outside_polyline_is_dropped() {
        let runs = clip_polyline([(0.0, 2.0), (1.0, 3.0), (2.0, 4.0)], &X, &Y);
        assert!(runs.is_empty());
    }

    #[test]
    fn single_point() {
        assert_eq!(clip_polyline([(1.0, 0.5)], &X, &Y), vec![vec![(1.0, 0.5)]]);
        assert!(clip_polyline([(1.0, 5.0)], &X, &Y).is_empty());
        assert!(clip_polyline(Vec::<(f64, f64)>::new(), &X, &Y).is_empty());
    }

    #[test]
    fn non_finite_points_break_the_line() {
        let runs = clip_polyline(
            [(0.0, 0.5), (1.0, 0.5), (2.0, f64::NAN), (3.0, 0.5), (4.0, 0.5)],
            &X,
            &Y,
        );

        assert_eq!(runs, vec![vec![(0.0, 0.5), (1.0, 0.5)], vec![(3.0, 0.5), (4.0, 0.5)]]);
    }
}
