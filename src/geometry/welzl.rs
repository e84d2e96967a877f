//! Smallest Enclosing Circle via Welzl's randomized incremental algorithm
//! (spec §4.1).
//!
//! Implemented as the usual iterative "move-to-front" incremental
//! construction rather than the textbook per-point recursion: the
//! expected running time is the same O(n), but recursion depth here is
//! bounded at 3 instead of growing with the input size, which matters
//! once a swarm has more than a few hundred robots.

use super::math::{circle_from_three, circle_from_two, distance};
use super::{Circle, Coordinates};
use crate::error::GeometryError;
use crate::rng::SimRng;

const SEC_EPSILON: f64 = 1e-7;

/// The smallest circle enclosing every point in `points`. Randomness
/// (the initial shuffle) is drawn from the simulation's shared RNG so
/// the result is deterministic under the global seed, per spec §5/§9.
pub fn smallest_enclosing_circle(points: &[Coordinates], rng: &mut SimRng) -> Circle {
    let mut pts = points.to_vec();
    rng.shuffle(&mut pts);

    match pts.len() {
        0 => return Circle::new(Coordinates::zero(), 0.0),
        1 => return Circle::new(pts[0], 0.0),
        _ => {}
    }

    // Starts from the uninitialized `-1`-radius sentinel (spec §3's data
    // model) rather than pre-seeding with `pts[0]`: the sentinel's
    // negative radius makes `contains` false for every point, so the
    // first iteration naturally forces the boundary onto `pts[0]` like
    // every later point forces it onto `pts[i]`.
    let mut circle = Circle::sentinel();
    for i in 0..pts.len() {
        if circle.contains(&pts[i], SEC_EPSILON) {
            continue;
        }
        circle = Circle::new(pts[i], 0.0);
        for j in 0..i {
            if circle.contains(&pts[j], SEC_EPSILON) {
                continue;
            }
            circle = circle_from_two(&pts[i], &pts[j]);
            for k in 0..j {
                if circle.contains(&pts[k], SEC_EPSILON) {
                    continue;
                }
                circle = circle_through_three_or_fallback(&pts[i], &pts[j], &pts[k]);
            }
        }
    }
    circle
}

/// The circumcircle of three points, falling back to the two-point
/// circle over the farthest-apart pair when the three are collinear
/// (spec §7, `CollinearPoints` is consumed locally and never escapes
/// this module).
fn circle_through_three_or_fallback(a: &Coordinates, b: &Coordinates, c: &Coordinates) -> Circle {
    match circle_from_three(a, b, c) {
        Ok(circle) => circle,
        Err(GeometryError::CollinearPoints) => {
            let pts = [a, b, c];
            let mut best = (0, 1);
            let mut best_d = distance(pts[0], pts[1]);
            for (i, j) in [(0usize, 2usize), (1, 2)] {
                let d = distance(pts[i], pts[j]);
                if d > best_d {
                    best_d = d;
                    best = (i, j);
                }
            }
            circle_from_two(pts[best.0], pts[best.1])
        }
    }
}
