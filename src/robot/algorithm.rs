//! Algorithm dispatch (spec §4.2, Design Notes §9): each [`super::Algorithm`]
//! variant resolves once, at construction, to a `(compute, terminal)`
//! function pair rather than being matched on inside the scheduler's hot
//! loop.

use super::{Algorithm, Robot};
use crate::geometry::{closest_point_on_circle, distance, is_point_on_circle, smallest_enclosing_circle, Circle, Coordinates};
use crate::rng::SimRng;

/// Extra data a `compute` step may hand to its matching `terminal`
/// predicate. Gathering needs none; SEC needs the circle it computed so
/// the terminal check (and the final SEC report) can reuse it without
/// recomputing.
#[derive(Debug, Clone, Copy)]
pub enum AlgoExtra {
    None,
    Sec(Circle),
}

pub type ComputeFn = fn(&Robot, &mut SimRng) -> (Coordinates, AlgoExtra);
pub type TerminalFn = fn(&Robot, &Coordinates, &AlgoExtra, u32) -> bool;

pub struct AlgorithmOps {
    pub compute: ComputeFn,
    pub terminal: TerminalFn,
}

impl Algorithm {
    pub fn ops(self) -> AlgorithmOps {
        match self {
            Algorithm::Gathering => AlgorithmOps {
                compute: gathering_compute,
                terminal: gathering_terminal,
            },
            Algorithm::Sec => AlgorithmOps {
                compute: sec_compute,
                terminal: sec_terminal,
            },
        }
    }
}

/// A crashed peer occupies its last position forever; both algorithms
/// drop it from their own computation once it's known terminated,
/// rather than dragging the whole swarm's target toward a robot that
/// will never move again (spec §8 scenario F1: the surviving robots
/// gather at their own midpoint, not the full-swarm centroid including
/// the crashed one).
fn live_positions(robot: &Robot) -> impl Iterator<Item = &Coordinates> {
    robot
        .snapshot
        .values()
        .filter(|details| !details.terminated)
        .map(|details| &details.pos)
}

/// Target = arithmetic mean of every visible, non-terminated peer's
/// position, including self (spec §4.2, Open Question (i) resolved YES
/// in spec.md). The robot's own entry is always present in
/// `robot.snapshot` — see [`super::lifecycle::look`] — and is never
/// itself `terminated` at compute time, since a terminated robot never
/// reaches `compute` (spec invariant I3).
fn gathering_compute(robot: &Robot, _rng: &mut SimRng) -> (Coordinates, AlgoExtra) {
    let mut sum = Coordinates::zero();
    let mut n = 0.0;
    for pos in live_positions(robot) {
        sum = sum + *pos;
        n += 1.0;
    }
    (sum / n, AlgoExtra::None)
}

/// Terminal when every visible, non-terminated peer is within ε of the
/// gathering target.
fn gathering_terminal(robot: &Robot, target: &Coordinates, _extra: &AlgoExtra, precision: u32) -> bool {
    let epsilon = 10f64.powi(-(precision as i32));
    live_positions(robot).all(|pos| distance(pos, target) < epsilon)
}

/// Target = the point on the boundary of the SEC of every visible,
/// non-terminated peer (including self) closest to the robot's current
/// position.
fn sec_compute(robot: &Robot, rng: &mut SimRng) -> (Coordinates, AlgoExtra) {
    let points: Vec<Coordinates> = live_positions(robot).copied().collect();
    let circle = smallest_enclosing_circle(&points, rng);
    let target = closest_point_on_circle(&circle, &robot.coordinates);
    (target, AlgoExtra::Sec(circle))
}

/// Terminal when every visible, non-terminated peer lies on the SEC
/// boundary within ε.
fn sec_terminal(robot: &Robot, _target: &Coordinates, extra: &AlgoExtra, precision: u32) -> bool {
    match extra {
        AlgoExtra::Sec(circle) => live_positions(robot).all(|pos| is_point_on_circle(pos, circle, precision)),
        AlgoExtra::None => false,
    }
}
