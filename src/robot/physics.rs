//! Continuous-time position interpolation and visibility (spec §4.2,
//! §4.2.1).

use super::{Robot, RobotState, SnapshotDetails};
use crate::geometry::{distance, interpolate, Coordinates};
use std::collections::BTreeMap;

/// Tolerance used only to snap a MOVE onto its target once it has
/// arrived; independent of the configured `threshold_precision` so that
/// `get_position` stays a pure function of its documented inputs.
const ARRIVAL_EPSILON: f64 = 1e-9;

/// The occlusion tolerance from spec §4.2.1 (v2): a third robot blocks
/// line-of-sight when the detour through it adds less than this to the
/// straight-line distance.
const OCCLUSION_EPSILON: f64 = 0.1;

impl Robot {
    /// The robot's position at `time`, interpolating along the current
    /// MOVE segment if one is in progress.
    ///
    /// Pure function of `(state, start_time, start_position,
    /// calculated_position, speed, time)` per spec §4.2 — it never reads
    /// or writes any other field.
    pub fn get_position(&self, time: f64) -> Coordinates {
        match self.state {
            RobotState::Look | RobotState::Wait | RobotState::Terminated => self.coordinates,
            RobotState::Move => {
                let target = self
                    .calculated_position
                    .expect("invariant I1: MOVE state requires calculated_position");
                let start_time = self
                    .start_time
                    .expect("invariant I1: MOVE state requires start_time");

                let d = distance(&self.start_position, &target);
                if d <= ARRIVAL_EPSILON {
                    return target;
                }

                let covered = self.speed * (time - start_time);
                if covered >= d - ARRIVAL_EPSILON {
                    target
                } else {
                    interpolate(&self.start_position, &target, covered / d)
                }
            }
        }
    }

    /// True iff a peer at `peer_pos` (a robot other than `self`, with id
    /// `peer_id`) is visible, per spec §4.2.1. `global` is the same
    /// whole-swarm snapshot the scheduler hands to `look`, used here only
    /// as the source of candidate occluders.
    pub fn sees(
        &self,
        peer_id: i64,
        peer_pos: &Coordinates,
        global: &BTreeMap<i64, SnapshotDetails>,
    ) -> bool {
        if let Some(radius) = self.visibility_radius {
            if distance(&self.coordinates, peer_pos) > radius {
                return false;
            }
        }

        if self.obstructed_visibility {
            for (&occluder_id, occluder) in global {
                if occluder_id == self.id || occluder_id == peer_id {
                    continue;
                }
                if lies_on_segment(&self.coordinates, peer_pos, &occluder.pos) {
                    return false;
                }
            }
        }

        true
    }
}

/// True iff `c` lies on the open segment `(a, b)`, within the spec's
/// occlusion tolerance: the detour length `d(a,c) + d(c,b) - d(a,b)` is
/// smaller than `OCCLUSION_EPSILON`.
fn lies_on_segment(a: &Coordinates, b: &Coordinates, c: &Coordinates) -> bool {
    (distance(a, c) + distance(c, b) - distance(a, b)).abs() < OCCLUSION_EPSILON
}
