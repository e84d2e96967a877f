//! The LOOK-COMPUTE-MOVE-WAIT cycle (spec §4.2).
//!
//! Per Design Notes §9 (Open Question ii), a robot whose COMPUTE yields a
//! target within ε of its current position never gets a MOVE event at
//! all: `look` calls `wait` in-line and the scheduler's next scheduled
//! event for that robot is the following LOOK.

use super::fault;
use super::{FaultStatus, Robot, RobotState, SnapshotDetails};
use crate::geometry::{distance, Coordinates};
use crate::rng::SimRng;
use std::collections::BTreeMap;

impl Robot {
    /// Filters `global` (every robot's position/state at `time`, as
    /// produced by the scheduler's snapshot assembly) down to what this
    /// robot can see, runs COMPUTE in-line, and freezes-and-waits
    /// immediately when the result is already within ε of the current
    /// position.
    pub fn look(
        &mut self,
        global: &BTreeMap<i64, SnapshotDetails>,
        time: f64,
        threshold_precision: u32,
        rng: &mut SimRng,
    ) {
        fault::on_look(self, rng);
        self.state = RobotState::Look;
        self.number_of_activations += 1;

        if self.terminated {
            // CRASH triggered above; invariant I3 — no further transitions.
            return;
        }

        let mut filtered: BTreeMap<i64, SnapshotDetails> = global
            .iter()
            .filter(|&(&id, details)| id != self.id && self.sees(id, &details.pos, global))
            .map(|(&id, &details)| (id, details))
            .collect();

        filtered.insert(
            self.id,
            SnapshotDetails {
                pos: self.coordinates,
                state: self.state,
                frozen: self.frozen,
                terminated: self.terminated,
                multiplicity: self.multiplicity,
            },
        );
        self.snapshot = filtered;
        fault::drop_half_visible_peers(self, rng);

        let target = self.compute(threshold_precision, rng);

        let epsilon = 10f64.powi(-(threshold_precision as i32));
        if distance(&self.coordinates, &target) < epsilon {
            self.frozen = true;
            self.wait(time);
        } else {
            self.frozen = false;
        }
    }

    /// Runs the robot's algorithm to obtain a target, evaluates its
    /// terminal predicate against the *pre-fault* target (spec §4.2: the
    /// terminal check reflects true convergence, not an adversarial
    /// robot's own corrupted belief), then applies any BYZANTINE/MOVEMENT
    /// perturbation to the stored `calculated_position` (spec §4.2.2:
    /// faults act "after COMPUTE"). Returns the final (possibly
    /// perturbed) target.
    pub fn compute(&mut self, threshold_precision: u32, rng: &mut SimRng) -> Coordinates {
        let ops = self.algorithm.ops();
        let (target, extra) = (ops.compute)(self, rng);

        if (ops.terminal)(self, &target, &extra, threshold_precision) {
            self.terminated = true;
        }

        self.calculated_position = Some(target);
        fault::on_compute(self, rng);
        self.calculated_position.expect("just set above")
    }

    /// Anchors a MOVE at `time`. The scheduler computes the completion
    /// time (rigid arrival, or a sampled non-rigid stop fraction) and
    /// schedules the matching WAIT event; this method only records where
    /// and when the segment began.
    pub fn start_move(&mut self, time: f64) {
        self.state = RobotState::Move;
        self.start_time = Some(time);
        self.start_position = self.coordinates;
    }

    /// Resolves the robot's position at `time`, folds the realized
    /// segment into `travelled_distance`, rebases for the next cycle,
    /// and resolves any transient fault whose effect was scoped to this
    /// WAIT boundary.
    pub fn wait(&mut self, time: f64) {
        let resolved = self.get_position(time);
        let segment = distance(&self.start_position, &resolved);
        self.travelled_distance += segment;

        self.coordinates = resolved;
        self.start_position = resolved;
        self.start_time = None;
        self.end_time = None;
        self.state = RobotState::Wait;

        if self.fault_status == FaultStatus::Triggered {
            fault::on_wait(self);
        }
    }
}
