//! Per-robot fault model (spec §4.2.2).
//!
//! Fault progression is `Inactive -> Active -> Triggered -> Resolved`,
//! with an independent Bernoulli(`fault_probability`) trial re-rolled at
//! each action point once a robot is `Active` or `Resolved`. `Crash` is
//! absorbing: once triggered it never resolves.

use super::{FaultKind, FaultStatus, Robot};
use crate::geometry::Coordinates;
use crate::rng::SimRng;

/// First LOOK of a faulty robot moves it out of `Inactive`, then rolls
/// for a trigger and applies the LOOK-time effect (CRASH's terminal
/// absorption, or stashing the halved speed/visibility for a transient
/// fault). Call before the robot's snapshot is filtered by visibility.
pub fn on_look(robot: &mut Robot, rng: &mut SimRng) {
    if robot.fault_kind == FaultKind::None {
        return;
    }
    if robot.fault_status == FaultStatus::Inactive {
        robot.fault_status = FaultStatus::Active;
    }
    if !trigger(robot, rng) {
        return;
    }
    match robot.fault_kind {
        FaultKind::Crash => {
            robot.frozen = true;
            robot.terminated = true;
        }
        FaultKind::Delay => {
            if robot.fault_saved_speed.is_none() {
                robot.fault_saved_speed = Some(robot.speed);
                robot.speed /= 2.0;
            }
        }
        FaultKind::Visibility => {
            if robot.fault_saved_visibility_radius.is_none() {
                robot.fault_saved_visibility_radius = Some(robot.visibility_radius);
                robot.visibility_radius = robot.visibility_radius.map(|r| r / 2.0);
            }
        }
        FaultKind::Byzantine | FaultKind::Movement | FaultKind::None => {}
    }
}

/// VISIBILITY, while triggered, additionally drops a random half of the
/// already-filtered visible peers (never self) from the robot's
/// snapshot.
pub fn drop_half_visible_peers(robot: &mut Robot, rng: &mut SimRng) {
    if robot.fault_kind != FaultKind::Visibility || robot.fault_status != FaultStatus::Triggered {
        return;
    }
    let self_id = robot.id;
    let mut peer_ids: Vec<i64> = robot
        .snapshot
        .keys()
        .copied()
        .filter(|id| *id != self_id)
        .collect();
    rng.shuffle(&mut peer_ids);
    let drop_count = peer_ids.len() / 2;
    for id in peer_ids.into_iter().take(drop_count) {
        robot.snapshot.remove(&id);
    }
}

/// BYZANTINE and MOVEMENT perturb `calculated_position` right after
/// COMPUTE has produced it.
pub fn on_compute(robot: &mut Robot, rng: &mut SimRng) {
    if robot.fault_status != FaultStatus::Triggered {
        return;
    }
    let Some(pos) = robot.calculated_position else {
        return;
    };
    match robot.fault_kind {
        FaultKind::Byzantine => {
            let fx = rng.uniform_range(0.8, 1.2);
            let fy = rng.uniform_range(0.8, 1.2);
            robot.calculated_position = Some(Coordinates::new(pos.x * fx, pos.y * fy));
        }
        FaultKind::Movement => {
            robot.calculated_position = Some(-pos);
        }
        FaultKind::None | FaultKind::Crash | FaultKind::Delay | FaultKind::Visibility => {}
    }
}

/// Clears a transient fault's stashed state at the WAIT boundary and
/// moves `Triggered -> Resolved`, so the next action point re-rolls the
/// Bernoulli trial.
pub fn on_wait(robot: &mut Robot) {
    if robot.fault_status != FaultStatus::Triggered {
        return;
    }
    match robot.fault_kind {
        FaultKind::Delay => {
            if let Some(saved) = robot.fault_saved_speed.take() {
                robot.speed = saved;
            }
            robot.fault_status = FaultStatus::Resolved;
        }
        FaultKind::Visibility => {
            if let Some(saved) = robot.fault_saved_visibility_radius.take() {
                robot.visibility_radius = saved;
            }
            robot.fault_status = FaultStatus::Resolved;
        }
        FaultKind::Byzantine | FaultKind::Movement => {
            robot.fault_status = FaultStatus::Resolved;
        }
        FaultKind::Crash | FaultKind::None => {}
    }
}

/// Independent Bernoulli(`fault_probability`) trial, rolled only while
/// the robot is eligible to newly trigger (`Active` or `Resolved`, i.e.
/// not already mid-fault and not permanently `Crash`ed).
fn trigger(robot: &mut Robot, rng: &mut SimRng) -> bool {
    match robot.fault_status {
        FaultStatus::Triggered => true,
        FaultStatus::Active | FaultStatus::Resolved => {
            if rng.bernoulli(robot.fault_probability) {
                robot.fault_status = FaultStatus::Triggered;
                true
            } else {
                false
            }
        }
        FaultStatus::Inactive => false,
    }
}
