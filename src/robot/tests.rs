#![cfg(test)]

use super::*;
use crate::geometry::Coordinates;
use crate::rng::SimRng;

fn make_robot(id: i64, pos: Coordinates) -> Robot {
    Robot::new(
        id,
        pos,
        1.0,
        true,
        None,
        false,
        false,
        Algorithm::Gathering,
        FaultKind::None,
        0.0,
    )
}

#[test]
fn state_machine_cycles_wait_look_move_wait() {
    assert_eq!(RobotState::Wait.next(), Some(RobotState::Look));
    assert_eq!(RobotState::Look.next(), Some(RobotState::Move));
    assert_eq!(RobotState::Move.next(), Some(RobotState::Wait));
    assert_eq!(RobotState::Terminated.next(), None);
}

#[test]
fn look_includes_self_in_snapshot() {
    let mut r = make_robot(0, Coordinates::new(1.0, 1.0));
    let mut rng = SimRng::from_seed(1);
    let mut global = BTreeMap::new();
    global.insert(
        0,
        SnapshotDetails {
            pos: r.coordinates,
            state: RobotState::Wait,
            frozen: false,
            terminated: false,
            multiplicity: 1,
        },
    );
    r.look(&global, 0.0, 10, &mut rng);
    assert!(r.snapshot.contains_key(&0));
}

#[test]
fn visibility_radius_excludes_far_peers() {
    let r = make_robot(0, Coordinates::zero());
    let mut r = r;
    r.visibility_radius = Some(5.0);
    let mut global = BTreeMap::new();
    global.insert(
        1,
        SnapshotDetails {
            pos: Coordinates::new(100.0, 0.0),
            state: RobotState::Wait,
            frozen: false,
            terminated: false,
            multiplicity: 1,
        },
    );
    assert!(!r.sees(1, &Coordinates::new(100.0, 0.0), &global));
}

#[test]
fn occlusion_blocks_collinear_peer() {
    let mut r = make_robot(0, Coordinates::zero());
    r.obstructed_visibility = true;
    let mut global = BTreeMap::new();
    global.insert(
        1,
        SnapshotDetails {
            pos: Coordinates::new(10.0, 0.0),
            state: RobotState::Wait,
            frozen: false,
            terminated: false,
            multiplicity: 1,
        },
    );
    global.insert(
        2,
        SnapshotDetails {
            pos: Coordinates::new(5.0, 0.0),
            state: RobotState::Wait,
            frozen: false,
            terminated: false,
            multiplicity: 1,
        },
    );
    assert!(!r.sees(1, &Coordinates::new(10.0, 0.0), &global));
}

#[test]
fn gathering_target_is_mean_of_snapshot() {
    let mut r = make_robot(0, Coordinates::new(0.0, 0.0));
    r.snapshot.insert(
        0,
        SnapshotDetails {
            pos: Coordinates::new(0.0, 0.0),
            state: RobotState::Look,
            frozen: false,
            terminated: false,
            multiplicity: 1,
        },
    );
    r.snapshot.insert(
        1,
        SnapshotDetails {
            pos: Coordinates::new(3.0, 0.0),
            state: RobotState::Wait,
            frozen: false,
            terminated: false,
            multiplicity: 1,
        },
    );
    r.snapshot.insert(
        2,
        SnapshotDetails {
            pos: Coordinates::new(0.0, 3.0),
            state: RobotState::Wait,
            frozen: false,
            terminated: false,
            multiplicity: 1,
        },
    );
    let mut rng = SimRng::from_seed(7);
    let target = r.compute(6, &mut rng);
    assert!((target.x - 1.0).abs() < 1e-9);
    assert!((target.y - 1.0).abs() < 1e-9);
}

#[test]
fn frozen_robot_collapses_move_into_wait() {
    let mut r = make_robot(0, Coordinates::new(2.0, 2.0));
    let mut global = BTreeMap::new();
    global.insert(
        0,
        SnapshotDetails {
            pos: r.coordinates,
            state: RobotState::Wait,
            frozen: false,
            terminated: false,
            multiplicity: 1,
        },
    );
    let mut rng = SimRng::from_seed(3);
    r.look(&global, 0.0, 6, &mut rng);
    assert!(r.frozen);
    assert_eq!(r.state, RobotState::Wait);
}

#[test]
fn crash_fault_freezes_and_terminates_on_first_look() {
    let mut r = make_robot(0, Coordinates::zero());
    r.fault_kind = FaultKind::Crash;
    r.fault_probability = 1.0;
    let mut rng = SimRng::from_seed(5);
    let global = BTreeMap::new();
    r.look(&global, 0.0, 6, &mut rng);
    assert!(r.terminated);
    assert!(r.frozen);
}

#[test]
fn delay_fault_halves_and_restores_speed() {
    let mut r = make_robot(0, Coordinates::zero());
    r.fault_kind = FaultKind::Delay;
    r.fault_probability = 1.0;
    let mut rng = SimRng::from_seed(9);
    fault::on_look(&mut r, &mut rng);
    assert_eq!(r.fault_status, FaultStatus::Triggered);
    assert!((r.speed - 0.5).abs() < 1e-12);
    r.fault_status = FaultStatus::Triggered;
    fault::on_wait(&mut r);
    assert_eq!(r.fault_status, FaultStatus::Resolved);
    assert!((r.speed - 1.0).abs() < 1e-12);
}

#[test]
fn byzantine_perturbs_calculated_position_after_compute() {
    let mut r = make_robot(0, Coordinates::new(1.0, 1.0));
    r.fault_kind = FaultKind::Byzantine;
    r.fault_probability = 1.0;
    r.fault_status = FaultStatus::Triggered;
    r.calculated_position = Some(Coordinates::new(2.0, 2.0));
    let mut rng = SimRng::from_seed(11);
    fault::on_compute(&mut r, &mut rng);
    let perturbed = r.calculated_position.unwrap();
    assert!(perturbed.x >= 1.6 && perturbed.x <= 2.4);
    assert!(perturbed.y >= 1.6 && perturbed.y <= 2.4);
}

#[test]
fn movement_fault_negates_calculated_position() {
    let mut r = make_robot(0, Coordinates::zero());
    r.fault_kind = FaultKind::Movement;
    r.fault_status = FaultStatus::Triggered;
    r.calculated_position = Some(Coordinates::new(3.0, -4.0));
    let mut rng = SimRng::from_seed(13);
    fault::on_compute(&mut r, &mut rng);
    assert_eq!(r.calculated_position, Some(Coordinates::new(-3.0, 4.0)));
}

#[test]
fn terminated_robot_ignores_further_look() {
    let mut r = make_robot(0, Coordinates::zero());
    r.terminated = true;
    r.number_of_activations = 3;
    let mut rng = SimRng::from_seed(2);
    let global = BTreeMap::new();
    r.look(&global, 5.0, 6, &mut rng);
    assert_eq!(r.number_of_activations, 4);
    assert!(r.snapshot.is_empty());
}

#[test]
fn rigid_move_arrives_exactly_at_target() {
    let mut r = make_robot(0, Coordinates::zero());
    r.calculated_position = Some(Coordinates::new(10.0, 0.0));
    r.start_move(0.0);
    let pos = r.get_position(10.0);
    assert!((pos.x - 10.0).abs() < 1e-9);
    assert!((pos.y).abs() < 1e-9);
}

#[test]
fn wait_accumulates_travelled_distance() {
    let mut r = make_robot(0, Coordinates::zero());
    r.calculated_position = Some(Coordinates::new(3.0, 4.0));
    r.start_move(0.0);
    r.wait(5.0);
    assert!((r.travelled_distance - 5.0).abs() < 1e-9);
    assert_eq!(r.state, RobotState::Wait);
}
