#![cfg(test)]

use super::*;
use crate::config::{InitialPosition, ProbabilityDistribution, SchedulerType, SimulationConfig, SpeedSpec};
use crate::robot::Algorithm;

fn gathering_config(positions: Vec<(f64, f64)>) -> SimulationConfig {
    SimulationConfig {
        seed: 1,
        num_of_robots: positions.len(),
        initial_positions: positions
            .into_iter()
            .map(|(x, y)| InitialPosition { x, y })
            .collect(),
        width_bound: 10.0,
        height_bound: 10.0,
        robot_speeds: SpeedSpec::Broadcast(1.0),
        visibility_radius: None,
        rigid_movement: true,
        multiplicity_detection: false,
        obstructed_visibility: false,
        scheduler_type: SchedulerType::Async,
        probability_distribution: ProbabilityDistribution::Exponential,
        time_precision: 5,
        threshold_precision: 5,
        sampling_rate: 0.2,
        lambda_rate: 5.0,
        algorithm: Algorithm::Gathering,
        robot_faults: None,
    }
}

#[test]
fn new_enqueues_one_look_per_robot_plus_visualization_tick() {
    let config = gathering_config(vec![(0.0, 0.0), (6.0, 0.0), (3.0, 6.0)]);
    let scheduler = Scheduler::new(&config, None);
    assert_eq!(scheduler.queue.len(), 4);
    assert_eq!(scheduler.robots.len(), 3);
}

#[test]
fn round_to_matches_configured_precision() {
    assert!((round_to(1.23456, 2) - 1.23).abs() < 1e-12);
    assert!((round_to(1.995, 2) - 2.0).abs() < 1e-12);
}

#[test]
fn visualization_tick_returns_exit_code_zero() {
    let config = gathering_config(vec![(0.0, 0.0), (6.0, 0.0)]);
    let mut scheduler = Scheduler::new(&config, None);
    // The visualization tick at t=0 sorts before any exponential arrival.
    let code = scheduler.handle_event();
    assert_eq!(code, 0);
    assert_eq!(scheduler.history.visualization_snapshots.len(), 1);
}

#[test]
fn three_robot_gathering_converges_to_centroid() {
    let config = gathering_config(vec![(0.0, 0.0), (6.0, 0.0), (3.0, 6.0)]);
    let mut scheduler = Scheduler::new(&config, None);
    scheduler.run();

    for robot in &scheduler.robots {
        assert!(robot.terminated);
        assert!(robot.frozen);
        assert!((robot.coordinates.x - 3.0).abs() < 1e-4);
        assert!((robot.coordinates.y - 2.0).abs() < 1e-4);
    }
}

#[test]
fn crash_fault_terminates_robot_zero_immediately() {
    let mut config = gathering_config(vec![(0.0, 0.0), (6.0, 0.0), (3.0, 6.0)]);
    config.robot_faults = Some(vec![
        crate::config::RobotFaultConfig {
            fault_kind: crate::robot::FaultKind::Crash,
            probability: 1.0,
        },
        crate::config::RobotFaultConfig {
            fault_kind: crate::robot::FaultKind::None,
            probability: 0.0,
        },
        crate::config::RobotFaultConfig {
            fault_kind: crate::robot::FaultKind::None,
            probability: 0.0,
        },
    ]);
    let mut scheduler = Scheduler::new(&config, None);
    scheduler.run();

    assert!(scheduler.robots[0].terminated);
    assert!(scheduler.robots[0].frozen);
}

#[test]
fn event_times_are_monotonically_non_decreasing() {
    let config = gathering_config(vec![(0.0, 0.0), (10.0, 0.0)]);
    let mut scheduler = Scheduler::new(&config, None);
    let mut last = f64::MIN;
    loop {
        let Some(event) = scheduler.queue.pop() else {
            break;
        };
        assert!(event.time >= last - 1e-9);
        last = event.time;
    }
}
