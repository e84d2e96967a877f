//! # Scheduler (spec §4.4, §5)
//!
//! Drives the whole simulation: pops the earliest queued event, dispatches
//! it to the named robot's phase method, enqueues the successor event,
//! and periodically assembles snapshots. A run is a pure function of
//! `(seed, configuration)` — the scheduler owns every piece of mutable
//! state the simulation touches (spec §5, §9 "no process-wide
//! singletons").
//!
//! ## Submodules
//!
//! - [`logic`]: `handle_event`, successor-timing rules, the termination
//!   check, and multiplicity-group detection.
//! - [`snapshot_assembly`]: `get_snapshot`, parallelized per-robot
//!   position resampling via rayon.
//! - [`tests`]: unit tests plus the §8 end-to-end scenarios.

pub mod logic;
pub mod snapshot_assembly;
pub mod tests;

use crate::config::SimulationConfig;
use crate::event::EventQueue;
use crate::geometry::{Circle, Coordinates};
use crate::io::event_stream::SimEvent;
use crate::robot::{Algorithm, Robot, RobotState};
use crate::rng::SimRng;
use crate::snapshot::SnapshotHistory;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::sync::Arc;

/// The subset of [`SimulationConfig`] the scheduler's hot loop consults
/// on every event, resolved once at construction so `handle_event` never
/// re-derives them from the raw config.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    pub time_precision: u32,
    pub threshold_precision: u32,
    pub sampling_rate: f64,
    pub lambda_rate: f64,
    pub algorithm: Algorithm,
    pub multiplicity_detection: bool,
}

impl From<&SimulationConfig> for SchedulerConfig {
    fn from(config: &SimulationConfig) -> Self {
        SchedulerConfig {
            time_precision: config.time_precision,
            threshold_precision: config.threshold_precision,
            sampling_rate: config.sampling_rate,
            lambda_rate: config.lambda_rate,
            algorithm: config.algorithm,
            multiplicity_detection: config.multiplicity_detection,
        }
    }
}

/// Owns every robot, the event queue, the shared RNG, the accumulated
/// history, and the external cancellation flag. Robots never hold a
/// reference back to the scheduler or to each other — ownership stays a
/// strict tree (spec §9).
pub struct Scheduler {
    pub robots: Vec<Robot>,
    pub queue: EventQueue,
    pub rng: SimRng,
    pub history: SnapshotHistory,
    pub config: SchedulerConfig,
    pub should_stop: Arc<AtomicBool>,
    pub sec_report: Option<Vec<(i64, Circle)>>,
    event_sender: Option<mpsc::Sender<SimEvent>>,
    stopped: bool,
}

impl Scheduler {
    /// Performs the four initialization steps of spec §4.4: seed the
    /// RNG, build the robots, draw `n` i.i.d. exponential inter-arrivals
    /// for the initial LOOK events, and enqueue the `t = 0` visualization
    /// tick.
    pub fn new(config: &SimulationConfig, event_sender: Option<mpsc::Sender<SimEvent>>) -> Self {
        let mut rng = SimRng::from_seed(config.seed);
        let scheduler_config = SchedulerConfig::from(config);

        let positions: Vec<Coordinates> = if config.initial_positions.is_empty() {
            (0..config.num_of_robots)
                .map(|_| {
                    Coordinates::new(
                        rng.uniform_range(-config.width_bound, config.width_bound),
                        rng.uniform_range(-config.height_bound, config.height_bound),
                    )
                })
                .collect()
        } else {
            config
                .initial_positions
                .iter()
                .map(|&p| p.into())
                .collect()
        };

        let speeds = config.speeds();
        let faults = config.faults();

        let robots: Vec<Robot> = (0..config.num_of_robots)
            .map(|i| {
                Robot::new(
                    i as i64,
                    positions[i],
                    speeds[i],
                    config.rigid_movement,
                    config.visibility_radius,
                    config.obstructed_visibility,
                    config.multiplicity_detection,
                    config.algorithm,
                    faults[i].fault_kind,
                    faults[i].probability,
                )
            })
            .collect();

        let mut queue = EventQueue::new();
        for robot in &robots {
            let arrival = round_to(
                rng.exponential(config.lambda_rate),
                scheduler_config.time_precision,
            );
            queue.push(crate::event::Event::robot(arrival, robot.id, RobotState::Look));
        }
        queue.push(crate::event::Event::visualization(0.0));

        if let Some(sender) = &event_sender {
            let _ = sender.send(SimEvent::Start { seed: config.seed });
        }

        Scheduler {
            robots,
            queue,
            rng,
            history: SnapshotHistory::new(),
            config: scheduler_config,
            should_stop: Arc::new(AtomicBool::new(false)),
            sec_report: None,
            event_sender,
            stopped: false,
        }
    }

    /// A clone of the cancellation flag an external driver can set to
    /// request a stop observed before the next pop (spec §5).
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.should_stop)
    }

    /// Pumps `handle_event` until it returns `-1`, forwarding `SimEvent`s
    /// to the configured channel (if any) along the way. Mirrors the
    /// teacher's `Simulation::run`/`stop_flag` pattern, adapted to an
    /// event-driven rather than fixed-timestep loop: the cancellation
    /// flag is checked once per popped event instead of once per tick.
    pub fn run(&mut self) {
        loop {
            let code = self.handle_event();
            if code == -1 {
                break;
            }
        }
        if let Some(sender) = &self.event_sender {
            if let Some(report) = &self.sec_report {
                let _ = sender.send(SimEvent::Sec(report.clone()));
            }
            let _ = sender.send(SimEvent::End);
        }
    }

    fn emit(&self, event: SimEvent) {
        if let Some(sender) = &self.event_sender {
            if sender.send(event).is_err() {
                log::warn!("event stream receiver dropped; continuing without it");
            }
        }
    }
}

/// Rounds `value` to `precision` decimal places, as spec §4.4 requires
/// for every scheduled event time.
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}
