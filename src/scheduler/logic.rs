//! `handle_event`, successor-timing rules, termination detection, and
//! multiplicity-group assignment (spec §4.4).

use super::{round_to, Scheduler};
use crate::event::Event;
use crate::geometry::{distance, smallest_enclosing_circle};
use crate::io::event_stream::SimEvent;
use crate::robot::{Algorithm, RobotState};
use std::sync::atomic::Ordering;

impl Scheduler {
    /// Pops and dispatches exactly one event, returning the exit code of
    /// spec §4.4. Events belonging to a robot that has already
    /// terminated are silently skipped (invariant I3) without consuming
    /// an exit code — `handle_event` keeps popping until it finds
    /// something to report or the queue runs dry.
    pub fn handle_event(&mut self) -> i32 {
        loop {
            if self.stopped || self.should_stop.load(Ordering::Relaxed) {
                self.finalize_stop();
                return -1;
            }

            let Some(event) = self.queue.pop() else {
                self.finalize_stop();
                return -1;
            };

            if event.is_visualization() {
                let snapshot = self.get_snapshot(event.time, true);
                self.emit(SimEvent::Data(snapshot.clone()));
                self.history.push_visualization(snapshot);
                if !self.should_stop.load(Ordering::Relaxed) {
                    let next = round_to(event.time + self.config.sampling_rate, self.config.time_precision);
                    self.queue.push(Event::visualization(next));
                }
                return 0;
            }

            let id = event.id;
            if self.robots[id as usize].terminated {
                continue;
            }

            let code = match event.state.expect("non-visualization event always carries a state") {
                RobotState::Look => self.dispatch_look(id, event.time),
                RobotState::Move => {
                    self.dispatch_move(id, event.time);
                    2
                }
                RobotState::Wait => {
                    self.dispatch_wait(id, event.time);
                    3
                }
                RobotState::Terminated => unreachable!("Terminated is never a scheduled target state"),
            };

            if self.all_converged() {
                self.finalize_stop();
            }
            return code;
        }
    }

    fn dispatch_look(&mut self, id: i64, time: f64) -> i32 {
        let global = self.get_snapshot(time, false).robots;
        self.history
            .push_snapshot(crate::snapshot::Snapshot::new(time, global.clone()));

        let threshold_precision = self.config.threshold_precision;
        let lambda = self.config.lambda_rate;
        let precision = self.config.time_precision;

        self.robots[id as usize].look(&global, time, threshold_precision, &mut self.rng);
        let robot = &self.robots[id as usize];

        if robot.terminated {
            return 4;
        }
        let frozen = robot.frozen;

        let next_time = round_to(time + self.rng.exponential(lambda), precision);
        if frozen {
            self.queue.push(Event::robot(next_time, id, RobotState::Look));
        } else {
            self.queue.push(Event::robot(next_time, id, RobotState::Move));
        }
        1
    }

    fn dispatch_move(&mut self, id: i64, time: f64) {
        let precision = self.config.time_precision;
        self.robots[id as usize].start_move(time);

        let robot = &self.robots[id as usize];
        let target = robot
            .calculated_position
            .expect("invariant I1: MOVE state requires calculated_position");
        let d = distance(&robot.start_position, &target);
        let rigid = robot.rigid_movement;
        let speed = robot.speed;

        let arrival = if rigid {
            time + d / speed
        } else {
            let u = self.rng.uniform_unit();
            time + u * d / speed
        };
        self.queue
            .push(Event::robot(round_to(arrival, precision), id, RobotState::Wait));
    }

    fn dispatch_wait(&mut self, id: i64, time: f64) {
        let lambda = self.config.lambda_rate;
        let precision = self.config.time_precision;
        self.robots[id as usize].wait(time);

        let next_time = round_to(time + self.rng.exponential(lambda), precision);
        self.queue.push(Event::robot(next_time, id, RobotState::Look));
    }

    /// True iff every robot is both `frozen` and `terminated` — the
    /// scheduler's global termination condition (spec §4.4), consulting
    /// only the per-robot flags the algorithm already maintains.
    fn all_converged(&self) -> bool {
        self.robots.iter().all(|r| r.frozen) && self.robots.iter().all(|r| r.terminated)
    }

    fn finalize_stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        if self.config.algorithm == Algorithm::Sec {
            let report = self
                .robots
                .iter()
                .map(|r| {
                    let points: Vec<_> = r
                        .snapshot
                        .values()
                        .filter(|d| !d.terminated)
                        .map(|d| d.pos)
                        .collect();
                    (r.id, smallest_enclosing_circle(&points, &mut self.rng))
                })
                .collect();
            self.sec_report = Some(report);
        }
    }

    /// Groups robots whose rounded coordinates (to `threshold_precision
    /// - 2`) coincide, setting each group member's `multiplicity` to the
    /// group size (spec §4.4). Called by snapshot assembly only when
    /// `multiplicity_detection` is enabled.
    pub(crate) fn multiplicity_groups(&self, positions: &[(i64, crate::geometry::Coordinates)]) -> std::collections::BTreeMap<i64, usize> {
        let precision = self.config.threshold_precision.saturating_sub(2);
        let scale = 10f64.powi(precision as i32);
        let rounded = |v: f64| (v * scale).round() / scale;

        let mut sorted: Vec<(i64, crate::geometry::Coordinates)> = positions.to_vec();
        sorted.sort_by(|a, b| {
            rounded(a.1.x)
                .partial_cmp(&rounded(b.1.x))
                .unwrap()
                .then(rounded(a.1.y).partial_cmp(&rounded(b.1.y)).unwrap())
        });

        let mut groups: Vec<Vec<i64>> = Vec::new();
        for (id, pos) in &sorted {
            if let Some(last) = groups.last_mut() {
                let rep = *last.first().unwrap();
                let rep_pos = positions.iter().find(|(i, _)| *i == rep).unwrap().1;
                if rounded(rep_pos.x) == rounded(pos.x) && rounded(rep_pos.y) == rounded(pos.y) {
                    last.push(*id);
                    continue;
                }
            }
            groups.push(vec![*id]);
        }

        let mut multiplicity = std::collections::BTreeMap::new();
        for group in groups {
            let size = group.len();
            for id in group {
                multiplicity.insert(id, size);
            }
        }
        multiplicity
    }
}
