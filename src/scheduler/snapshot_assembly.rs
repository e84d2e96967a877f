//! `get_snapshot` (spec §4.5): resamples every robot's position at
//! `time`, optionally applies multiplicity-group detection, and returns
//! the immutable capture. Per-robot `get_position` is read-only and
//! touches only that robot's own fields, so resampling is distributed
//! with rayon exactly the way the teacher parallelizes its own
//! independent per-particle update (`simulation/mod.rs::step`).

use super::Scheduler;
use crate::geometry::Coordinates;
use crate::robot::SnapshotDetails;
use crate::snapshot::Snapshot;
use rayon::prelude::*;
use std::collections::BTreeMap;

impl Scheduler {
    /// For each robot, records `(get_position(time), state, frozen,
    /// terminated, multiplicity)` and returns the assembled mapping
    /// (spec §4.5, invariant I4 — snapshots reflect `get_position(t)`,
    /// never a stale cached pose).
    pub fn get_snapshot(&mut self, time: f64, _visualization: bool) -> Snapshot {
        let positions: Vec<(i64, Coordinates)> = self
            .robots
            .par_iter()
            .map(|robot| (robot.id, robot.get_position(time)))
            .collect();

        let multiplicity: Option<BTreeMap<i64, usize>> = if self.config.multiplicity_detection {
            Some(self.multiplicity_groups(&positions))
        } else {
            None
        };

        let mut robots = BTreeMap::new();
        for (id, pos) in positions {
            let idx = id as usize;
            let group_size = multiplicity
                .as_ref()
                .and_then(|m| m.get(&id))
                .copied()
                .unwrap_or(1);
            self.robots[idx].multiplicity = group_size;

            robots.insert(
                id,
                SnapshotDetails {
                    pos,
                    state: self.robots[idx].state,
                    frozen: self.robots[idx].frozen,
                    terminated: self.robots[idx].terminated,
                    multiplicity: group_size,
                },
            );
        }

        Snapshot::new(time, robots)
    }
}
