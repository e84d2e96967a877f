//! # Snapshot / History (spec §3, §4.5)
//!
//! A `Snapshot` is an immutable capture of the whole swarm's state at one
//! observation instant; `SnapshotHistory` keeps the regular simulation
//! snapshots and the fixed-rate visualization ticks in two separate
//! sequences, exactly as §4.5 describes (`snapshot_history` vs.
//! `visualization_snapshots`).

use crate::robot::SnapshotDetails;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One observation of every robot's state at `time`. `BTreeMap` keeps
/// robot ids in deterministic order, unlike a hash map, so two
/// identical runs serialize byte-for-byte identically (spec §5).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: f64,
    pub robots: BTreeMap<i64, SnapshotDetails>,
}

impl Snapshot {
    pub fn new(time: f64, robots: BTreeMap<i64, SnapshotDetails>) -> Self {
        Snapshot { time, robots }
    }
}

/// The full record of a completed (or in-progress) run: every snapshot
/// taken for simulation bookkeeping purposes, and every one taken at a
/// visualization tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotHistory {
    pub snapshot_history: Vec<Snapshot>,
    pub visualization_snapshots: Vec<Snapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        SnapshotHistory::default()
    }

    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot_history.push(snapshot);
    }

    pub fn push_visualization(&mut self, snapshot: Snapshot) {
        self.visualization_snapshots.push(snapshot);
    }

    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.snapshot_history.last()
    }
}
