//! # Robot Module - Look-Compute-Move-Wait State Machine
//!
//! This module defines the per-robot state carried across an asynchronous
//! LCM (Look-Compute-Move-Wait) cycle: geometric pose, kinematics,
//! perception limits, algorithmic identity, convergence flags, and fault
//! state (spec §3/§4.2).
//!
//! ## Submodules
//!
//! - [`physics`]: `get_position` continuous-time interpolation and
//!   visibility/occlusion filtering.
//! - [`lifecycle`]: the `look`/`compute`/`start_move`/`wait` cycle.
//! - [`algorithm`]: the Gathering and SEC target/terminal-predicate
//!   function pairs.
//! - [`fault`]: the fault progression state machine.
//! - [`tests`]: unit tests for the above.

pub mod algorithm;
pub mod fault;
pub mod lifecycle;
pub mod physics;
pub mod tests;

use crate::geometry::Coordinates;
use std::collections::BTreeMap;
use std::fmt::Display;

/// The four LCM phases. `Terminated` is absorbing (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RobotState {
    Look,
    Move,
    Wait,
    Terminated,
}

impl RobotState {
    /// WAIT -> LOOK -> MOVE -> WAIT, as specified. `Terminated` has no
    /// successor.
    pub fn next(self) -> Option<RobotState> {
        match self {
            RobotState::Wait => Some(RobotState::Look),
            RobotState::Look => Some(RobotState::Move),
            RobotState::Move => Some(RobotState::Wait),
            RobotState::Terminated => None,
        }
    }
}

/// The algorithm a robot runs at COMPUTE (spec §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Algorithm {
    Gathering,
    Sec,
}

/// Fault kinds a robot may be configured with (spec §4.2.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FaultKind {
    None,
    Crash,
    Delay,
    Byzantine,
    Visibility,
    Movement,
}

/// Fault progression: `Inactive -> Active -> Triggered -> Resolved`, with
/// `Crash` absorbing into `Triggered` forever (spec §4.2.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FaultStatus {
    Inactive,
    Active,
    Triggered,
    Resolved,
}

/// An immutable record of one peer as last observed at LOOK (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotDetails {
    pub pos: Coordinates,
    pub state: RobotState,
    pub frozen: bool,
    pub terminated: bool,
    pub multiplicity: usize,
}

/// One simulated agent: pose, kinematics, perception, algorithmic
/// identity, convergence flags, and fault block (spec §3).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Robot {
    pub id: i64,
    pub state: RobotState,

    // Geometric pose.
    pub coordinates: Coordinates,
    pub start_position: Coordinates,
    pub calculated_position: Option<Coordinates>,

    // Kinematics.
    pub speed: f64,
    pub rigid_movement: bool,

    // Timing.
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub number_of_activations: u64,
    pub travelled_distance: f64,

    // Perception.
    pub visibility_radius: Option<f64>,
    pub obstructed_visibility: bool,
    pub multiplicity_detection: bool,

    // Algorithmic identity.
    pub algorithm: Algorithm,

    // Convergence flags.
    pub frozen: bool,
    pub terminated: bool,

    // Fault block.
    pub fault_kind: FaultKind,
    pub fault_status: FaultStatus,
    pub fault_probability: f64,
    /// Speed value stashed by a DELAY fault so it can be restored at the
    /// next WAIT boundary; not part of the spec's enumerated data model,
    /// purely internal bookkeeping for [`fault::on_wait`].
    #[serde(default)]
    pub(crate) fault_saved_speed: Option<f64>,
    /// Visibility radius stashed by a VISIBILITY fault, restored the
    /// same way.
    #[serde(default)]
    pub(crate) fault_saved_visibility_radius: Option<Option<f64>>,

    // Last observation and derived multiplicity.
    pub snapshot: BTreeMap<i64, SnapshotDetails>,
    pub multiplicity: usize,
}

impl Robot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        position: Coordinates,
        speed: f64,
        rigid_movement: bool,
        visibility_radius: Option<f64>,
        obstructed_visibility: bool,
        multiplicity_detection: bool,
        algorithm: Algorithm,
        fault_kind: FaultKind,
        fault_probability: f64,
    ) -> Self {
        Robot {
            id,
            state: RobotState::Wait,
            coordinates: position,
            start_position: position,
            calculated_position: None,
            speed,
            rigid_movement,
            start_time: None,
            end_time: None,
            number_of_activations: 0,
            travelled_distance: 0.0,
            visibility_radius,
            obstructed_visibility,
            multiplicity_detection,
            algorithm,
            frozen: false,
            terminated: false,
            fault_kind,
            fault_status: FaultStatus::Inactive,
            fault_probability,
            fault_saved_speed: None,
            fault_saved_visibility_radius: None,
            snapshot: BTreeMap::new(),
            multiplicity: 1,
        }
    }
}

impl Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Robot {{ id: {}, state: {:?}, pos: {}, frozen: {}, terminated: {} }}",
            self.id, self.state, self.coordinates, self.frozen, self.terminated
        )
    }
}
