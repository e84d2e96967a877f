//! The §6 output event contract, carried over an `mpsc::Sender` the way
//! the teacher's `Simulation` carries `frame_sender: Option<mpsc::Sender<SimulationSnapshot>>` —
//! a channel is a transport-agnostic contract; wrapping it in a socket,
//! log file, or anything else is the consumer's job, not this crate's.

use crate::geometry::Circle;
use crate::snapshot::Snapshot;

/// One message of the external interface (spec §6).
#[derive(Debug, Clone)]
pub enum SimEvent {
    /// Emitted once, at scheduler construction.
    Start { seed: u64 },
    /// Emitted on every visualization tick.
    Data(Snapshot),
    /// Emitted once at termination, SEC algorithm only: the per-robot
    /// SEC last computed.
    Sec(Vec<(i64, Circle)>),
    /// Emitted once, after the run loop stops.
    End,
}
