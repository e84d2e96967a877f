//! # Event Queue (spec §4.3)
//!
//! A min-heap of timestamped events, ordered by time and tie-broken by
//! insertion order so that a run is reproducible even when rounding
//! produces equal timestamps. Heap entries are value types; the queue
//! never mutates a stored event and never hands out a reference that
//! would let a caller hold a back-pointer into the heap, per Design
//! Notes §9 ("heap element identity").

use crate::robot::RobotState;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Sentinel robot id marking a visualization-sampling event.
pub const VISUALIZATION_ID: i64 = -1;

/// A scheduled state transition for a robot, or a visualization tick
/// when `id == VISUALIZATION_ID` and `state` is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub time: f64,
    pub id: i64,
    pub state: Option<RobotState>,
}

impl Event {
    pub fn robot(time: f64, id: i64, state: RobotState) -> Self {
        Event {
            time,
            id,
            state: Some(state),
        }
    }

    pub fn visualization(time: f64) -> Self {
        Event {
            time,
            id: VISUALIZATION_ID,
            state: None,
        }
    }

    pub fn is_visualization(&self) -> bool {
        self.id == VISUALIZATION_ID
    }
}

/// An `Event` plus the insertion sequence number used to break ties
/// between events scheduled for the same time.
#[derive(Debug, Clone, Copy)]
struct QueuedEvent {
    event: Event,
    sequence: u64,
}

impl PartialEq for QueuedEvent {
    fn eq(&self, other: &Self) -> bool {
        self.event.time == other.event.time && self.sequence == other.sequence
    }
}
impl Eq for QueuedEvent {}

impl Ord for QueuedEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // `BinaryHeap` is a max-heap; reverse the natural float/sequence
        // order so the earliest time (and, on a tie, the earliest
        // insertion) sorts to the top.
        other
            .event
            .time
            .partial_cmp(&self.event.time)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl PartialOrd for QueuedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of `Event`s ordered by time, stable on ties.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<QueuedEvent>,
    next_sequence: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue::default()
    }

    pub fn push(&mut self, event: Event) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueuedEvent { event, sequence });
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|q| q.event)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
