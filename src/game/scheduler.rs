//! Single-threaded timer queue driving the engine's delayed steps.
//!
//! The engine never spawns threads or awaits: the presentation layer calls
//! `GameEngine::tick` with a monotonic timestamp and due events fire in
//! (due, insertion) order at their recorded due time. Events are never
//! cancelled; each carries the game generation it was scheduled under, and
//! the engine drops events whose generation is stale (a restart happened
//! while they were in flight).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::choreography::ChoreoStep;

/// A delayed state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EngineEvent {
    /// Display delay after a player pair resolved; clears the flipped-set.
    /// `matched` records whether the pair scored (turn stays with the player)
    /// or missed (turn hands off to the computer).
    ClearPlayerPair { matched: bool },
    /// Hand-off delay expired; the computer starts choosing.
    StartComputerTurn,
    /// Next step of the computer's reveal choreography.
    Choreography(ChoreoStep),
}

/// Heap entry. Field order matters: the derived `Ord` compares due time
/// first, then insertion sequence, so same-instant events fire in the order
/// they were scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    generation: u64,
    event: EngineEvent,
}

/// Min-heap of scheduled events keyed by due time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl TimerQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event at an absolute due time under a game generation.
    pub fn schedule(&mut self, due_ms: u64, generation: u64, event: EngineEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled {
            due_ms,
            seq,
            generation,
            event,
        }));
    }

    /// Pop the earliest event due at or before `now_ms`, if any.
    ///
    /// Returns (due time, generation, event). The caller is responsible for
    /// the generation check so stale events are dropped, not replayed.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, u64, EngineEvent)> {
        let Reverse(next) = self.heap.peek()?;
        if next.due_ms > now_ms {
            return None;
        }
        let Reverse(scheduled) = self.heap.pop()?;
        Some((scheduled.due_ms, scheduled.generation, scheduled.event))
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300, 1, EngineEvent::StartComputerTurn);
        queue.schedule(100, 1, EngineEvent::ClearPlayerPair { matched: false });
        queue.schedule(200, 1, EngineEvent::Choreography(ChoreoStep::FlipFirst));

        let (due1, _, _) = queue.pop_due(1000).unwrap();
        let (due2, _, _) = queue.pop_due(1000).unwrap();
        let (due3, _, _) = queue.pop_due(1000).unwrap();

        assert_eq!((due1, due2, due3), (100, 200, 300));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_nothing_due_yet() {
        let mut queue = TimerQueue::new();
        queue.schedule(500, 1, EngineEvent::StartComputerTurn);

        assert_eq!(queue.pop_due(499), None);
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_due(500).is_some());
    }

    #[test]
    fn test_same_instant_fires_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, 1, EngineEvent::StartComputerTurn);
        queue.schedule(100, 1, EngineEvent::ClearPlayerPair { matched: true });

        let (_, _, first) = queue.pop_due(100).unwrap();
        let (_, _, second) = queue.pop_due(100).unwrap();

        assert_eq!(first, EngineEvent::StartComputerTurn);
        assert_eq!(second, EngineEvent::ClearPlayerPair { matched: true });
    }

    #[test]
    fn test_generation_is_preserved() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, 7, EngineEvent::StartComputerTurn);

        let (_, generation, _) = queue.pop_due(100).unwrap();
        assert_eq!(generation, 7);
    }
}
