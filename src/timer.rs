// src/timer.rs

//! Deferred work for the cube: transition phases and cubelet pops.
//!
//! The cube never sleeps. It hands `Timer`s to a `Scheduler` with an absolute
//! deadline on its own virtual clock, and the host drives that clock through
//! `Cube::advance`. A browser host calls it from its frame callback; tests
//! call it with exact durations.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::face::FaceId;

/// Work scheduled by the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// The incoming face has been painted at its origin; start rotating.
    BeginMove,
    /// The rotation finished; release the lock and hide the outgoing face.
    Settle,
    PopStart { face: FaceId, row: usize, col: usize },
    PopEnd { face: FaceId, row: usize, col: usize },
}

/// Timer service the cube depends on.
pub trait Scheduler {
    /// Queues `timer` to fire once the clock reaches `at`.
    fn schedule(&mut self, at: Duration, timer: Timer);

    /// Removes and returns the earliest timer due at or before `now`.
    /// Timers with equal deadlines come out in the order they were scheduled.
    fn pop_due(&mut self, now: Duration) -> Option<(Duration, Timer)>;

    /// Deadline of the earliest pending timer.
    fn next_deadline(&self) -> Option<Duration>;

    fn pending(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    at: Duration,
    seq: u64,
    timer: Timer,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse so the earliest deadline is on top.
        other
            .at
            .cmp(&self.at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Default scheduler: a deadline-ordered heap.
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, at: Duration, timer: Timer) {
        log::trace!("TimerQueue: {:?} at {:?}", timer, at);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { at, seq, timer });
    }

    fn pop_due(&mut self, now: Duration) -> Option<(Duration, Timer)> {
        if self.heap.peek()?.at > now {
            return None;
        }
        self.heap.pop().map(|e| (e.at, e.timer))
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.heap.peek().map(|e| e.at)
    }

    fn pending(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pops_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(700), Timer::Settle);
        q.schedule(ms(30), Timer::BeginMove);
        assert_eq!(q.next_deadline(), Some(ms(30)));

        assert_eq!(q.pop_due(ms(10)), None);
        assert_eq!(q.pop_due(ms(1000)), Some((ms(30), Timer::BeginMove)));
        assert_eq!(q.pop_due(ms(1000)), Some((ms(700), Timer::Settle)));
        assert_eq!(q.pop_due(ms(1000)), None);
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let mut q = TimerQueue::new();
        let start = Timer::PopStart { face: FaceId(0), row: 1, col: 1 };
        let end = Timer::PopEnd { face: FaceId(0), row: 1, col: 1 };
        q.schedule(ms(5), start);
        q.schedule(ms(5), end);
        q.schedule(ms(5), Timer::Settle);
        assert_eq!(q.pop_due(ms(5)).map(|(_, t)| t), Some(start));
        assert_eq!(q.pop_due(ms(5)).map(|(_, t)| t), Some(end));
        assert_eq!(q.pop_due(ms(5)).map(|(_, t)| t), Some(Timer::Settle));
    }
}
