use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    generation: u64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Single-threaded one-shot timer queue running on virtual time.
///
/// Timers fire in due order, ties in arming order. Each timer is tagged with
/// the screen generation it was armed under and is skipped once the caller's
/// live generation has moved on.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm `payload` to fire `delay` after the current virtual time
    pub fn schedule(&mut self, generation: u64, delay: Duration, payload: T) {
        self.seq += 1;
        self.queue.push(Reverse(Entry {
            due: self.now + delay,
            seq: self.seq,
            generation,
            payload,
        }));
    }

    /// Timers still armed under `live`
    pub fn pending(&self, live: u64) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(e)| e.generation == live)
            .count()
    }

    /// Pop the next timer armed under `live` and due at or before `until`.
    /// Stale timers met on the way are dropped.
    ///
    /// Virtual time moves to the popped timer's due time so that timers armed
    /// while handling it are relative to when it was meant to fire.
    pub fn pop_due(&mut self, until: Duration, live: u64) -> Option<T> {
        loop {
            let due = self.queue.peek().map(|Reverse(e)| e.due)?;
            if due > until {
                return None;
            }
            let Reverse(entry) = self.queue.pop()?;
            if entry.generation != live {
                tracing::trace!(generation = entry.generation, live, "stale timer skipped");
                continue;
            }
            self.now = self.now.max(entry.due);
            return Some(entry.payload);
        }
    }

    /// Move virtual time forward once every due timer has been popped
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
