//! `ManualScheduler`: a virtual clock for deterministic tests.
//!
//! Nothing happens until the test advances time. `advance` runs every task
//! whose deadline falls inside the window, in deadline order, moving the
//! clock to each task's deadline as it runs — so a task that schedules a
//! follow-up within the same window sees it honored in the same call.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::{ScheduleError, Scheduler, Task, TaskId};

struct Entry {
    deadline: Duration,
    seq: u64,
    task: Task,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the earliest (deadline, seq)
        // pops first.
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct State {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Entry>,
}

/// A scheduler driven by a hand-advanced virtual clock.
pub struct ManualScheduler {
    state: Mutex<State>,
}

impl ManualScheduler {
    /// Create a scheduler with the clock at zero and no queued tasks.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                now: Duration::ZERO,
                next_seq: 0,
                queue: BinaryHeap::new(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current virtual time.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of queued tasks.
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// Advance the clock by `delta`, running every task that comes due.
    ///
    /// Tasks run outside the internal lock, so they may schedule further
    /// tasks; follow-ups due within the same window also run.
    pub fn advance(&self, delta: Duration) {
        let target = self.lock().now + delta;
        loop {
            let task = {
                let mut state = self.lock();
                match state.queue.pop() {
                    Some(entry) if entry.deadline <= target => {
                        state.now = entry.deadline;
                        entry.task
                    }
                    Some(entry) => {
                        // Not due yet: put it back and settle at the target.
                        state.queue.push(entry);
                        state.now = target;
                        return;
                    }
                    None => {
                        state.now = target;
                        return;
                    }
                }
            };
            task();
        }
    }

    /// Run the single earliest task regardless of its deadline, jumping
    /// the clock to it. Returns `false` if the queue is empty.
    pub fn run_next(&self) -> bool {
        let task = {
            let mut state = self.lock();
            match state.queue.pop() {
                Some(entry) => {
                    state.now = state.now.max(entry.deadline);
                    entry.task
                }
                None => return false,
            }
        };
        task();
        true
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, after: Duration, task: Task) -> Result<TaskId, ScheduleError> {
        let mut state = self.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        let deadline = state.now + after;
        state.queue.push(Entry {
            deadline,
            seq,
            task,
        });
        Ok(TaskId(seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;

    #[test]
    fn test_manual_runs_in_deadline_order() {
        let clock = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for (label, ms) in [("late", 30u64), ("early", 10), ("mid", 20)] {
            let order = order.clone();
            clock
                .schedule(
                    Duration::from_millis(ms),
                    Box::new(move || order.lock().unwrap().push(label)),
                )
                .unwrap();
        }

        clock.advance(Duration::from_millis(25));
        assert_eq!(*order.lock().unwrap(), vec!["early", "mid"]);
        assert_eq!(clock.pending(), 1);

        clock.advance(Duration::from_millis(5));
        assert_eq!(*order.lock().unwrap(), vec!["early", "mid", "late"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_manual_ties_run_in_submission_order() {
        let clock = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for label in ["a", "b", "c"] {
            let order = order.clone();
            clock
                .schedule(
                    Duration::from_millis(10),
                    Box::new(move || order.lock().unwrap().push(label)),
                )
                .unwrap();
        }
        clock.advance(Duration::from_millis(10));
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_manual_nested_scheduling_same_window() {
        let clock = Arc::new(ManualScheduler::new());
        let count = Arc::new(AtomicUsize::new(0));

        // A task chain: each run schedules the next 10ms out.
        fn chain(clock: &Arc<ManualScheduler>, count: &Arc<AtomicUsize>) {
            count.fetch_add(1, AtomicOrdering::SeqCst);
            let next_clock = clock.clone();
            let next_count = count.clone();
            clock
                .schedule(
                    Duration::from_millis(10),
                    Box::new(move || chain(&next_clock, &next_count)),
                )
                .unwrap();
        }

        chain(&clock, &count);
        assert_eq!(count.load(AtomicOrdering::SeqCst), 1);

        // 35ms window: follow-ups at 10, 20, 30 all run.
        clock.advance(Duration::from_millis(35));
        assert_eq!(count.load(AtomicOrdering::SeqCst), 4);
        assert_eq!(clock.now(), Duration::from_millis(35));
    }

    #[test]
    fn test_manual_run_next_jumps_clock() {
        let clock = ManualScheduler::new();
        let hit = Arc::new(AtomicUsize::new(0));
        let hit2 = hit.clone();
        clock
            .schedule(
                Duration::from_secs(5),
                Box::new(move || {
                    hit2.fetch_add(1, AtomicOrdering::SeqCst);
                }),
            )
            .unwrap();

        assert!(clock.run_next());
        assert_eq!(hit.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(clock.now(), Duration::from_secs(5));
        assert!(!clock.run_next());
    }
}
