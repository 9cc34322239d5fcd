//! `TimerScheduler`: a dedicated timer thread for delayed callbacks.
//!
//! One worker thread owns a deadline-ordered queue. New tasks arrive over
//! a channel; the worker sleeps until the nearest deadline or the next
//! message, whichever comes first, then runs everything that is due. Tasks
//! run sequentially on the worker thread, so no two callbacks ever overlap.

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::{ScheduleError, Scheduler, Task, TaskId};

struct Entry {
    deadline: Instant,
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
        // Max-heap inversion: earliest (deadline, seq) pops first.
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

enum Mail {
    Schedule(Entry),
    /// Wakes a parked worker so it can observe the shutdown flag.
    Wake,
}

/// A scheduler backed by a named timer thread.
pub struct TimerScheduler {
    /// Handle to the timer thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Mailbox into the worker.
    mail_tx: Sender<Mail>,
    /// Task id source.
    next_seq: AtomicU64,
}

impl TimerScheduler {
    /// Spawn the timer thread.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Spawn`] if the OS refuses the thread.
    pub fn new() -> Result<Self, ScheduleError> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let (mail_tx, mail_rx) = unbounded();

        let handle = thread::Builder::new()
            .name("typewheel-timer".to_string())
            .spawn(move || {
                Self::run_loop(&mail_rx, &shutdown_clone);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            mail_tx,
            next_seq: AtomicU64::new(0),
        })
    }

    /// Signal the worker to stop. Queued tasks that have not fired are
    /// dropped; a task already running finishes.
    pub fn shutdown(&self) {
        self.shutdown.store(true, AtomicOrdering::Release);
        let _ = self.mail_tx.send(Mail::Wake);
    }

    /// Shut down and wait for the worker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Worker loop: run due tasks, then park until the nearest deadline or
    /// the next message.
    fn run_loop(mail_rx: &Receiver<Mail>, shutdown: &Arc<AtomicBool>) {
        let mut queue: BinaryHeap<Entry> = BinaryHeap::new();

        loop {
            if shutdown.load(AtomicOrdering::Acquire) {
                break;
            }

            let now = Instant::now();
            while queue.peek().is_some_and(|entry| entry.deadline <= now) {
                if let Some(entry) = queue.pop() {
                    (entry.task)();
                }
                if shutdown.load(AtomicOrdering::Acquire) {
                    return;
                }
            }

            let wait = queue
                .peek()
                .map(|entry| entry.deadline.saturating_duration_since(Instant::now()));

            let mail = match wait {
                Some(timeout) => mail_rx.recv_timeout(timeout),
                // Nothing queued: block until mail arrives.
                None => mail_rx
                    .recv()
                    .map_err(|_| RecvTimeoutError::Disconnected),
            };

            match mail {
                Ok(Mail::Schedule(entry)) => queue.push(entry),
                Ok(Mail::Wake) | Err(RecvTimeoutError::Timeout) => {}
                // All handles dropped: nothing can be scheduled anymore.
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }
}

impl Scheduler for TimerScheduler {
    fn schedule(&self, after: Duration, task: Task) -> Result<TaskId, ScheduleError> {
        if self.shutdown.load(AtomicOrdering::Acquire) {
            return Err(ScheduleError::ShutDown);
        }
        let seq = self.next_seq.fetch_add(1, AtomicOrdering::Relaxed);
        let entry = Entry {
            deadline: Instant::now() + after,
            seq,
            task,
        };
        self.mail_tx
            .send(Mail::Schedule(entry))
            .map_err(|_| ScheduleError::ShutDown)?;
        Ok(TaskId(seq))
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
