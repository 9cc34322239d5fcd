//! Scheduling: "run this callback after N time units".
//!
//! The animator never owns a timer. It asks a [`Scheduler`] to run its next
//! tick after a delay, which keeps the state machine independent of the
//! concurrency primitive underneath:
//!
//! - [`TimerScheduler`]: a dedicated timer thread for real applications
//! - [`ManualScheduler`]: a virtual clock advanced by hand, for
//!   deterministic tests
//!
//! Tasks are run one at a time in deadline order on whichever thread drives
//! the scheduler; there is no reentrancy and no parallel ticks.

mod manual;
mod timer;

use std::time::Duration;

pub use manual::ManualScheduler;
pub use timer::TimerScheduler;

/// A deferred callback.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Opaque handle identifying a scheduled task within its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub(crate) u64);

/// Errors from scheduling operations.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The scheduler has been shut down and accepts no further tasks.
    #[error("scheduler is shut down")]
    ShutDown,
    /// The timer thread could not be spawned.
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Abstraction over delayed callback execution.
pub trait Scheduler: Send + Sync {
    /// Run `task` once, `after` the scheduler's current time.
    ///
    /// Returns an opaque id for the queued task. Tasks with equal
    /// deadlines run in submission order.
    fn schedule(&self, after: Duration, task: Task) -> Result<TaskId, ScheduleError>;
}
