//! `Animator`: the owned handle driving a [`Machine`] through a scheduler.
//!
//! Each tick is a scheduled callback: it advances the machine, schedules
//! the follow-up tick, then pushes the frame into the sink. Disposal is
//! cooperative — a flag checked at the top of every tick — exactly like a
//! shutdown flag on an actor thread. Multiple animators can share one
//! scheduler and be disposed independently.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::machine::Machine;
use super::timing::Timing;
use crate::render::RenderSink;
use crate::schedule::Scheduler;

struct Inner {
    machine: Mutex<Machine>,
    sink: Mutex<Box<dyn RenderSink>>,
    scheduler: Arc<dyn Scheduler>,
    /// Cleared by `dispose`; every queued tick checks it before touching
    /// state or the sink.
    running: AtomicBool,
    /// Set by the first `start`; later calls are no-ops.
    started: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A sink that panicked mid-render must not wedge the animator.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn tick(inner: &Arc<Inner>) {
    if !inner.running.load(Ordering::Acquire) {
        return;
    }

    let mut machine = lock(&inner.machine);
    let step = machine.advance();

    // Schedule the follow-up before rendering: a panicking sink then loses
    // only its own frame and the chain keeps ticking.
    if inner.running.load(Ordering::Acquire) {
        let next = Arc::clone(inner);
        if let Err(err) = inner
            .scheduler
            .schedule(step.next_in, Box::new(move || tick(&next)))
        {
            log::debug!("animation chain ends: {err}");
        }
    }

    if step.emitted {
        lock(&inner.sink).render(machine.visible_first(), machine.visible_second());
    }
}

/// Handle to one running text animation.
///
/// Created with the two segment texts, a render sink, and a scheduler.
/// [`start`](Self::start) begins the infinite cycle;
/// [`dispose`](Self::dispose) (or drop) ends it.
pub struct Animator {
    inner: Arc<Inner>,
}

impl Animator {
    /// Create an animator with the default [`Timing`].
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        sink: impl RenderSink + 'static,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self::with_timing(first, second, sink, scheduler, Timing::default())
    }

    /// Create an animator with custom timing.
    ///
    /// Segments may be empty; an empty segment's half of each phase
    /// completes in zero ticks.
    pub fn with_timing(
        first: impl Into<String>,
        second: impl Into<String>,
        sink: impl RenderSink + 'static,
        scheduler: Arc<dyn Scheduler>,
        timing: Timing,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                machine: Mutex::new(Machine::new(first.into(), second.into(), timing)),
                sink: Mutex::new(Box::new(sink)),
                scheduler,
                running: AtomicBool::new(true),
                started: AtomicBool::new(false),
            }),
        }
    }

    /// Begin the animation loop.
    ///
    /// Idempotent: only the first call schedules a tick chain. A disposed
    /// animator cannot be restarted.
    pub fn start(&self) {
        if self.inner.started.swap(true, Ordering::AcqRel) {
            return;
        }
        if !self.inner.running.load(Ordering::Acquire) {
            return;
        }
        let next = Arc::clone(&self.inner);
        if let Err(err) = self
            .inner
            .scheduler
            .schedule(Duration::ZERO, Box::new(move || tick(&next)))
        {
            log::debug!("animator failed to start: {err}");
        }
    }

    /// Stop the animation.
    ///
    /// After this returns, no further sink call is made by a tick that has
    /// not already begun executing; a tick mid-flight finishes, and the
    /// follow-up it schedules is suppressed.
    pub fn dispose(&self) {
        self.inner.running.store(false, Ordering::Release);
    }

    /// Whether the animator still accepts ticks.
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Acquire)
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.dispose();
    }
}
