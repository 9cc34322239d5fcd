//! The pure animation state machine.
//!
//! One [`Machine::advance`] call is one tick: it reveals or removes a
//! single grapheme, or performs a silent transition between phases. The
//! machine never sleeps and never calls out — it only reports how long the
//! driver should wait before the next tick, which is what makes it
//! drivable by a real timer, a frame callback, or a virtual clock alike.

use std::time::Duration;

use super::segment::SegmentText;
use super::timing::Timing;

/// Which of the two segments is currently being written or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentId {
    /// The segment typed out first and erased last.
    First,
    /// The segment typed out second and erased first.
    Second,
}

/// Current phase of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing graphemes, first segment then second.
    Writing,
    /// Removing graphemes, second segment then first.
    Deleting,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Whether the visible text changed this tick. Silent ticks are the
    /// phase transitions that precede the two holds.
    pub emitted: bool,
    /// How long the driver should wait before the next tick.
    pub next_in: Duration,
}

impl Step {
    const fn frame(next_in: Duration) -> Self {
        Self {
            emitted: true,
            next_in,
        }
    }

    const fn hold(next_in: Duration) -> Self {
        Self {
            emitted: false,
            next_in,
        }
    }
}

/// The cyclic two-phase typewriter state machine.
///
/// The cycle, for segments `A` and `B`:
///
/// ```text
/// write A ──▶ write B ──▶ hold ──▶ delete B ──▶ delete A ──▶ hold ──▶ (repeat)
/// ```
///
/// Segment hand-offs inside a phase (A→B while writing, B→A while
/// deleting) cost no time: the same tick that finds one segment complete
/// steps the next one. An empty segment therefore completes its half of a
/// phase in zero ticks and cannot stall the cycle.
#[derive(Debug, Clone)]
pub struct Machine {
    first: SegmentText,
    second: SegmentText,
    /// Visible grapheme count per segment. While writing the active
    /// segment's count grows to its length; while deleting it shrinks to
    /// zero.
    shown_first: usize,
    shown_second: usize,
    active: SegmentId,
    phase: Phase,
    timing: Timing,
}

impl Machine {
    /// Create a machine in its initial state: writing the first segment,
    /// nothing visible yet.
    pub fn new(
        first: impl Into<SegmentText>,
        second: impl Into<SegmentText>,
        timing: Timing,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            shown_first: 0,
            shown_second: 0,
            active: SegmentId::First,
            phase: Phase::Writing,
            timing,
        }
    }

    /// The currently visible prefix of the first segment.
    #[inline]
    pub fn visible_first(&self) -> &str {
        self.first.prefix(self.shown_first)
    }

    /// The currently visible prefix of the second segment.
    #[inline]
    pub fn visible_second(&self) -> &str {
        self.second.prefix(self.shown_second)
    }

    /// Which segment the next frame tick will touch.
    #[inline]
    pub const fn active(&self) -> SegmentId {
        self.active
    }

    /// Current phase.
    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the machine is back in its initial state (start of a cycle,
    /// nothing visible).
    pub const fn at_cycle_start(&self) -> bool {
        self.shown_first == 0
            && self.shown_second == 0
            && matches!(self.active, SegmentId::First)
            && matches!(self.phase, Phase::Writing)
    }

    /// Perform one tick.
    ///
    /// Mutates the machine, then reports whether the visible text changed
    /// and how long to wait before the next tick. The mutation happens
    /// before any caller-side rendering, so a panicking sink observes a
    /// consistent machine and the animation can resume on the next tick.
    pub fn advance(&mut self) -> Step {
        match self.phase {
            Phase::Writing => self.advance_writing(),
            Phase::Deleting => self.advance_deleting(),
        }
    }

    fn advance_writing(&mut self) -> Step {
        if matches!(self.active, SegmentId::First) {
            if self.shown_first < self.first.len() {
                self.shown_first += 1;
                return Step::frame(self.timing.write_delay);
            }
            // First segment fully shown; the hand-off costs no tick.
            self.active = SegmentId::Second;
        }
        if self.shown_second < self.second.len() {
            self.shown_second += 1;
            return Step::frame(self.timing.write_delay);
        }
        // Both segments fully written: hold, then start deleting.
        log::trace!("write phase complete, holding before delete");
        self.phase = Phase::Deleting;
        Step::hold(self.timing.pause_after_write)
    }

    fn advance_deleting(&mut self) -> Step {
        if matches!(self.active, SegmentId::Second) {
            if self.shown_second > 0 {
                self.shown_second -= 1;
                return Step::frame(self.timing.delete_delay);
            }
            // Second segment cleared; erase the first without a pause.
            self.active = SegmentId::First;
        }
        if self.shown_first > 0 {
            self.shown_first -= 1;
            return Step::frame(self.timing.delete_delay);
        }
        // Everything cleared: hold, then the cycle starts over. Both
        // visible counts are already zero, so the reset changes no output.
        log::trace!("delete phase complete, holding before next cycle");
        self.phase = Phase::Writing;
        self.active = SegmentId::First;
        Step::hold(self.timing.pause_after_delete)
    }
}
