//! # Typewheel
//!
//! A cyclic two-phase typewriter text animator for terminal UIs.
//!
//! Typewheel types out two fixed text segments grapheme-by-grapheme (first
//! one, then the other), holds, erases them in reverse order, holds again,
//! and repeats forever until disposed.
//!
//! ## Core Concepts
//!
//! - **Pure state machine**: [`Machine`] owns every transition; one
//!   [`Machine::advance`] call is one tick
//! - **Injected scheduler**: a [`Scheduler`] provides "run this after N
//!   milliseconds" — real timers for production, a virtual clock for tests
//! - **Render sink**: an [`Animator`] pushes the two visible prefixes to a
//!   [`RenderSink`] after every change; presentation stays outside the core
//! - **Cooperative disposal**: [`Animator::dispose`] flips a flag that every
//!   queued tick checks before touching state
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use typewheel::{Animator, ManualScheduler};
//!
//! let clock = Arc::new(ManualScheduler::new());
//! let animator = Animator::new(
//!     "Hello, ",
//!     "world",
//!     |first: &str, second: &str| println!("{first}{second}"),
//!     clock.clone(),
//! );
//! animator.start();
//! clock.advance(std::time::Duration::from_secs(2));
//! animator.dispose();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod animator;
pub mod render;
pub mod schedule;
pub mod term;

// Re-exports for convenience
pub use animator::{Animator, Machine, Phase, SegmentId, SegmentText, Step, Timing};
pub use render::{ChannelSink, Frame, RenderSink};
pub use schedule::{ManualScheduler, ScheduleError, Scheduler, Task, TaskId, TimerScheduler};
pub use term::{LinePainter, LineStyle};
