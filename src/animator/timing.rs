//! Timing configuration for the animation cycle.

use std::time::Duration;

/// The four delays that pace one animation cycle.
///
/// Writing and deleting run at their own per-grapheme rates (deletion is
/// conventionally faster), and the two holds bracket the fully-written and
/// fully-cleared states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between revealed graphemes.
    pub write_delay: Duration,
    /// Delay between removed graphemes.
    pub delete_delay: Duration,
    /// Hold after both segments are fully written, before deletion starts.
    pub pause_after_write: Duration,
    /// Hold after both segments are fully cleared, before the next cycle.
    pub pause_after_delete: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            write_delay: Duration::from_millis(120),
            delete_delay: Duration::from_millis(60),
            pause_after_write: Duration::from_millis(1500),
            pause_after_delete: Duration::from_millis(800),
        }
    }
}

impl Timing {
    /// Uniform timing: every step and hold uses the same delay.
    ///
    /// Mostly useful in tests and benchmarks where the cadence is driven
    /// by a virtual clock anyway.
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            write_delay: delay,
            delete_delay: delay,
            pause_after_write: delay,
            pause_after_delete: delay,
        }
    }
}
