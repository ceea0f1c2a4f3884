//! Time sources for the round timer and results stamping.
//!
//! The engine never calls `Instant::now()` directly; it reads time through
//! `GameClock` so that sessions can be driven deterministically in tests and
//! replays, the same way `GameRng` makes round selection deterministic.
//!
//! Two implementations ship with the crate:
//! - `SystemClock`: the production clock.
//! - `ManualClock`: a shareable, manually advanced clock. Clones observe the
//!   same time, so a test can keep a handle while the engine owns another.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// A source of monotonic and wall-clock time.
pub trait GameClock {
    /// Current monotonic instant, used for timer deadlines.
    fn now(&self) -> Instant;

    /// Milliseconds since the Unix epoch, used to stamp results files.
    fn epoch_millis(&self) -> u128;
}

/// The production clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl GameClock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_millis(&self) -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }
}

/// A manually advanced clock for deterministic sessions.
///
/// Cloning produces a handle onto the same underlying time, so callers can
/// hand one clone to the engine and keep another to drive it:
///
/// ```
/// use std::time::Duration;
/// use typedrill::core::{GameClock, ManualClock};
///
/// let clock = ManualClock::starting_at(1_700_000_000_000);
/// let handle = clock.clone();
///
/// let before = clock.now();
/// handle.advance(Duration::from_millis(500));
/// assert_eq!(clock.now() - before, Duration::from_millis(500));
/// assert_eq!(clock.epoch_millis(), 1_700_000_000_500);
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: Instant,
    epoch_base: u128,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock whose wall time starts at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a clock whose wall time starts at `epoch_millis`.
    #[must_use]
    pub fn starting_at(epoch_millis: u128) -> Self {
        Self {
            base: Instant::now(),
            epoch_base: epoch_millis,
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Advance the clock by `delta`. All clones observe the new time.
    pub fn advance(&self, delta: Duration) {
        self.offset.set(self.offset.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }

    fn epoch_millis(&self) -> u128 {
        self.epoch_base + self.offset.get().as_millis()
    }
}
