//! Single-shot round timer.
//!
//! A `RoundTimer` tracks one deadline at a time. The engine arms it when a
//! timed round starts running and the deadline is checked lazily: the model
//! is single-threaded and cooperative, so expiry is observed when the caller
//! polls (`Game::has_failed`), never mid-render. There is no background
//! thread and nothing to join or drop.
//!
//! Expiration subscribers are scoped to the armed round: they fire exactly
//! once, in registration order, and are discarded on fire or cancel. Nothing
//! leaks across rounds.

use std::time::{Duration, Instant};

use log::{debug, trace};

type ExpiryCallback = Box<dyn FnMut()>;

/// Single-shot, difficulty-scaled countdown.
#[derive(Default)]
pub struct RoundTimer {
    deadline: Option<Instant>,
    expired: bool,
    on_expired: Vec<ExpiryCallback>,
}

impl RoundTimer {
    /// A timer with nothing armed and nothing expired.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a one-shot expiry at `now + budget`.
    ///
    /// Replaces any previously armed deadline and resets the expired flag.
    /// Subscribers registered before `arm` apply to the round being armed.
    pub fn arm(&mut self, now: Instant, budget: Duration) {
        debug!("timer: arm {:?}", budget);
        self.expired = false;
        self.deadline = Some(now + budget);
    }

    /// Register a callback for the current (or upcoming) round's expiry.
    ///
    /// Invoked at most once, then dropped. Registration order is invocation
    /// order.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) {
        self.on_expired.push(Box::new(callback));
    }

    /// Cancel the pending deadline, if any, and drop the scoped subscribers.
    ///
    /// Safe to call when nothing is armed or after the timer already fired;
    /// an already-set expired flag is left untouched.
    pub fn cancel(&mut self) {
        trace!("timer: cancel (pending = {})", self.deadline.is_some());
        self.deadline = None;
        self.on_expired.clear();
    }

    /// Observe the deadline against `now`.
    ///
    /// On the poll that crosses the deadline: sets the expired flag, invokes
    /// every subscriber in registration order, drains them, and clears the
    /// pending deadline. Returns true only on that poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                debug!("timer: expired");
                self.deadline = None;
                self.expired = true;
                for mut callback in self.on_expired.drain(..) {
                    callback();
                }
                true
            }
            _ => false,
        }
    }

    /// Whether the last armed deadline has fired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Whether a deadline is currently pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
