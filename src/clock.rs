//! Time source module.
//!
//! The engine reads the clock only when the state carries no frozen `now`.
//! Tests and replays inject a [`FixedClock`] to stay deterministic.

use crate::state::{ResourceState, Timestamp};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| Timestamp::try_from(elapsed.as_millis()).unwrap_or(Timestamp::MAX))
            .unwrap_or(0)
    }
}

/// A clock frozen at one instant.
///
/// # Examples
///
/// ```rust
/// use zzregen::{Clock, FixedClock};
///
/// let clock = FixedClock(42_500);
/// assert_eq!(clock.now_millis(), 42_500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now_millis(&self) -> Timestamp {
        self.0
    }
}

/// Truncate a millisecond timestamp down to whole seconds.
pub fn truncate_to_second(at: Timestamp) -> Timestamp {
    at - at.rem_euclid(1000)
}

/// The timestamp a reconciliation runs up to.
///
/// A positive frozen `state.now` wins over the clock. Either way the
/// result is truncated to whole seconds so calls within the same second
/// agree.
pub fn effective_now<C: Clock + ?Sized>(state: &ResourceState, clock: &C) -> Timestamp {
    if state.now > 0 {
        truncate_to_second(state.now)
    } else {
        truncate_to_second(clock.now_millis())
    }
}
