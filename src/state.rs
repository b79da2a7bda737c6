//! Resource state module.
//!
//! `ResourceState` is the long-lived record describing one regenerating
//! stat. The caller owns it and refreshes its buff list; only the engine
//! mutates the regeneration fields.

use crate::buff::Buff;
use crate::channel::Channels;
use crate::clock::Clock;
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// `last_update_at` value for a resource that was never reconciled.
pub const NEVER_UPDATED: Timestamp = -1;

/// `remaining_seconds` value meaning "start a fresh tick interval".
pub const UNSET_REMAINING: i32 = -1;

/// The mutable record of one regenerating resource.
///
/// After [`ResourceState::update`], `max` and `tick_interval` hold the
/// effective values as of the reconciled time. Callers whose buffs target
/// those channels refresh the base values along with the buff list.
///
/// # Examples
///
/// ```rust
/// use zzregen::ResourceState;
///
/// let mut stamina = ResourceState {
///     max: 100,
///     tick_interval: 10,
///     tick_value: 5,
///     now: 35_000,
///     ..ResourceState::default()
/// };
///
/// assert!(stamina.update());
/// assert_eq!(stamina.current, 15);
/// assert_eq!(stamina.remaining_seconds, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceState {
    pub current: i32,
    pub min: i32,
    pub max: i32,

    /// Time of the last reconciliation; negative when never updated.
    pub last_update_at: Timestamp,

    /// Frozen current time. `0` means "read the clock".
    pub now: Timestamp,

    /// Base seconds between ticks.
    pub tick_interval: i32,

    /// Base amount added per completed tick.
    pub tick_value: i32,

    /// Seconds left until the next tick completes.
    pub remaining_seconds: i32,

    pub channels: Channels,

    /// Keep applying ticks while `current >= max`, which lets a lowered
    /// max pull `current` down.
    pub downward_correction: bool,

    /// Buffs active for the next update. Supplied by the caller.
    pub buffs: Vec<Buff>,
}

impl Default for ResourceState {
    fn default() -> Self {
        Self {
            current: 0,
            min: 0,
            max: 0,
            last_update_at: 0,
            now: 0,
            tick_interval: 0,
            tick_value: 0,
            remaining_seconds: UNSET_REMAINING,
            channels: Channels::none(),
            downward_correction: false,
            buffs: Vec::new(),
        }
    }
}

impl ResourceState {
    /// Create a state with every field at its safe default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its safe default so the record can be reused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzregen::{ResourceState, UNSET_REMAINING};
    ///
    /// let mut state = ResourceState { current: 40, max: 50, ..ResourceState::default() };
    /// state.reset();
    ///
    /// assert_eq!(state, ResourceState::default());
    /// assert_eq!(state.remaining_seconds, UNSET_REMAINING);
    /// ```
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Correct parameters that would otherwise break the tick arithmetic.
    ///
    /// Tick interval and tick value are raised to at least 1, and an unset
    /// countdown starts a full interval.
    pub fn correct(&mut self) {
        if self.tick_interval <= 0 {
            self.tick_interval = 1;
        }
        if self.tick_value <= 0 {
            self.tick_value = 1;
        }
        if self.remaining_seconds == UNSET_REMAINING {
            self.remaining_seconds = self.tick_interval;
        }
    }

    /// Whether the resource has never been reconciled.
    pub fn is_never_updated(&self) -> bool {
        self.last_update_at < 0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Drop buffs that expired strictly before `at`.
    ///
    /// The engine ignores stale buffs on its own; this only keeps the list
    /// short for callers that persist it.
    pub fn retain_active_buffs(&mut self, at: Timestamp) {
        self.buffs.retain(|buff| buff.is_active_at(at));
    }

    /// Reconcile this resource up to now using the system clock.
    ///
    /// Returns whether `current`, the tick countdown or the last update
    /// moved. See [`crate::engine::update`] for the base value contract.
    pub fn update(&mut self) -> bool {
        crate::engine::update(self)
    }

    /// Reconcile this resource up to now using `clock` when no frozen
    /// `now` is set.
    pub fn update_with_clock<C: Clock + ?Sized>(&mut self, clock: &C) -> bool {
        crate::engine::update_with_clock(self, clock)
    }
}
