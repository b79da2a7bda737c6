//! Reconciliation engine module.
//!
//! The engine brings a [`ResourceState`] from its last update up to now in
//! one pass. Instead of replaying ticks one by one it walks the breakpoint
//! timeline and converts each segment's elapsed seconds into whole ticks,
//! so the result is the same no matter how many real ticks were skipped.
//!
//! The engine holds no state of its own; every function takes the resource
//! by mutable reference.

use crate::clock::{effective_now, Clock, SystemClock};
use crate::report::{Reconciliation, Segment};
use crate::state::{ResourceState, Timestamp};
use crate::timeline::{apply_delta, EffectDeltas, Timeline};

/// Reconcile `state` up to now using the system clock.
///
/// Returns whether `current`, the tick countdown or the last update moved.
/// A frozen `state.now` still takes precedence over the clock.
///
/// `max` and `tick_interval` are written back as effective values. When
/// buffs target them, restore the base values before the next call; a
/// second call at the same `now` then returns `false`.
pub fn update(state: &mut ResourceState) -> bool {
    update_with_clock(state, &SystemClock)
}

/// Reconcile `state` up to now, reading `clock` when no frozen `now` is set.
///
/// Same contract as [`update`].
///
/// # Examples
///
/// ```rust
/// use zzregen::{FixedClock, ResourceState};
/// use zzregen::engine::update_with_clock;
///
/// let mut state = ResourceState {
///     max: 100,
///     tick_interval: 10,
///     tick_value: 5,
///     ..ResourceState::default()
/// };
/// let clock = FixedClock(35_000);
///
/// assert!(update_with_clock(&mut state, &clock));
/// assert_eq!(state.current, 15);
///
/// // Same second, nothing left to do.
/// assert!(!update_with_clock(&mut state, &clock));
/// ```
pub fn update_with_clock<C: Clock + ?Sized>(state: &mut ResourceState, clock: &C) -> bool {
    reconcile(state, clock).changed
}

/// Restore `state` to its safe defaults.
pub fn reset(state: &mut ResourceState) {
    state.reset();
}

/// Reconcile `state` and return the full per-breakpoint breakdown.
pub fn reconcile<C: Clock + ?Sized>(state: &mut ResourceState, clock: &C) -> Reconciliation {
    let before = Snapshot::of(state);
    state.correct();

    if state.min > state.max {
        tracing::warn!(
            min = state.min,
            max = state.max,
            "resource bounds are inverted, current will be held at min"
        );
    }

    let now = effective_now(state, clock);
    if !state.is_never_updated() && now < state.last_update_at {
        tracing::warn!(
            now,
            last_update_at = state.last_update_at,
            "clock is behind the last update"
        );
    }

    let timeline = Timeline::build(state, now);
    let mut report = Reconciliation::new(now);

    let mut checkpoint = if state.is_never_updated() {
        0
    } else {
        state.last_update_at.div_euclid(1000)
    };
    let mut tick_interval = state.tick_interval;
    let mut max = state.max;

    for breakpoint in timeline {
        let channels = state.channels;
        tick_interval = apply_delta(state.tick_interval, &breakpoint.deltas, channels.interval);
        let tick_value = apply_delta(state.tick_value, &breakpoint.deltas, channels.tick_value);
        max = apply_delta(state.max, &breakpoint.deltas, channels.max);

        let at_seconds = breakpoint.at.min(now).div_euclid(1000);
        let interval = i64::from(tick_interval);

        // Seconds already banked toward the running tick under this interval.
        let banked = (interval - i64::from(state.remaining_seconds)).max(0);
        let duration = (at_seconds - checkpoint).max(0).saturating_add(banked);

        let ticks = duration / interval;
        increase(state, ticks.saturating_mul(i64::from(tick_value)), max);

        checkpoint = at_seconds;
        // A tick landing exactly on the boundary leaves a full interval.
        state.remaining_seconds = (interval - duration % interval) as i32;

        let suppressed = suppression_at(state, &breakpoint.deltas, breakpoint.at);
        if let Some(magnitude) = suppressed {
            let lowered = i64::from(state.current).saturating_sub(magnitude);
            state.current = lowered.max(i64::from(state.min)).min(i64::from(i32::MAX)) as i32;
        }

        tracing::debug!(
            at = breakpoint.at,
            tick_interval,
            tick_value,
            max,
            ticks,
            current = state.current,
            remaining_seconds = state.remaining_seconds,
            "reconciled segment"
        );

        report.push_segment(Segment {
            at: breakpoint.at,
            tick_interval,
            tick_value,
            max,
            ticks,
            suppressed,
            current: state.current,
        });
    }

    state.max = max;
    state.tick_interval = tick_interval;
    state.current = state.current.max(state.min);

    if state.current >= state.max {
        // One second short of a full interval, so the first tick after the
        // cap lifts is not delayed.
        state.last_update_at = now;
        state.remaining_seconds = tick_interval - 1;
        report.capped = true;
    } else {
        state.last_update_at = checkpoint.saturating_mul(1000);
    }

    report.changed = Snapshot::of(state) != before;
    report
}

/// Add `amount` to `current` within `[min, max]`.
///
/// Without downward correction a resource already at or above `max` is left
/// alone, so a raised max never refills it retroactively.
fn increase(state: &mut ResourceState, amount: i64, max: i32) {
    if !state.downward_correction && state.current >= max {
        return;
    }

    let raised = i64::from(state.current).saturating_add(amount);
    state.current = raised.min(i64::from(max)).max(i64::from(state.min)) as i32;
}

/// The current-value suppression that expires at this breakpoint, if any.
///
/// A breakpoint sitting exactly on `last_update_at` was the end of the
/// previous reconciliation, which already undid its suppression.
fn suppression_at(
    state: &ResourceState,
    deltas: &EffectDeltas,
    at: Timestamp,
) -> Option<i64> {
    if !state.is_never_updated() && at <= state.last_update_at {
        return None;
    }
    state
        .channels
        .current
        .and_then(|channel| deltas.get(channel))
}

/// Regeneration progress of a resource.
///
/// Written-back `max` and `tick_interval` are restatements of the buffed
/// values, not progress, so they are left out.
#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    current: i32,
    remaining_seconds: i32,
    last_update_at: Timestamp,
}

impl Snapshot {
    fn of(state: &ResourceState) -> Self {
        Self {
            current: state.current,
            remaining_seconds: state.remaining_seconds,
            last_update_at: state.last_update_at,
        }
    }
}
