//! Breakpoint timeline module.
//!
//! Splits the window between the last update and now at every buff expiry,
//! and records for each breakpoint the net delta every channel receives
//! from the buffs still in effect at that instant.
//!
//! ```text
//! last_update_at        expiry A        expiry B        now
//!       |------------------|---------------|-------------|
//!                       A + B + ..       B + ..          ..
//! ```

use crate::channel::ChannelId;
use crate::state::{ResourceState, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Net delta per channel at one breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDeltas(BTreeMap<ChannelId, i64>);

impl EffectDeltas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to the entry for `channel`, creating it if needed.
    pub fn add(&mut self, channel: ChannelId, delta: i64) {
        let entry = self.0.entry(channel).or_insert(0);
        *entry = entry.saturating_add(delta);
    }

    pub fn get(&self, channel: ChannelId) -> Option<i64> {
        self.0.get(&channel).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChannelId, i64)> + '_ {
        self.0.iter().map(|(channel, delta)| (*channel, *delta))
    }
}

/// One instant at which the set of active buffs changes, or the end of the
/// reconciliation window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub at: Timestamp,
    pub deltas: EffectDeltas,
}

/// Ascending breakpoints covering `[last_update_at, now]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    breakpoints: Vec<Breakpoint>,
}

impl Timeline {
    /// Build the timeline for `state` up to the effective `now`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzregen::{Buff, ChannelId, Channels, ResourceState, Timeline};
    ///
    /// let haste = ChannelId::new(3);
    /// let state = ResourceState {
    ///     channels: Channels::none().with_interval(haste),
    ///     buffs: vec![Buff::new(haste, -2, 10_000), Buff::new(haste, -3, 20_000)],
    ///     ..ResourceState::default()
    /// };
    ///
    /// let timeline = Timeline::build(&state, 30_000);
    /// let at: Vec<i64> = timeline.breakpoints().iter().map(|b| b.at).collect();
    /// assert_eq!(at, vec![10_000, 20_000, 30_000]);
    ///
    /// // Both buffs are in effect up to 10s, only the second up to 20s.
    /// assert_eq!(timeline.breakpoints()[0].deltas.get(haste), Some(-5));
    /// assert_eq!(timeline.breakpoints()[1].deltas.get(haste), Some(-3));
    /// assert_eq!(timeline.breakpoints()[2].deltas.get(haste), None);
    /// ```
    pub fn build(state: &ResourceState, now: Timestamp) -> Self {
        let mut gathered = gather(state);
        gathered.entry(now).or_default();
        accumulate(&mut gathered, state.channels.current);

        let breakpoints = gathered
            .into_iter()
            .filter(|(at, _)| state.is_never_updated() || *at >= state.last_update_at)
            .filter(|(at, _)| *at <= now)
            .map(|(at, deltas)| Breakpoint { at, deltas })
            .collect::<Vec<_>>();

        tracing::trace!(
            count = breakpoints.len(),
            last_update_at = state.last_update_at,
            now,
            "built regeneration timeline"
        );

        Self { breakpoints }
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

impl IntoIterator for Timeline {
    type Item = Breakpoint;
    type IntoIter = std::vec::IntoIter<Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.breakpoints.into_iter()
    }
}

/// Group applicable buff magnitudes by expiry and channel.
fn gather(state: &ResourceState) -> BTreeMap<Timestamp, EffectDeltas> {
    let mut gathered: BTreeMap<Timestamp, EffectDeltas> = BTreeMap::new();
    for buff in &state.buffs {
        if !state.channels.targets(buff.channel) {
            continue;
        }
        gathered
            .entry(buff.expires_at)
            .or_default()
            .add(buff.channel, i64::from(buff.magnitude));
    }
    gathered
}

/// Fold every later breakpoint's deltas into the earlier ones.
///
/// A buff is in effect up to its own expiry, so a breakpoint carries the
/// sum of every buff expiring at or after it. Current-value entries stay
/// local to their own breakpoint: they are undone once, at expiry.
fn accumulate(gathered: &mut BTreeMap<Timestamp, EffectDeltas>, current: Option<ChannelId>) {
    let mut running = EffectDeltas::new();
    for deltas in gathered.values_mut().rev() {
        let mut own_current = None;
        for (channel, delta) in deltas.iter() {
            if Some(channel) == current {
                own_current = Some((channel, delta));
                continue;
            }
            running.add(channel, delta);
        }

        *deltas = running.clone();
        if let Some((channel, delta)) = own_current {
            deltas.add(channel, delta);
        }
    }
}

/// Apply the delta for `channel`, flooring the result at 1.
///
/// Returns `base` untouched when the channel is unassigned or carries no
/// delta at this breakpoint.
///
/// # Examples
///
/// ```rust
/// use zzregen::{ChannelId, EffectDeltas};
/// use zzregen::timeline::apply_delta;
///
/// let haste = ChannelId::new(3);
/// let mut deltas = EffectDeltas::new();
/// deltas.add(haste, -50);
///
/// assert_eq!(apply_delta(10, &deltas, Some(haste)), 1);
/// assert_eq!(apply_delta(10, &deltas, Some(ChannelId::new(4))), 10);
/// assert_eq!(apply_delta(10, &deltas, None), 10);
/// ```
pub fn apply_delta(base: i32, deltas: &EffectDeltas, channel: Option<ChannelId>) -> i32 {
    match channel.and_then(|channel| deltas.get(channel)) {
        None => base,
        Some(delta) => {
            let value = i64::from(base).saturating_add(delta);
            value.clamp(1, i64::from(i32::MAX)) as i32
        }
    }
}
