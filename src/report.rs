//! Reconciliation report module.
//!
//! Contains the `Reconciliation` type, a read-only breakdown of what one
//! update did at every breakpoint. Useful for debugging and replay checks.

use crate::state::Timestamp;
use serde::{Deserialize, Serialize};

/// What the engine computed at one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Breakpoint timestamp (ms).
    pub at: Timestamp,
    /// Effective tick interval over this segment.
    pub tick_interval: i32,
    /// Effective amount per tick over this segment.
    pub tick_value: i32,
    /// Effective maximum over this segment.
    pub max: i32,
    /// Ticks completed in this segment.
    pub ticks: i64,
    /// Current-value suppression undone at this breakpoint, if any.
    pub suppressed: Option<i64>,
    /// `current` after this segment.
    pub current: i32,
}

/// Full breakdown of one update.
///
/// # Examples
///
/// ```rust
/// use zzregen::{FixedClock, ResourceState};
/// use zzregen::engine::reconcile;
///
/// let mut state = ResourceState {
///     max: 100,
///     tick_interval: 10,
///     tick_value: 5,
///     ..ResourceState::default()
/// };
///
/// let report = reconcile(&mut state, &FixedClock(35_000));
/// assert!(report.changed);
/// assert_eq!(report.segments.len(), 1);
/// assert_eq!(report.total_ticks(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// The effective time the state was reconciled up to.
    pub now: Timestamp,
    /// Whether `current`, the tick countdown or the last update moved.
    pub changed: bool,
    /// Whether the resource ended at or above its max.
    pub capped: bool,
    /// Per-breakpoint breakdown, in time order.
    pub segments: Vec<Segment>,
}

impl Reconciliation {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now,
            changed: false,
            capped: false,
            segments: Vec::new(),
        }
    }

    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Ticks completed across every segment.
    pub fn total_ticks(&self) -> i64 {
        self.segments
            .iter()
            .fold(0i64, |total, segment| total.saturating_add(segment.ticks))
    }
}
