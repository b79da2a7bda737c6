//! # zzregen - Deterministic Catch-Up Regeneration Engine
//!
//! Computes how a bounded resource (stamina, energy, action points)
//! regenerates over wall-clock time when its tick interval, tick value and
//! bounds are temporarily modified by time-limited buffs.
//!
//! - **On demand**: no timers; each call reconciles from the last update to now
//! - **Catch-up**: skipped ticks are computed arithmetically, never replayed
//! - **Deterministic**: a frozen `now` always gives the same result
//! - **Hardcode-free**: buff channels are opaque integers
//!
//! ## Pipeline
//!
//! ```text
//! [Buffs] → [Timeline of breakpoints] → [Per-segment tick arithmetic] → [ResourceState]
//! ```
//!
//! 1. Parameters are corrected (tick interval and value at least 1)
//! 2. Buff expiries split `[last_update_at, now]` into segments
//! 3. Each segment runs with the net effect of the buffs still active
//! 4. The state is written back and a [`Reconciliation`] breakdown returned
//!
//! ## Example
//!
//! ```rust
//! use zzregen::*;
//!
//! let haste = ChannelId::new(3);
//! let mut stamina = ResourceState {
//!     max: 100,
//!     tick_interval: 10,
//!     tick_value: 5,
//!     channels: Channels::none().with_interval(haste),
//!     ..ResourceState::default()
//! };
//!
//! // A haste buff halves the tick interval until well past now.
//! stamina.buffs.push(Buff::new(haste, -5, 1_000_000));
//!
//! let changed = update_with_clock(&mut stamina, &FixedClock(35_000));
//! assert!(changed);
//! assert_eq!(stamina.current, 35); // 7 ticks of 5 instead of 3
//! ```
//!
//! ## Modules
//!
//! - [`state`] - The resource record and its defaults
//! - [`buff`] - Time-limited modifiers
//! - [`channel`] - Channel identifiers and assignments
//! - [`clock`] - Time sources
//! - [`timeline`] - Breakpoint construction and effect accumulation
//! - [`engine`] - The reconciliation algorithm
//! - [`report`] - Per-segment breakdown of an update
//! - [`config`] - Static resource templates
//! - [`error`] - Error types

pub mod buff;
pub mod channel;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod state;
pub mod timeline;

// Re-export main types for convenience
pub use buff::Buff;
pub use channel::{ChannelId, Channels};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ResourceConfig;
pub use engine::{reconcile, reset, update, update_with_clock};
pub use error::RegenError;
pub use report::{Reconciliation, Segment};
pub use state::{ResourceState, Timestamp, NEVER_UPDATED, UNSET_REMAINING};
pub use timeline::{Breakpoint, EffectDeltas, Timeline};
