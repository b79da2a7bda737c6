//! Buff module.
//!
//! Buffs are supplied fresh by the caller before every update. Each one
//! carries an opaque channel, a signed magnitude and an absolute expiry.

use crate::channel::ChannelId;
use crate::state::Timestamp;
use serde::{Deserialize, Serialize};

/// A time-limited modifier on one channel.
///
/// A buff is in effect for every time up to and including `expires_at`,
/// and contributes nothing strictly after it.
///
/// # Examples
///
/// ```rust
/// use zzregen::{Buff, ChannelId};
///
/// let haste = Buff::new(ChannelId::new(3), -5, 60_000);
///
/// assert!(haste.is_active_at(60_000));
/// assert!(!haste.is_active_at(60_001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    /// The channel this buff modifies.
    pub channel: ChannelId,
    /// Signed delta applied to the base quantity.
    pub magnitude: i32,
    /// Absolute expiry time in milliseconds.
    pub expires_at: Timestamp,
}

impl Buff {
    /// Create a buff on `channel` that lasts until `expires_at` (ms).
    pub fn new(channel: ChannelId, magnitude: i32, expires_at: Timestamp) -> Self {
        Self {
            channel,
            magnitude,
            expires_at,
        }
    }

    /// Whether this buff is still in effect at `at`, expiry included.
    pub fn is_active_at(&self, at: Timestamp) -> bool {
        at <= self.expires_at
    }
}
