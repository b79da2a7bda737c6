//! Channel identifier module.
//!
//! A channel is an opaque integer that selects which effective quantity a
//! buff modifies. The engine never interprets the number itself; it only
//! compares a buff's channel against the four ids configured on a resource.

use serde::{Deserialize, Serialize};

/// Opaque identifier selecting the quantity a buff modifies.
///
/// # Examples
///
/// ```rust
/// use zzregen::ChannelId;
///
/// let haste = ChannelId::new(7);
/// let same: ChannelId = 7.into();
///
/// assert_eq!(haste, same);
/// assert_eq!(haste.raw(), 7);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(i32);

impl ChannelId {
    /// Create a new `ChannelId` from its raw value.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Get the raw integer value of this channel.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for ChannelId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four channel assignments of a resource.
///
/// `None` means no channel is assigned, so no buff can ever affect that
/// quantity.
///
/// # Examples
///
/// ```rust
/// use zzregen::{ChannelId, Channels};
///
/// let channels = Channels::none()
///     .with_max(ChannelId::new(2))
///     .with_interval(ChannelId::new(3));
///
/// assert!(channels.targets(ChannelId::new(2)));
/// assert!(!channels.targets(ChannelId::new(4)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channels {
    /// Channel whose buffs suppress the visible current value until expiry.
    pub current: Option<ChannelId>,
    /// Channel whose buffs shift the maximum value.
    pub max: Option<ChannelId>,
    /// Channel whose buffs shift the tick interval (seconds).
    pub interval: Option<ChannelId>,
    /// Channel whose buffs shift the amount added per tick.
    pub tick_value: Option<ChannelId>,
}

impl Channels {
    /// No channels assigned; every buff is inert.
    pub const fn none() -> Self {
        Self {
            current: None,
            max: None,
            interval: None,
            tick_value: None,
        }
    }

    /// Assign the channel that suppresses `current`.
    pub fn with_current(mut self, channel: ChannelId) -> Self {
        self.current = Some(channel);
        self
    }

    /// Assign the channel that shifts `max`.
    pub fn with_max(mut self, channel: ChannelId) -> Self {
        self.max = Some(channel);
        self
    }

    /// Assign the channel that shifts the tick interval.
    pub fn with_interval(mut self, channel: ChannelId) -> Self {
        self.interval = Some(channel);
        self
    }

    /// Assign the channel that shifts the per-tick amount.
    pub fn with_tick_value(mut self, channel: ChannelId) -> Self {
        self.tick_value = Some(channel);
        self
    }

    /// Whether a buff on `channel` affects any assigned quantity.
    pub fn targets(&self, channel: ChannelId) -> bool {
        [self.current, self.max, self.interval, self.tick_value]
            .iter()
            .any(|assigned| *assigned == Some(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_creation() {
        let a = ChannelId::new(3);
        let b: ChannelId = 3.into();
        assert_eq!(a, b);
        assert_eq!(a.raw(), 3);
        assert_eq!(a.to_string(), "#3");
    }

    #[test]
    fn test_channel_id_ordering() {
        assert!(ChannelId::new(-1) < ChannelId::new(0));
        assert!(ChannelId::new(2) < ChannelId::new(10));
    }

    #[test]
    fn test_unassigned_channels_match_nothing() {
        let channels = Channels::none();
        assert!(!channels.targets(ChannelId::new(-1)));
        assert!(!channels.targets(ChannelId::new(0)));
    }

    #[test]
    fn test_targets_any_assignment() {
        let channels = Channels::none()
            .with_current(ChannelId::new(1))
            .with_tick_value(ChannelId::new(4));
        assert!(channels.targets(ChannelId::new(1)));
        assert!(channels.targets(ChannelId::new(4)));
        assert!(!channels.targets(ChannelId::new(2)));
    }

    #[test]
    fn test_channels_serde() {
        let channels = Channels::none().with_max(ChannelId::new(9));
        let json = serde_json::to_string(&channels).unwrap();
        assert!(json.contains("\"max\":9"));

        let parsed: Channels = serde_json::from_str(r#"{"interval": 5}"#).unwrap();
        assert_eq!(parsed.interval, Some(ChannelId::new(5)));
        assert_eq!(parsed.max, None);
    }
}
