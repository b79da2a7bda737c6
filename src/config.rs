//! Resource configuration module.
//!
//! A `ResourceConfig` is the static template of a regenerating resource
//! (bounds, tick timing, channel assignment), typically loaded from game
//! data. It builds fresh [`ResourceState`] records.

use crate::channel::Channels;
use crate::error::RegenError;
use crate::state::{ResourceState, NEVER_UPDATED};
use serde::{Deserialize, Serialize};

/// Static description of one kind of regenerating resource.
///
/// # Examples
///
/// ```rust
/// use zzregen::ResourceConfig;
///
/// let config = ResourceConfig::from_json(r#"{
///     "max": 100,
///     "tick_interval": 10,
///     "tick_value": 5,
///     "channels": { "max": 2, "interval": 3 }
/// }"#).unwrap();
///
/// let state = config.new_state(40).unwrap();
/// assert_eq!(state.current, 40);
/// assert_eq!(state.max, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub min: i32,
    pub max: i32,
    pub tick_interval: i32,
    pub tick_value: i32,
    pub channels: Channels,
    pub downward_correction: bool,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 0,
            tick_interval: 1,
            tick_value: 1,
            channels: Channels::none(),
            downward_correction: false,
        }
    }
}

impl ResourceConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, RegenError> {
        let config: ResourceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the bounds are ordered.
    ///
    /// Tick interval and tick value are not checked here; the engine
    /// raises them to 1 on its own.
    pub fn validate(&self) -> Result<(), RegenError> {
        if self.min > self.max {
            return Err(RegenError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Build a never-updated state holding `current`, clamped into bounds.
    pub fn new_state(&self, current: i32) -> Result<ResourceState, RegenError> {
        self.validate()?;
        Ok(ResourceState {
            current: current.clamp(self.min, self.max),
            min: self.min,
            max: self.max,
            last_update_at: NEVER_UPDATED,
            tick_interval: self.tick_interval,
            tick_value: self.tick_value,
            channels: self.channels,
            downward_correction: self.downward_correction,
            ..ResourceState::default()
        })
    }
}
