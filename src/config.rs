//! Button and gesture configuration.
//!
//! [`GestureConfig`] holds the timing constants every classifier uses.
//! [`ButtonConfig`] is the raw description of one button as it arrives from
//! persistent storage or a provisioning blob; it is validated when a
//! [`Button`](crate::button::Button) is built from it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gesture timing parameters, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Quiet period a pressed level must hold before it counts.
    pub debounce_ms: u32,
    /// Multi-press observation window for the flag classifier.
    pub multipress_flag_window_ms: u32,
    /// Multi-press observation window for the callback classifier.
    pub multipress_callback_window_ms: u32,
    /// Hold time before a long press fires.
    pub long_press_ms: u32,
    /// Longest hold still read as a tap when released before
    /// `long_press_ms`.  Longer holds are aborted long presses and commit
    /// nothing.  Only applies while a long-press classifier is polled.
    pub tap_max_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 3,
            multipress_flag_window_ms: 1_000,
            multipress_callback_window_ms: 3_000,
            long_press_ms: 3_000,
            tap_max_ms: 1_000,
        }
    }
}

impl GestureConfig {
    /// Reject zero durations and a debounce that would swallow a gesture.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::InvalidTiming("debounce_ms must be non-zero"));
        }
        if self.multipress_flag_window_ms == 0 || self.multipress_callback_window_ms == 0 {
            return Err(ConfigError::InvalidTiming("multi-press windows must be non-zero"));
        }
        if self.long_press_ms <= self.debounce_ms {
            return Err(ConfigError::InvalidTiming("long_press_ms must exceed debounce_ms"));
        }
        if self.multipress_flag_window_ms <= self.debounce_ms
            || self.multipress_callback_window_ms <= self.debounce_ms
        {
            return Err(ConfigError::InvalidTiming("multi-press windows must exceed debounce_ms"));
        }
        if self.tap_max_ms <= self.debounce_ms {
            return Err(ConfigError::InvalidTiming("tap_max_ms must exceed debounce_ms"));
        }
        Ok(())
    }
}

/// Unvalidated description of one button.
///
/// `pull_mode` uses the ESP-IDF `gpio_pull_mode_t` codes
/// (0 = up, 1 = down, 2 = up+down, 3 = floating); `fixation` is
/// 0 = momentary, 1 = latching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub pin: i32,
    pub pull_mode: u8,
    pub fixation: u8,
    #[serde(default)]
    pub gestures: GestureConfig,
}
