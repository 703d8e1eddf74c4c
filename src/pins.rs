//! Input line identity and electrical configuration.
//!
//! A button is bound to one GPIO.  Its pull configuration decides how the
//! raw electrical level maps to "logically pressed"; that mapping lives
//! here so every level source applies it the same way.

use core::fmt;

use crate::error::ConfigError;

/// Number of GPIOs on the target (ESP32: GPIO0 – GPIO39).
pub const TOTAL_PINS: i32 = 40;

/// Momentary push-button used by the firmware demo loop.
/// Active-low with the internal pull-up enabled.
pub const BUTTON_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Pin identity
// ---------------------------------------------------------------------------

/// GPIO number, or the [`PinId::NC`] "unconnected" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(i32);

impl PinId {
    /// Unconnected line (`GPIO_NUM_NC`).  Classifiers bound to it never act.
    pub const NC: Self = Self(-1);

    /// Validate a raw GPIO number.
    pub const fn new(gpio: i32) -> Result<Self, ConfigError> {
        if gpio == Self::NC.0 || (gpio >= 0 && gpio < TOTAL_PINS) {
            Ok(Self(gpio))
        } else {
            Err(ConfigError::InvalidPin(gpio))
        }
    }

    pub const fn gpio(self) -> i32 {
        self.0
    }

    pub const fn is_connected(self) -> bool {
        self.0 != Self::NC.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_connected() {
            write!(f, "GPIO{}", self.0)
        } else {
            write!(f, "GPIO_NC")
        }
    }
}

// ---------------------------------------------------------------------------
// Pull configuration
// ---------------------------------------------------------------------------

/// Internal pull resistor configuration, in ESP-IDF `gpio_pull_mode_t` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PullMode {
    /// Pulled high; the switch shorts to ground (active-low).
    PullUp = 0,
    /// Pulled low; the switch connects to VCC (active-high).
    PullDown = 1,
    PullUpDown = 2,
    Floating = 3,
}

impl TryFrom<u8> for PullMode {
    type Error = ConfigError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::PullUp),
            1 => Ok(Self::PullDown),
            2 => Ok(Self::PullUpDown),
            3 => Ok(Self::Floating),
            other => Err(ConfigError::InvalidPullMode(other)),
        }
    }
}

/// Map a raw electrical level to "logically pressed" for `pull`.
///
/// Floating and pull-up-and-down lines have no defined idle level, so the
/// raw level is passed through unchanged.
pub const fn normalize_level(raw_high: bool, pull: PullMode) -> bool {
    match pull {
        PullMode::PullUp => !raw_high,
        PullMode::PullDown | PullMode::PullUpDown | PullMode::Floating => raw_high,
    }
}

// ---------------------------------------------------------------------------
// Mechanical type
// ---------------------------------------------------------------------------

/// Whether the switch returns to released on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Fixation {
    /// Springs back when let go.  Supports every gesture.
    Momentary = 0,
    /// Keeps its position until toggled again.  Infinite press only.
    Latching = 1,
}

impl TryFrom<u8> for Fixation {
    type Error = ConfigError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Momentary),
            1 => Ok(Self::Latching),
            other => Err(ConfigError::InvalidFixation(other)),
        }
    }
}
