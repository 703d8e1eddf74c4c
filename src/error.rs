//! Error types for button configuration and input sampling.
//!
//! Two classes exist.  Configuration errors are programming mistakes found
//! once, at construction; the fallible constructors return them and the
//! infallible ones abort on them.  Precondition violations at poll time
//! (unconnected pin, wrong fixation) are not errors at all, the classifier
//! simply does nothing.  All variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The button description is invalid.
    Config(ConfigError),
    /// The input pin could not be read.
    Gpio,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Gpio => write!(f, "GPIO read failed"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// GPIO number outside `0..TOTAL_PINS` and not the NC sentinel.
    InvalidPin(i32),
    /// Raw pull-mode code outside the four supported modes.
    InvalidPullMode(u8),
    /// Raw fixation code is neither momentary nor latching.
    InvalidFixation(u8),
    /// A gesture timing parameter is zero or inconsistent.
    InvalidTiming(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(pin) => write!(
                f,
                "invalid pin number {pin} (valid 0..{})",
                crate::pins::TOTAL_PINS
            ),
            Self::InvalidPullMode(raw) => write!(f, "invalid pull mode {raw}"),
            Self::InvalidFixation(raw) => write!(f, "invalid button fixation {raw}"),
            Self::InvalidTiming(what) => write!(f, "invalid timing: {what}"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
