//! Push-button gesture classification library.
//!
//! Turns raw level samples from a momentary or latching switch into
//! single taps, N-tap sequences, long holds and continuous holds, polled
//! once per loop iteration without blocking.  Exposes the pure-logic
//! modules for host testing; ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod button;
pub mod config;
pub mod error;
pub mod pins;
pub mod ports;
pub mod timer;

pub use button::{Button, Gesture, Owner, Repeats};
pub use config::{ButtonConfig, GestureConfig};
pub use error::{ConfigError, Error};
pub use pins::{Fixation, PinId, PullMode};
