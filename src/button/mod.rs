//! Polled push-button gesture classifier.
//!
//! One [`Button`] per physical switch.  The application calls one
//! classifier per gesture it cares about, once per loop iteration; each
//! call samples the line, advances a small state machine by one step and
//! returns without blocking.  Recognising a gesture spans many calls.
//!
//! ## Gestures
//!
//! | Classifier | Fires when                                        | Fixation  |
//! |------------|---------------------------------------------------|-----------|
//! | onetime    | on release of a debounced press                   | momentary |
//! | multiple   | N taps, then a quiet window with no further taps  | momentary |
//! | longtime   | once per hold, after the line is held long enough | momentary |
//! | infinite   | for as long as the line stays pressed             | any       |
//!
//! Each classifier comes in a flag variant (toggles a caller-owned `bool`)
//! and a callback variant (invokes the `fn()` bound with the matching
//! `set_*_callback`).
//!
//! ## Ownership between gesture families
//!
//! Onetime/multiple (the short family) and longtime share one physical
//! press.  [`Owner`] arbitrates: while a hold is being measured the short
//! family may not commit.  A hold released within `tap_max_ms` is handed
//! back to the short family as a tap.  A longer hold consumes its release,
//! whether the long press fired or was abandoned before the threshold.
//! Infinite press is independent of the arbiter.
//!
//! Combining longtime with infinite on one button, or onetime with
//! multiple, is unsupported; the classifiers share press state.

mod arbiter;
mod debounce;
mod infinite;
mod longtime;
mod multiple;
mod onetime;
mod sink;

use core::fmt;

use heapless::Vec;
use log::error;

pub use arbiter::Owner;
pub use sink::{Callback, LOOP_PERFORMANCE, Repeats};

use crate::config::{ButtonConfig, GestureConfig};
use crate::error::ConfigError;
use crate::pins::{Fixation, PinId, PullMode};
use crate::ports::{Clock, LevelSource};
use crate::timer::AwaitTimer;
use multiple::{Sequence, Target};

/// Distinct multi-press call sites (target and window) tracked per button.
pub const MAX_TARGETS: usize = 8;

/// A classified gesture, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Onetime,
    Multiple(u8),
    Longtime,
    Infinite,
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Onetime => write!(f, "onetime press"),
            Self::Multiple(n) => write!(f, "{n}x press"),
            Self::Longtime => write!(f, "long press"),
            Self::Infinite => write!(f, "infinite press"),
        }
    }
}

/// Callbacks bound to a button, one per gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct Callbacks {
    pub onetime: Option<Callback>,
    pub multiple: Option<Callback>,
    pub longtime: Option<Callback>,
    pub infinite: Option<Callback>,
}

/// Persistent per-button state.
pub struct Button<L, C> {
    pin: PinId,
    pull: PullMode,
    fixation: Fixation,
    config: GestureConfig,
    line: L,
    clock: C,

    // Press tracking
    is_pressed: bool,
    is_long_held: bool,
    infinite_held: bool,
    release_snapshot: bool,

    owner: Owner,

    // Multi-press sequence
    press_count: u32,
    sequence: Sequence,
    max_observed_target: u8,
    targets: Vec<Target, MAX_TARGETS>,
    targets_overflowed: bool,

    callbacks: Callbacks,
    longtime_ready: bool,
    infinite_ready: bool,

    debounce_timer: AwaitTimer,
    multipress_timer: AwaitTimer,
    longpress_timer: AwaitTimer,
}

impl<L: LevelSource, C: Clock> Button<L, C> {
    /// Bind a button to `pin` with the default gesture timings.
    pub fn new(pin: PinId, pull: PullMode, fixation: Fixation, line: L, clock: C) -> Self {
        Self {
            pin,
            pull,
            fixation,
            config: GestureConfig::default(),
            line,
            clock,
            is_pressed: false,
            is_long_held: false,
            infinite_held: false,
            release_snapshot: false,
            owner: Owner::ShortPress,
            press_count: 0,
            sequence: Sequence::Counting,
            max_observed_target: 1,
            targets: Vec::new(),
            targets_overflowed: false,
            callbacks: Callbacks::default(),
            longtime_ready: false,
            infinite_ready: false,
            debounce_timer: AwaitTimer::new(),
            multipress_timer: AwaitTimer::new(),
            longpress_timer: AwaitTimer::new(),
        }
    }

    /// Replace the gesture timings.
    pub fn with_gestures(mut self, config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Build from an unvalidated description.
    pub fn try_from_config(config: &ButtonConfig, line: L, clock: C) -> Result<Self, ConfigError> {
        let pin = PinId::new(config.pin)?;
        let pull = PullMode::try_from(config.pull_mode)?;
        let fixation = Fixation::try_from(config.fixation)?;
        Self::new(pin, pull, fixation, line, clock).with_gestures(config.gestures)
    }

    /// Build from an unvalidated description, aborting on a bad one.
    ///
    /// An invalid pin, pull mode, fixation or timing is a wiring mistake in
    /// the firmware, not a condition to recover from at runtime.
    pub fn from_config(config: &ButtonConfig, line: L, clock: C) -> Self {
        match Self::try_from_config(config, line, clock) {
            Ok(button) => button,
            Err(e) => {
                error!("button on pin {}: {}", config.pin, e);
                panic!("invalid button configuration: {e}");
            }
        }
    }

    // ── Callback binding ──────────────────────────────────────

    pub fn set_onetime_callback(&mut self, callback: Option<Callback>) {
        self.callbacks.onetime = callback;
    }

    pub fn set_multiple_callback(&mut self, callback: Option<Callback>) {
        self.callbacks.multiple = callback;
    }

    pub fn set_longtime_callback(&mut self, callback: Option<Callback>) {
        self.callbacks.longtime = callback;
    }

    pub fn set_infinite_callback(&mut self, callback: Option<Callback>) {
        self.callbacks.infinite = callback;
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    // ── Timers ────────────────────────────────────────────────

    /// Stop every timer.
    ///
    /// Timers keep their arm time while no classifier polls them, so a
    /// button that was not polled for a while can report a stale elapsed
    /// wait on the next poll.  Call this before resuming classification.
    pub fn reset_timers(&mut self) {
        self.debounce_timer.stop();
        self.multipress_timer.stop();
        self.longpress_timer.stop();
    }

    // ── Shared helpers ────────────────────────────────────────

    /// Current logical level and time, sampled once per classifier call.
    fn sample(&mut self) -> (bool, u64) {
        let level = self.line.read_level(self.pin, self.pull);
        (level, self.clock.now_us())
    }

    /// Onetime, multiple and longtime need a wired momentary switch.
    fn momentary_ready(&self) -> bool {
        self.pin.is_connected() && self.fixation == Fixation::Momentary
    }
}

impl<L, C> Button<L, C> {
    pub fn pin(&self) -> PinId {
        self.pin
    }

    pub fn pull_mode(&self) -> PullMode {
        self.pull
    }

    pub fn fixation(&self) -> Fixation {
        self.fixation
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Debounced press seen by the short family, not yet released.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Debounced press seen by the long-press classifier, not yet released.
    pub fn is_long_held(&self) -> bool {
        self.is_long_held
    }

    /// Taps counted in the current multi-press window.
    pub fn press_count(&self) -> u32 {
        self.press_count
    }

    /// Largest presses target any multi-press call site has asked for.
    pub fn max_observed_target(&self) -> u8 {
        self.max_observed_target
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn longtime_ready(&self) -> bool {
        self.longtime_ready
    }

    pub fn infinite_ready(&self) -> bool {
        self.infinite_ready
    }
}
