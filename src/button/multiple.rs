//! N-tap sequences.
//!
//! Every debounced press-release cycle counts one tap and restarts the
//! quiet window.  A call site commits once its own window has passed with
//! no further tap and the count equals its target.  Flag sites settle on
//! `multipress_flag_window_ms`, callback sites on
//! `multipress_callback_window_ms`, so both kinds may poll one button.
//! A count that no registered call site can still claim is discarded once
//! the longest window that could claim it has passed.
//!
//! Several call sites with different targets share a single tap counter.
//!
//! ```text
//!             tap (count += 1, window restarts)
//!            ┌────────┐
//!            ▼        │   count > max target
//!   ┌──▶ Counting ────┴──────────────────────▶ Overrun ◀──┐
//!   │       │                                   │   │     │ tap
//!   │       │ own window passed,                │   └─────┘
//!   │       │ count == target: commit           │
//!   │       ▼                                   │ longest window passed
//!   └──── reset ◀──── no call site can claim ───┘
//! ```

use log::{debug, trace, warn};

use super::arbiter::{Owner, Release};
use super::sink::{Repeats, Sink};
use super::{Button, Gesture};
use crate::ports::{Clock, LevelSource};
use crate::timer::TimeUnit;

/// Progress of the current tap sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sequence {
    /// Counting taps inside the window.
    Counting,
    /// More taps than any target; waiting for every window to pass.
    Overrun,
}

/// A registered call site: its tap target and the window it settles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Target {
    presses: u8,
    window_ms: u32,
}

impl<L: LevelSource, C: Clock> Button<L, C> {
    /// Toggle `flag` after exactly `presses` taps, each within
    /// `multipress_flag_window_ms` of the previous one.
    pub fn multiple_flag(&mut self, flag: &mut bool, presses: u8) {
        let window = self.config.multipress_flag_window_ms;
        self.multiple_step(Sink::Flag(flag), presses, window);
    }

    /// Run the multiple-press callback after exactly `presses` taps, each
    /// within `multipress_callback_window_ms` of the previous one.
    pub fn multiple_callback(&mut self, presses: u8, repeats: Repeats) {
        let callback = self.callbacks.multiple;
        let window = self.config.multipress_callback_window_ms;
        self.multiple_step(Sink::Callback { callback, repeats }, presses, window);
    }

    /// Whether a call site targeting `presses` can match the current count:
    /// a single-tap site while at most one tap is counted, or any site
    /// whose target equals the count.
    pub fn multiple_target_plausible(&self, presses: u8) -> bool {
        let presses = u32::from(presses);
        (presses == 1 && self.press_count <= 1) || self.press_count == presses
    }

    fn multiple_step(&mut self, mut sink: Sink<'_>, presses: u8, window_ms: u32) {
        debug_assert!(presses >= 1, "multi-press target must be at least 1");
        if presses == 0 || !self.momentary_ready() {
            return;
        }
        self.register_target(Target { presses, window_ms });
        let (level, now) = self.sample();

        if !self.is_pressed {
            if self.debounce(level, now) {
                self.is_pressed = true;
                self.owner = Owner::ShortPress;
                if self.sequence_pending() && self.sequence_expired(now) {
                    // Every site had its window; nobody claimed the last sequence.
                    self.reset_sequence();
                }
                self.multipress_timer.restart(now);
            }
        } else if !level && self.resolve_short_release() == Release::Granted {
            self.count_tap(now);
        }

        // A closed long-press window abandons any sequence in flight.
        if self.owner.long_window_closed() && self.sequence_pending() {
            trace!("{}: long press took over, dropping {} taps", self.pin, self.press_count);
            self.reset_sequence();
        }

        if self.is_pressed || !self.owner.short_may_commit() || !self.sequence_pending() {
            return;
        }

        let settled = self.multipress_timer.has_elapsed(now, window_ms, TimeUnit::Millis);
        if settled && self.multiple_target_plausible(presses) && self.press_count == u32::from(presses) {
            sink.commit();
            self.owner = Owner::ShortFired;
            self.reset_sequence();
            debug!("{}: {}", self.pin, Gesture::Multiple(presses));
        } else if self.sequence_expired(now) && !self.count_registered() {
            trace!("{}: no call site claimed {} taps, discarding", self.pin, self.press_count);
            self.reset_sequence();
        }
    }

    fn count_tap(&mut self, now: u64) {
        self.longpress_timer.stop();
        self.multipress_timer.restart(now);
        if self.sequence == Sequence::Overrun {
            return;
        }
        self.press_count += 1;
        if self.press_count > u32::from(self.max_observed_target) {
            trace!("{}: tap sequence overran max target {}", self.pin, self.max_observed_target);
            self.press_count = 0;
            self.sequence = Sequence::Overrun;
        } else {
            trace!("{}: tap {}", self.pin, self.press_count);
        }
    }

    fn sequence_pending(&self) -> bool {
        self.press_count > 0 || self.sequence != Sequence::Counting
    }

    /// No registered call site can still claim the current sequence.
    ///
    /// A counting sequence stays open for the longest window among sites
    /// whose target is at least the count; an overrun one for the longest
    /// window of any site.  A stopped timer means the sequence was bypassed.
    fn sequence_expired(&self, now: u64) -> bool {
        let overrun = self.sequence == Sequence::Overrun;
        let horizon_ms = self
            .targets
            .iter()
            .filter(|t| overrun || u32::from(t.presses) >= self.press_count)
            .map(|t| t.window_ms)
            .max()
            .unwrap_or(0);
        self.multipress_timer
            .elapsed_us(now)
            .is_none_or(|elapsed| elapsed >= TimeUnit::Millis.to_micros(horizon_ms))
    }

    /// Some call site targets exactly the current count; it resets the
    /// sequence itself when it commits.
    fn count_registered(&self) -> bool {
        self.sequence == Sequence::Counting
            && self.targets.iter().any(|t| u32::from(t.presses) == self.press_count)
    }

    fn reset_sequence(&mut self) {
        self.press_count = 0;
        self.sequence = Sequence::Counting;
        self.multipress_timer.stop();
    }

    fn register_target(&mut self, target: Target) {
        if target.presses > self.max_observed_target {
            self.max_observed_target = target.presses;
        }
        if self.targets.contains(&target) {
            return;
        }
        if self.targets.push(target).is_err() && !self.targets_overflowed {
            warn!(
                "{}: more than {} multi-press call sites, {}x presses may be discarded",
                self.pin,
                super::MAX_TARGETS,
                target.presses
            );
            self.targets_overflowed = true;
        }
    }
}
