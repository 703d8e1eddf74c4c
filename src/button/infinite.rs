//! Continuous hold: active for exactly as long as the line stays pressed.
//!
//! Works on latching switches too, and ignores the short/long arbiter.

use log::debug;

use super::sink::Repeats;
use super::{Button, Gesture};
use crate::ports::{Clock, LevelSource};

impl<L: LevelSource, C: Clock> Button<L, C> {
    /// Hold `flag` toggled while the button is pressed.
    ///
    /// On release `flag` goes back to the value it had when the press
    /// began, whatever was written to it in between.
    pub fn infinite_flag(&mut self, flag: &mut bool) {
        if !self.pin.is_connected() {
            return;
        }
        let (level, now) = self.sample();

        if level {
            if !self.infinite_held {
                self.release_snapshot = *flag;
                if self.debounce(true, now) {
                    self.infinite_held = true;
                    *flag = !*flag;
                    debug!("{}: {}", self.pin, Gesture::Infinite);
                }
            }
        } else {
            if self.infinite_held {
                self.infinite_held = false;
                *flag = self.release_snapshot;
            }
            self.debounce(false, now);
        }
    }

    /// Run the infinite-press callback while the button is held.
    ///
    /// `Repeats::Times(n)` runs it `n` times when the press is confirmed;
    /// `Repeats::Continuous` runs it on every poll until release.
    pub fn infinite_callback(&mut self, repeats: Repeats) {
        if !self.pin.is_connected() {
            return;
        }
        let (level, now) = self.sample();

        if level {
            if !self.infinite_held && self.debounce(true, now) {
                self.infinite_held = true;
                self.infinite_ready = true;
                debug!("{}: {}", self.pin, Gesture::Infinite);
            }
            if self.infinite_ready {
                repeats.dispatch(self.callbacks.infinite);
                if !repeats.is_continuous() {
                    self.infinite_ready = false;
                }
            }
        } else {
            self.infinite_held = false;
            self.infinite_ready = false;
            self.debounce(false, now);
        }
    }

    /// Debounced press seen by the infinite classifier, not yet released.
    pub fn is_infinite_held(&self) -> bool {
        self.infinite_held
    }
}
