//! Long hold: commit once per press after the line stays down for
//! `long_press_ms`.
//!
//! `Idle → DebouncePending → Holding → Fired → (release) → Idle`
//!
//! While holding, the arbiter is moved to [`Owner::LongMeasuring`] so a
//! short-family classifier polling the same button waits.  A release
//! within `tap_max_ms` hands the press back to the short family as a tap.
//! A later release before the threshold is an aborted long press: the
//! press is consumed and permission returns on the next press onset.

use log::debug;

use super::arbiter::Owner;
use super::sink::{Repeats, Sink};
use super::{Button, Gesture};
use crate::ports::{Clock, LevelSource};
use crate::timer::TimeUnit;

impl<L: LevelSource, C: Clock> Button<L, C> {
    /// Toggle `flag` once per hold that reaches `long_press_ms`.
    pub fn longtime_flag(&mut self, flag: &mut bool) {
        self.longtime_step(Sink::Flag(flag));
    }

    /// Run the long-press callback once a hold reaches `long_press_ms`.
    ///
    /// With `Repeats::Continuous` the callback runs on every poll from the
    /// moment the hold fires until the next press begins.
    pub fn longtime_callback(&mut self, repeats: Repeats) {
        let callback = self.callbacks.longtime;
        self.longtime_step(Sink::Callback { callback, repeats });
    }

    fn longtime_step(&mut self, mut sink: Sink<'_>) {
        if !self.momentary_ready() {
            return;
        }
        let (level, now) = self.sample();

        if level && !self.is_long_held && self.debounce(level, now) {
            self.is_long_held = true;
            self.longtime_ready = false;
            self.longpress_timer.stop();
            if self.owner.locked_out() {
                self.owner = Owner::ShortPress;
            }
        }

        if level && self.is_long_held {
            if self.owner != Owner::LongFired {
                self.owner = Owner::LongMeasuring;
                if self
                    .longpress_timer
                    .try_elapsed(now, self.config.long_press_ms, TimeUnit::Millis, false)
                {
                    self.longpress_timer.stop();
                    self.owner = Owner::LongFired;
                    self.longtime_ready = true;
                    debug!("{}: {}", self.pin, Gesture::Longtime);
                }
            }
        } else if !level {
            if self.is_long_held {
                self.is_long_held = false;
                if self.owner == Owner::LongMeasuring {
                    self.owner = self.resolve_early_release(now);
                }
                self.longpress_timer.stop();
            }
            self.debounce(false, now);
        }

        if self.longtime_ready {
            sink.commit();
            if !sink.is_looping() {
                self.longtime_ready = false;
            }
        }
    }

    /// Owner after a hold released before the threshold.
    fn resolve_early_release(&self, now: u64) -> Owner {
        let held_us = self.longpress_timer.elapsed_us(now).unwrap_or(0);
        if held_us > TimeUnit::Millis.to_micros(self.config.tap_max_ms) {
            debug!("{}: long press aborted after {} ms", self.pin, held_us / 1_000);
            Owner::LongAborted
        } else {
            Owner::ShortPress
        }
    }
}
