//! Single tap: commit on release of a debounced press.
//!
//! `Idle → DebouncePending → Confirmed (held) → Fired → Idle`

use log::debug;

use super::arbiter::{Owner, Release};
use super::sink::{Repeats, Sink};
use super::{Button, Gesture};
use crate::ports::{Clock, LevelSource};

impl<L: LevelSource, C: Clock> Button<L, C> {
    /// Toggle `flag` once per press-release cycle.
    ///
    /// Do not combine with [`multiple_flag`](Self::multiple_flag) on the
    /// same button; use `multiple_flag(flag, 1)` there instead.
    pub fn onetime_flag(&mut self, flag: &mut bool) {
        self.onetime_step(Sink::Flag(flag));
    }

    /// Run the onetime callback once per press-release cycle.
    ///
    /// `Repeats::Times(n)` runs it `n` times on release;
    /// `Repeats::Continuous` runs it exactly once.
    pub fn onetime_callback(&mut self, repeats: Repeats) {
        let callback = self.callbacks.onetime;
        self.onetime_step(Sink::Callback { callback, repeats });
    }

    fn onetime_step(&mut self, mut sink: Sink<'_>) {
        if !self.momentary_ready() {
            return;
        }
        let (level, now) = self.sample();

        if !self.is_pressed {
            if self.debounce(level, now) {
                self.is_pressed = true;
                // A new press cycle reclaims permission from a previous hold.
                self.owner = Owner::ShortPress;
            }
        } else if !level && self.resolve_short_release() == Release::Granted {
            sink.commit();
            self.longpress_timer.stop();
            self.owner = Owner::ShortFired;
            debug!("{}: {}", self.pin, Gesture::Onetime);
        }
    }
}
