//! Tick driver shared by the integration tests.
//!
//! A [`Rig`] owns the simulated line and clock; buttons borrow both.  Every
//! helper polls once per simulated millisecond, the cadence the firmware
//! loop runs at.

use buttonctl::adapters::sim::{SimClock, SimLine};
use buttonctl::{Button, Fixation, PinId, PullMode};

pub type SimButton<'a> = Button<&'a SimLine, &'a SimClock>;

pub struct Rig {
    pub line: SimLine,
    pub clock: SimClock,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self {
            line: SimLine::new(),
            clock: SimClock::new(),
        }
    }

    pub fn button(&self) -> SimButton<'_> {
        self.button_with(Fixation::Momentary)
    }

    pub fn button_with(&self, fixation: Fixation) -> SimButton<'_> {
        let pin = PinId::new(buttonctl::pins::BUTTON_GPIO).unwrap();
        Button::new(pin, PullMode::PullUp, fixation, &self.line, &self.clock)
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Hold the line at `pressed` for `ms`, calling `poll` every millisecond.
    pub fn hold<B>(&self, b: &mut B, pressed: bool, ms: u64, mut poll: impl FnMut(&mut B)) {
        self.line.set(pressed);
        for _ in 0..ms {
            poll(b);
            self.clock.advance_ms(1);
        }
    }

    /// Press for `press_ms`, then release for `gap_ms`.
    pub fn tap<B>(&self, b: &mut B, press_ms: u64, gap_ms: u64, mut poll: impl FnMut(&mut B)) {
        self.hold(b, true, press_ms, &mut poll);
        self.hold(b, false, gap_ms, &mut poll);
    }

    /// Like [`hold`](Self::hold), returning the millisecond of the first
    /// poll for which `poll` reported `true`.
    pub fn hold_until<B>(&self, b: &mut B, pressed: bool, ms: u64, mut poll: impl FnMut(&mut B) -> bool) -> Option<u64> {
        self.line.set(pressed);
        let mut first = None;
        for _ in 0..ms {
            if poll(b) && first.is_none() {
                first = Some(self.now_ms());
            }
            self.clock.advance_ms(1);
        }
        first
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}
