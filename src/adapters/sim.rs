//! In-memory line and clock for host testing and simulation.
//!
//! Both use interior mutability so a test can hold them alongside a
//! [`Button`](crate::button::Button) that borrows them:
//!
//! ```
//! use buttonctl::adapters::sim::{SimClock, SimLine};
//! use buttonctl::button::Button;
//! use buttonctl::pins::{Fixation, PinId, PullMode};
//!
//! let line = SimLine::new();
//! let clock = SimClock::new();
//! let pin = PinId::new(4).unwrap();
//! let mut button = Button::new(pin, PullMode::PullUp, Fixation::Momentary, &line, &clock);
//!
//! let mut flag = false;
//! line.press();
//! for _ in 0..5 {
//!     button.onetime_flag(&mut flag);
//!     clock.advance_ms(1);
//! }
//! line.release();
//! button.onetime_flag(&mut flag);
//! assert!(flag);
//! ```

use core::cell::Cell;

use crate::pins::{PinId, PullMode};
use crate::ports::{Clock, LevelSource};

/// Logical pressed state, already normalised (no pull handling).
#[derive(Debug, Default)]
pub struct SimLine {
    pressed: Cell<bool>,
}

impl SimLine {
    pub const fn new() -> Self {
        Self {
            pressed: Cell::new(false),
        }
    }

    pub fn press(&self) {
        self.pressed.set(true);
    }

    pub fn release(&self) {
        self.pressed.set(false);
    }

    pub fn set(&self, pressed: bool) {
        self.pressed.set(pressed);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }
}

impl LevelSource for &SimLine {
    fn read_level(&mut self, _pin: PinId, _pull: PullMode) -> bool {
        self.pressed.get()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct SimClock {
    now_us: Cell<u64>,
}

impl SimClock {
    pub const fn new() -> Self {
        Self {
            now_us: Cell::new(0),
        }
    }

    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1_000);
    }

    pub fn now_ms(&self) -> u64 {
        self.now_us.get() / 1_000
    }
}

impl Clock for SimClock {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}
