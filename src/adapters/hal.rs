//! embedded-hal input pin adapter.
//!
//! Wraps any `embedded_hal::digital::InputPin` (an ESP-IDF `PinDriver`, an
//! RP2040 pin, a test double) as a [`LevelSource`].  The raw electrical
//! level is normalised with the button's pull mode, so an active-low
//! pull-up switch reads "pressed" while the line is low.
//!
//! A failed read is treated as released.  It is logged once when the
//! failures start and once when reads recover, not on every poll.

use embedded_hal::digital::{Error as _, InputPin};
use log::{info, warn};

use crate::error::Error;
use crate::pins::{PinId, PullMode, normalize_level};
use crate::ports::LevelSource;

pub struct HalLevel<P> {
    pin: P,
    failing: bool,
}

impl<P: InputPin> HalLevel<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, failing: false }
    }

    /// Read the logical level, surfacing a failed GPIO read.
    pub fn try_read(&mut self, pull: PullMode) -> Result<bool, Error> {
        self.pin
            .is_high()
            .map(|high| normalize_level(high, pull))
            .map_err(|_| Error::Gpio)
    }

    /// The last read through [`LevelSource`] failed.
    pub fn is_failing(&self) -> bool {
        self.failing
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> LevelSource for HalLevel<P> {
    fn read_level(&mut self, pin: PinId, pull: PullMode) -> bool {
        match self.pin.is_high() {
            Ok(high) => {
                if self.failing {
                    info!("{}: input readable again", pin);
                    self.failing = false;
                }
                normalize_level(high, pull)
            }
            Err(e) => {
                if !self.failing {
                    warn!("{}: input read failed ({:?}), treating as released", pin, e.kind());
                    self.failing = true;
                }
                false
            }
        }
    }
}
