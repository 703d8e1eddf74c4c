//! Port traits: the boundary between gesture logic and the hardware.
//!
//! ```text
//!   HalLevel / SimLine ──▶ LevelSource ──┐
//!                                        ├──▶ Button (classifiers)
//!   MonotonicClock / SimClock ──▶ Clock ─┘
//! ```
//!
//! [`Button`](crate::button::Button) is generic over both, so the
//! classification core never touches registers or system timers directly.

use crate::pins::{PinId, PullMode};

// ───────────────────────────────────────────────────────────────
// Level source (driven adapter: GPIO → domain)
// ───────────────────────────────────────────────────────────────

/// Current logical state of one input line.
pub trait LevelSource {
    /// `true` when the button is pressed, already normalised for `pull`
    /// (an active-low pull-up line reads `true` while held down).
    ///
    /// Must not block.  A failed read reports "released".
    fn read_level(&mut self, pin: PinId, pull: PullMode) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Clock (driven adapter: system timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source.
pub trait Clock {
    /// Microseconds since an arbitrary fixed origin.  Never decreases.
    fn now_us(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
