//! Arbitration between the short-press and long-press gesture families.

use super::Button;
use crate::ports::{Clock, LevelSource};

/// Which gesture family may commit the current press.
///
/// ```text
///                 short family fires
///   ShortPress ─────────────────────────▶ ShortFired
///    │   ▲  ▲                                 │
///    │   │  └──────── next press onset ───────┤
///    │   │ released within tap_max_ms         │
///    │   └────────────────┐                   │
///    │ long classifier    │                   │
///    ▼ holds              │                   │
///   LongMeasuring ────────┘                   │
///    │ threshold ───────▶ LongFired ──────────┤
///    │ released later ──▶ LongAborted ────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// Onetime/multiple may commit on release.
    ShortPress,
    /// A short-family gesture fired; locked out until the next press onset.
    ShortFired,
    /// A hold is being timed; the short family must wait.
    LongMeasuring,
    /// The long press fired during this hold; its release is consumed.
    LongFired,
    /// A hold outlasted a tap but was released before the long press
    /// fired.  Nothing commits; the next press onset hands permission back.
    LongAborted,
}

impl Owner {
    /// The short family currently holds permission to commit.
    pub fn short_may_commit(self) -> bool {
        self == Self::ShortPress
    }

    /// The current press cycle is spent: a gesture fired or a hold was
    /// abandoned.
    pub fn locked_out(self) -> bool {
        matches!(self, Self::ShortFired | Self::LongFired | Self::LongAborted)
    }

    /// The long-press window concluded, by firing or by an aborted hold.
    pub fn long_window_closed(self) -> bool {
        matches!(self, Self::LongFired | Self::LongAborted)
    }
}

/// Outcome of a debounced release for the short family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Release {
    /// The short family owns the press: commit or count it.
    Granted,
    /// Another gesture already claimed the press.
    Consumed,
    /// A hold is still being measured; try again next poll.
    Deferred,
}

impl<L: LevelSource, C: Clock> Button<L, C> {
    /// Settle a short-family press whose line has gone low.
    pub(super) fn resolve_short_release(&mut self) -> Release {
        match self.owner {
            Owner::LongMeasuring => Release::Deferred,
            owner => {
                self.is_pressed = false;
                self.debounce_timer.stop();
                if owner.short_may_commit() {
                    Release::Granted
                } else {
                    Release::Consumed
                }
            }
        }
    }
}
