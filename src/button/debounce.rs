//! Contact-bounce filter shared by every classifier.

use super::Button;
use crate::ports::{Clock, LevelSource};
use crate::timer::TimeUnit;

impl<L: LevelSource, C: Clock> Button<L, C> {
    /// Confirm a press once the line has read pressed continuously for
    /// `debounce_ms`.
    ///
    /// Any released sample stops the debounce timer, so a level toggling
    /// faster than the quiet period never confirms.
    pub(super) fn debounce(&mut self, pressed: bool, now_us: u64) -> bool {
        if !pressed {
            self.debounce_timer.stop();
            return false;
        }
        self.debounce_timer
            .try_elapsed(now_us, self.config.debounce_ms, TimeUnit::Millis, false)
    }
}
