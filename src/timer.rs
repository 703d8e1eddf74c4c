//! Non-blocking "has this much time passed?" timer.
//!
//! An [`AwaitTimer`] stores nothing but the instant it was armed.  Each
//! poll compares the caller-supplied `now` against that deadline, so
//! waiting is expressed as repeated state inspection rather than a blocking
//! delay.  The duration is passed on every poll, which lets one timer
//! serve classifiers with different windows.
//!
//! ```text
//!   stopped ──try_elapsed()──▶ armed ──(now - armed_at >= span)──▶ elapsed
//!      ▲                          │                                   │
//!      └──────── stop() ──────────┴───────────── stop() ──────────────┘
//! ```

/// Resolution of a duration passed to [`AwaitTimer::try_elapsed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Micros,
    Millis,
    Secs,
}

impl TimeUnit {
    /// Convert `amount` of this unit to microseconds.
    pub const fn to_micros(self, amount: u32) -> u64 {
        let amount = amount as u64;
        match self {
            Self::Micros => amount,
            Self::Millis => amount * 1_000,
            Self::Secs => amount * 1_000_000,
        }
    }
}

/// Deadline-based timer.  All time values are monotonic microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AwaitTimer {
    armed_at: Option<u64>,
    end_flag: bool,
}

impl AwaitTimer {
    pub const fn new() -> Self {
        Self {
            armed_at: None,
            end_flag: false,
        }
    }

    /// Poll the timer.
    ///
    /// The first call on a stopped timer arms it at `now_us`.  Returns `true`
    /// once `amount` of `unit` has passed since arming.
    ///
    /// With `auto_restart == false` the elapsed report is latched: every
    /// later poll returns `true` until [`stop`](Self::stop) or
    /// [`restart`](Self::restart).  With `auto_restart == true` the timer
    /// re-arms at `now_us` on each elapsed report.
    pub fn try_elapsed(&mut self, now_us: u64, amount: u32, unit: TimeUnit, auto_restart: bool) -> bool {
        let armed_at = *self.armed_at.get_or_insert(now_us);

        if self.end_flag && !auto_restart {
            return true;
        }

        if now_us.saturating_sub(armed_at) >= unit.to_micros(amount) {
            if auto_restart {
                self.armed_at = Some(now_us);
            }
            self.end_flag = true;
            true
        } else {
            self.end_flag = false;
            false
        }
    }

    /// Disarm the timer.  The next [`try_elapsed`](Self::try_elapsed)
    /// starts a fresh wait.
    pub fn stop(&mut self) {
        self.armed_at = None;
        self.end_flag = false;
    }

    /// Re-arm the timer from `now_us`, discarding any elapsed state.
    pub fn restart(&mut self, now_us: u64) {
        self.armed_at = Some(now_us);
        self.end_flag = false;
    }

    pub fn is_running(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Time since arming, or `None` while stopped.  Does not arm or latch.
    pub fn elapsed_us(&self, now_us: u64) -> Option<u64> {
        self.armed_at.map(|armed_at| now_us.saturating_sub(armed_at))
    }

    /// Whether `amount` of `unit` has passed since arming, without arming
    /// or latching.  A stopped timer has not elapsed.
    pub fn has_elapsed(&self, now_us: u64, amount: u32, unit: TimeUnit) -> bool {
        self.elapsed_us(now_us).is_some_and(|elapsed| elapsed >= unit.to_micros(amount))
    }

    /// Result of the most recent elapsed check.
    pub fn end_flag(&self) -> bool {
        self.end_flag
    }
}
