//! Where a committed gesture goes: a caller's flag or a bound callback.

/// Zero-argument gesture callback.
pub type Callback = fn();

/// Raw repeat count meaning "run continuously".
pub const LOOP_PERFORMANCE: u32 = u32::MAX;

/// How many times a callback runs per dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeats {
    /// Run the callback this many times in one dispatch.
    Times(u32),
    /// Run once per dispatch, and keep dispatching where the gesture
    /// supports it (held infinite press, fired long press).
    Continuous,
}

impl Repeats {
    /// Decode a raw count, mapping [`LOOP_PERFORMANCE`] to `Continuous`.
    pub const fn from_raw(raw: u32) -> Self {
        if raw == LOOP_PERFORMANCE {
            Self::Continuous
        } else {
            Self::Times(raw)
        }
    }

    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Continuous)
    }

    pub(super) fn dispatch(self, callback: Option<Callback>) {
        let Some(callback) = callback else {
            return;
        };
        match self {
            Self::Times(n) => (0..n).for_each(|_| callback()),
            Self::Continuous => callback(),
        }
    }
}

impl From<u32> for Repeats {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

pub(super) enum Sink<'a> {
    Flag(&'a mut bool),
    Callback {
        callback: Option<Callback>,
        repeats: Repeats,
    },
}

impl Sink<'_> {
    pub(super) fn commit(&mut self) {
        match self {
            Self::Flag(flag) => **flag = !**flag,
            Self::Callback { callback, repeats } => repeats.dispatch(*callback),
        }
    }

    /// Keeps dispatching after the first commit.
    pub(super) fn is_looping(&self) -> bool {
        matches!(self, Self::Callback { repeats: Repeats::Continuous, .. })
    }
}
