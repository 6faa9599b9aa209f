//! Delayed transitions as plain data. The core never sleeps; whoever drives
//! a session waits out `delay` and hands the token back.

use core::fmt;
use core::time::Duration;

/// Identifies one scheduled transition. Tokens are never reused within a
/// session, so a token from a torn-down round can never match a newer timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// What happens when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// The success or reveal window ends and the round closes.
    Dwell,
    /// The pause after a skip ends and the next round opens.
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub token: TimerToken,
    pub delay: Duration,
    pub kind: TimerKind,
}
