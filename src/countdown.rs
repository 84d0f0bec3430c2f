//! Countdown session: the active timer's start and stop instants.

use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountdownError {
    #[error("countdown duration must be greater than zero")]
    ZeroDuration,
    #[error("countdown duration is too long")]
    TooLong,
}

/// The countdown state. Both instants are always set together.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Idle,
    Active { start: Instant, stop: Instant },
}

impl Session {
    /// Begin a countdown of `duration` at `now`, replacing any running one.
    pub fn start(&mut self, now: Instant, duration: Duration) -> Result<(), CountdownError> {
        if duration.is_zero() {
            return Err(CountdownError::ZeroDuration);
        }
        let stop = now.checked_add(duration).ok_or(CountdownError::TooLong)?;
        *self = Session::Active { start: now, stop };
        Ok(())
    }

    /// Begin a countdown of whole minutes.
    pub fn start_minutes(&mut self, now: Instant, minutes: u32) -> Result<(), CountdownError> {
        self.start(now, Duration::from_secs(u64::from(minutes) * 60))
    }

    pub fn stop(&mut self) {
        *self = Session::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Session::Idle)
    }

    /// True once `now` has reached the stop instant of an active session.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self {
            Session::Idle => false,
            Session::Active { stop, .. } => now >= *stop,
        }
    }

    /// Time left before the session ends, if it is still running.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self {
            Session::Active { stop, .. } if now < *stop => Some(*stop - now),
            _ => None,
        }
    }

    /// Fraction of the session elapsed at `now`.
    ///
    /// `None` while idle, before the start instant, and once the session has ended.
    pub fn progress(&self, now: Instant) -> Option<f64> {
        let Session::Active { start, stop } = *self else {
            return None;
        };
        if now >= stop {
            return None;
        }
        let elapsed = now.checked_duration_since(start)?;
        let total = stop.duration_since(start);
        if total.is_zero() {
            return None;
        }
        Some(elapsed.as_secs_f64() / total.as_secs_f64())
    }
}
