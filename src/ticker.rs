//! Fixed-interval redraw scheduling.
//!
//! The event loop asks how long it may wait for input before the next tick
//! is due, and fires the render callback whenever `poll` says so.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// A ticker whose first tick is due immediately.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next: now,
        }
    }

    /// How long until the next tick, zero if it is already due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Consume a due tick. Missed ticks collapse into one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }

    /// Call `render` with `now` if a tick is due; returns whether it ran.
    pub fn run_if_due(&mut self, now: Instant, render: impl FnOnce(Instant)) -> bool {
        if self.poll(now) {
            render(now);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_tick_is_immediate_then_every_interval() {
        let t = Instant::now();
        let mut ticker = Ticker::new(ms(50), t);

        assert_eq!(ticker.until_next(t), Duration::ZERO);
        assert!(ticker.poll(t));
        assert!(!ticker.poll(t + ms(10)));
        assert_eq!(ticker.until_next(t + ms(10)), ms(40));
        assert!(ticker.poll(t + ms(50)));
        assert!(!ticker.poll(t + ms(60)));
    }

    #[test]
    fn late_polls_do_not_burst() {
        let t = Instant::now();
        let mut ticker = Ticker::new(ms(50), t);
        ticker.poll(t);

        assert!(ticker.poll(t + ms(500)));
        assert!(!ticker.poll(t + ms(520)));
        assert!(ticker.poll(t + ms(550)));
    }

    #[test]
    fn render_callback_receives_now() {
        let t = Instant::now();
        let mut ticker = Ticker::new(ms(50), t);
        let mut seen = Vec::new();

        ticker.run_if_due(t, |now| seen.push(now));
        ticker.run_if_due(t + ms(1), |now| seen.push(now));
        assert_eq!(seen, vec![t]);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let t = Instant::now();
        let mut ticker = Ticker::new(Duration::ZERO, t);
        assert!(ticker.poll(t));
        assert_eq!(ticker.until_next(t), ms(1));
    }
}
