use std::time::{Duration, Instant};

/// Single-slot cancellable tick deadline.
///
/// The loop arms exactly one future tick after finishing the previous one;
/// arming replaces any pending deadline and [`cancel`] disarms it, so at most
/// one pending tick exists at any time. A session reset cancels before
/// arming the first tick of the new session.
///
/// [`cancel`]: TickScheduler::cancel
#[derive(Debug, Default)]
pub struct TickScheduler {
    deadline: Option<Instant>,
}

impl TickScheduler {
    /// Creates a disarmed scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the next tick `delay` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the deadline when it has passed.
    ///
    /// Returns true at most once per armed deadline; the caller re-arms
    /// after completing the tick.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickScheduler;

    #[test]
    fn fires_once_after_the_delay_elapses() {
        let mut scheduler = TickScheduler::new();
        let start = Instant::now();

        scheduler.arm(start, Duration::from_millis(50));

        assert!(!scheduler.fire(start));
        assert!(!scheduler.fire(start + Duration::from_millis(49)));
        assert!(scheduler.fire(start + Duration::from_millis(50)));
        // One-shot: the deadline is consumed.
        assert!(!scheduler.fire(start + Duration::from_millis(100)));
        assert!(!scheduler.is_armed());
    }

    #[test]
    fn rearming_replaces_the_pending_deadline() {
        let mut scheduler = TickScheduler::new();
        let start = Instant::now();

        scheduler.arm(start, Duration::from_millis(10));
        scheduler.arm(start, Duration::from_millis(100));

        // The earlier deadline no longer exists.
        assert!(!scheduler.fire(start + Duration::from_millis(50)));
        assert!(scheduler.fire(start + Duration::from_millis(100)));
    }

    #[test]
    fn cancel_disarms_the_pending_deadline() {
        let mut scheduler = TickScheduler::new();
        let start = Instant::now();

        scheduler.arm(start, Duration::from_millis(10));
        scheduler.cancel();

        assert!(!scheduler.is_armed());
        assert!(!scheduler.fire(start + Duration::from_secs(1)));
    }
}
