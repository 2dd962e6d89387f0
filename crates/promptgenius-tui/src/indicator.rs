use std::time::{Duration, Instant};

/// A flag that stays raised for a fixed duration and then drops by itself.
#[derive(Debug, Clone)]
pub struct TimedIndicator {
    duration: Duration,
    until: Option<Instant>,
}

impl TimedIndicator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    /// Raise the flag at `now`. Raising an already raised flag restarts it.
    pub fn raise(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    pub fn clear(&mut self) {
        self.until = None;
    }

    pub fn is_raised(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Drop the flag if its time is up. Returns true if it dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.until.is_some() && !self.is_raised(now) {
            self.until = None;
            return true;
        }
        false
    }

    /// Whether the flag is pending expiry and the event loop should poll.
    pub fn is_armed(&self) -> bool {
        self.until.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
