use std::time::{Duration, Instant};

/// Tracks when an action was last attempted and determines if enough time
/// has passed to perform it again.
///
/// The interval is not stored here since it is shared between every
/// listener on a gate; callers pass it in.
#[derive(Debug, Default)]
pub struct Debouncer {
    last_action: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer that is ready to act
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if strictly more than `interval` has passed since the last action
    pub fn should_act_at(&self, now: Instant, interval: Duration) -> bool {
        match self.last_action {
            None => true,
            Some(last) => now.saturating_duration_since(last) > interval,
        }
    }

    /// Marks an action as attempted, updating the timestamp
    pub fn bounce_at(&mut self, now: Instant) {
        self.last_action = Some(now);
    }

    pub fn elapsed_since_last(&self, now: Instant) -> Option<Duration> {
        self.last_action.map(|last| now.saturating_duration_since(last))
    }
}
