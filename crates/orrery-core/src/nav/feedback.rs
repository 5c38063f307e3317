//! Transient visual feedback shown for a moment after each navigation.

use std::time::{Duration, Instant};

/// A short-lived pulse the UI renders as an overlay while active.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackPulse {
    duration: Duration,
    since: Option<Instant>,
}

impl FeedbackPulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            since: None,
        }
    }

    /// Restart the pulse
    pub fn trigger(&mut self, now: Instant) {
        self.since = Some(now);
    }

    /// True while the pulse is still within its display window
    pub fn is_active(&self, now: Instant) -> bool {
        match self.since {
            Some(since) => now.saturating_duration_since(since) < self.duration,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_window() {
        let mut pulse = FeedbackPulse::new(Duration::from_millis(300));
        let t0 = Instant::now();

        assert!(!pulse.is_active(t0));

        pulse.trigger(t0);
        assert!(pulse.is_active(t0));
        assert!(pulse.is_active(t0 + Duration::from_millis(299)));
        assert!(!pulse.is_active(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn test_retrigger_extends() {
        let mut pulse = FeedbackPulse::new(Duration::from_millis(300));
        let t0 = Instant::now();

        pulse.trigger(t0);
        pulse.trigger(t0 + Duration::from_millis(200));
        assert!(pulse.is_active(t0 + Duration::from_millis(400)));
    }
}
