//! Wheel input debouncing.
//!
//! Rapid wheel events within one physical gesture are coalesced: each event
//! records the latest delta and re-arms a short deadline, and only the delta
//! left standing when the deadline passes is evaluated. One flick of the
//! wheel therefore moves at most one section; gentler motion below the
//! threshold falls through as a plain scroll drift.

use std::time::{Duration, Instant};

/// Outcome of a settled wheel gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelGesture {
    /// Delta exceeded the intent threshold: move one section by sign
    Navigate(i32),
    /// Sub-threshold delta: scroll the document freely instead
    Drift(i32),
}

/// Coalesces wheel deltas over a quiet-period window.
#[derive(Debug, Clone, Copy)]
pub struct WheelDebouncer {
    delay: Duration,
    threshold: i32,
    pending: Option<Pending>,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    delta: i32,
    deadline: Instant,
}

impl WheelDebouncer {
    pub fn new(delay: Duration, threshold: i32) -> Self {
        Self {
            delay,
            threshold,
            pending: None,
        }
    }

    /// Record a wheel event. The latest delta wins and the deadline restarts.
    pub fn on_wheel(&mut self, delta: i32, now: Instant) {
        self.pending = Some(Pending {
            delta,
            deadline: now + self.delay,
        });
    }

    /// True while a delta is waiting for its deadline
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Evaluate the settled delta once the quiet period has passed.
    ///
    /// Returns at most one gesture per quiet period: `Navigate` when the
    /// settled delta strictly exceeds the threshold, `Drift` otherwise.
    pub fn poll(&mut self, now: Instant) -> Option<WheelGesture> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        if pending.delta.abs() > self.threshold {
            Some(WheelGesture::Navigate(pending.delta))
        } else {
            Some(WheelGesture::Drift(pending.delta))
        }
    }
}
