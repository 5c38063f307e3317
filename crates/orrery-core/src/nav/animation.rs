//! Scroll animation: a single eased glide from one document offset to
//! another, sampled once per frame tick.

use std::time::{Duration, Instant};

use super::easing::ease_in_out_cubic;
use super::timing::{is_complete, lerp_u16, progress};

/// One in-flight scroll animation.
///
/// Once started an animation always runs to completion; there is no
/// retargeting or cancellation. The navigator enforces at most one in
/// flight at a time.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: u16, to: u16, duration: Duration, start: Instant) -> Self {
        Self {
            start,
            from,
            to,
            duration,
        }
    }

    /// Target offset the animation ends at
    pub fn target(&self) -> u16 {
        self.to
    }

    /// Interpolated offset at `now`
    pub fn sample(&self, now: Instant) -> u16 {
        let t = progress(self.start, now, self.duration);
        lerp_u16(self.from, self.to, ease_in_out_cubic(t))
    }

    /// True once elapsed time reaches or exceeds the duration
    pub fn is_complete(&self, now: Instant) -> bool {
        is_complete(self.start, now, self.duration)
    }
}
