//! Swipe gesture detection.
//!
//! Interprets a press/release pair of vertical coordinates as a swipe:
//! dragging upward (content follows the finger) asks for the next section,
//! dragging downward for the previous one. Short drags are ignored.

/// Direction of a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved up: advance to the next section
    Up,
    /// Finger moved down: go back to the previous section
    Down,
}

/// Tracks one in-progress vertical gesture.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    min_distance: u16,
    start_y: Option<u16>,
}

impl SwipeTracker {
    pub fn new(min_distance: u16) -> Self {
        Self {
            min_distance,
            start_y: None,
        }
    }

    /// Gesture begins: record the starting row
    pub fn press(&mut self, y: u16) {
        self.start_y = Some(y);
    }

    /// Gesture ends: classify it, if it traveled far enough.
    pub fn release(&mut self, y: u16) -> Option<SwipeDirection> {
        let start = self.start_y.take()?;
        let distance = start as i32 - y as i32;

        if distance.unsigned_abs() as u16 <= self.min_distance {
            return None;
        }
        if distance > 0 {
            Some(SwipeDirection::Up)
        } else {
            Some(SwipeDirection::Down)
        }
    }
}
