//! Section navigation engine
//!
//! Tracks a current section among an ordered list of page sections and
//! glides between them with an eased scroll animation. Four input channels
//! (keyboard, wheel, swipe, indicator click) all funnel into the navigator;
//! none of them touch the index or the animation directly.
//!
//! All time-dependent pieces take `Instant` values as parameters instead of
//! reading the clock themselves, so the whole module is testable without a
//! terminal or a real frame scheduler.

pub mod animation;
pub mod easing;
pub mod feedback;
pub mod navigator;
pub mod swipe;
pub mod timing;
pub mod wheel;

pub use animation::ScrollAnimation;
pub use feedback::FeedbackPulse;
pub use navigator::{Section, SectionNavigator, SectionState};
pub use swipe::{SwipeDirection, SwipeTracker};
pub use wheel::{WheelDebouncer, WheelGesture};
