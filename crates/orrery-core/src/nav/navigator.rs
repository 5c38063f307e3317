//! Section navigator: the single owner of the current-section index and
//! the in-flight scroll animation.

use std::time::Instant;

use tracing::debug;

use super::animation::ScrollAnimation;
use super::feedback::FeedbackPulse;
use crate::config::ScrollConfig;

/// One navigable unit of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Position in the section list (0-based)
    pub index: usize,
    /// Vertical offset from the top of the document, in rows
    pub offset: u16,
    /// Height in rows
    pub height: u16,
}

/// Display state of a section relative to the current index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Active,
    Visited,
    Upcoming,
}

/// Tracks the current section and moves smoothly between sections.
///
/// All four input channels end up calling [`go_to`](Self::go_to),
/// [`next`](Self::next) or [`previous`](Self::previous); the navigator is
/// the only place the index or the animation is mutated.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    sections: Vec<Section>,
    current: usize,
    scroll: u16,
    animation: Option<ScrollAnimation>,
    pulse: FeedbackPulse,
    config: ScrollConfig,
}

impl SectionNavigator {
    /// Build a navigator over a non-empty section list.
    ///
    /// Returns `None` for an empty list: with nothing to navigate the
    /// navigator does not initialize at all.
    pub fn new(sections: Vec<Section>, config: ScrollConfig) -> Option<Self> {
        if sections.is_empty() {
            return None;
        }
        Some(Self {
            sections,
            current: 0,
            scroll: 0,
            animation: None,
            pulse: FeedbackPulse::new(config.feedback_pulse()),
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Index of the active section
    pub fn current(&self) -> usize {
        self.current
    }

    /// Current document scroll offset in rows
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// True while a scroll animation is in flight
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.animation {
            Some(anim) => !anim.is_complete(now),
            None => false,
        }
    }

    /// True while the post-navigation feedback pulse should be shown
    pub fn pulse_active(&self, now: Instant) -> bool {
        self.pulse.is_active(now)
    }

    /// Display state of section `index` under the current partition:
    /// exactly one `Active`, everything before it `Visited`, everything
    /// after it `Upcoming`.
    pub fn state_of(&self, index: usize) -> SectionState {
        use std::cmp::Ordering;
        match index.cmp(&self.current) {
            Ordering::Equal => SectionState::Active,
            Ordering::Less => SectionState::Visited,
            Ordering::Greater => SectionState::Upcoming,
        }
    }

    /// The full three-way partition, one state per section
    pub fn states(&self) -> Vec<SectionState> {
        (0..self.sections.len()).map(|i| self.state_of(i)).collect()
    }

    /// Navigate to a section by index.
    ///
    /// Out-of-range indices are silently dropped. In-range requests always
    /// take effect, even mid-animation: indicator clicks go through here
    /// and are not gated on the animation flag.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        let Some(section) = self.sections.get(index) else {
            debug!(index, len = self.sections.len(), "navigation out of range");
            return;
        };

        self.current = index;
        let target = section.offset.saturating_sub(self.config.header_offset);
        self.animation = Some(ScrollAnimation::new(
            self.scroll,
            target,
            self.config.animation_duration(),
            now,
        ));
        self.post_navigate(index, now);
    }

    /// Advance to the next section. Dropped while an animation is in
    /// flight; no-op at the last section.
    pub fn next(&mut self, now: Instant) {
        if self.is_animating(now) {
            return;
        }
        if self.current + 1 < self.sections.len() {
            self.go_to(self.current + 1, now);
        }
    }

    /// Go back to the previous section. Dropped while an animation is in
    /// flight; no-op at the first section.
    pub fn previous(&mut self, now: Instant) {
        if self.is_animating(now) {
            return;
        }
        if self.current > 0 {
            self.go_to(self.current - 1, now);
        }
    }

    /// Jump to the first section (Home)
    pub fn first(&mut self, now: Instant) {
        if self.is_animating(now) {
            return;
        }
        self.go_to(0, now);
    }

    /// Jump to the last section (End)
    pub fn last(&mut self, now: Instant) {
        if self.is_animating(now) {
            return;
        }
        self.go_to(self.sections.len() - 1, now);
    }

    /// Advance the animation and return the scroll offset for this frame.
    ///
    /// The animation is cleared exactly when its elapsed time reaches the
    /// configured duration.
    pub fn update(&mut self, now: Instant) -> u16 {
        if let Some(anim) = self.animation {
            if anim.is_complete(now) {
                self.scroll = anim.target();
                self.animation = None;
            } else {
                self.scroll = anim.sample(now);
            }
        }
        self.scroll
    }

    /// Largest scroll offset that still shows a full viewport
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        let doc_height = self
            .sections
            .last()
            .map(|s| s.offset.saturating_add(s.height))
            .unwrap_or(0);
        doc_height.saturating_sub(viewport_height)
    }

    /// Free scroll by a row delta (sub-threshold wheel motion).
    ///
    /// Clamped to the document bounds, dropped while animating, and runs
    /// midline tracking afterwards so the index follows the drift.
    pub fn drift(&mut self, delta_rows: i16, viewport_height: u16, now: Instant) {
        if self.is_animating(now) {
            return;
        }
        let max = self.max_scroll(viewport_height);
        let scroll = (self.scroll as i32 + delta_rows as i32).clamp(0, max as i32) as u16;
        self.sync_from_scroll(scroll, viewport_height, now);
    }

    /// Swap in re-measured sections after a viewport resize.
    ///
    /// The list length and order are fixed for the session; only offsets
    /// and heights may change. Any in-flight animation is abandoned and
    /// the scroll snaps to the current section's target.
    pub fn relayout(&mut self, sections: Vec<Section>) {
        if sections.len() != self.sections.len() {
            debug!(
                old = self.sections.len(),
                new = sections.len(),
                "relayout with mismatched section count ignored"
            );
            return;
        }
        self.sections = sections;
        self.animation = None;
        self.scroll = self.sections[self.current]
            .offset
            .saturating_sub(self.config.header_offset);
    }

    /// Passive tracking: adopt the section under the viewport midline.
    ///
    /// Mirrors the page's intersection observer with its band collapsed to
    /// the vertical center of the screen. Only runs while idle, and never
    /// starts an animation, so navigator-driven scrolling cannot feed back
    /// into itself.
    pub fn sync_from_scroll(&mut self, scroll: u16, viewport_height: u16, now: Instant) {
        if self.is_animating(now) {
            return;
        }
        self.scroll = scroll;
        let midline = scroll as u32 + viewport_height as u32 / 2;

        let hit = self.sections.iter().find(|s| {
            let top = s.offset as u32;
            let bottom = top + s.height as u32;
            (top..bottom).contains(&midline)
        });

        if let Some(section) = hit {
            if section.index != self.current {
                debug!(from = self.current, to = section.index, "midline tracking");
                self.current = section.index;
            }
        }
    }

    /// Post-navigation hooks, in order: the display-state partition is
    /// derived from `current` and needs no recomputation, the indicator
    /// panel mirrors it at render time, and the feedback pulse restarts.
    fn post_navigate(&mut self, index: usize, now: Instant) {
        debug!(index, "navigating to section");
        self.pulse.trigger(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sections(n: usize) -> Vec<Section> {
        // Sections 120 rows apart, below the default 5-row banner
        (0..n)
            .map(|i| Section {
                index: i,
                offset: 5 + (i as u16) * 120,
                height: 120,
            })
            .collect()
    }

    fn navigator(n: usize) -> SectionNavigator {
        SectionNavigator::new(sections(n), ScrollConfig::default()).unwrap()
    }

    /// Helper: run an animation to completion and clear it
    fn settle(nav: &mut SectionNavigator, now: Instant) -> Instant {
        let done = now + nav.config().animation_duration();
        nav.update(done);
        done
    }

    #[test]
    fn test_empty_sections_do_not_initialize() {
        assert!(SectionNavigator::new(Vec::new(), ScrollConfig::default()).is_none());
    }

    #[test]
    fn test_go_to_sets_partition() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        nav.go_to(2, t0);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.state_of(2), SectionState::Active);
        assert_eq!(nav.state_of(0), SectionState::Visited);
        assert_eq!(nav.state_of(1), SectionState::Visited);
        assert_eq!(nav.state_of(3), SectionState::Upcoming);
        assert_eq!(nav.state_of(4), SectionState::Upcoming);

        // Exactly one active section in the full partition
        let active = nav
            .states()
            .iter()
            .filter(|s| **s == SectionState::Active)
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_partition_holds_for_every_index() {
        let mut nav = navigator(7);
        let mut now = Instant::now();

        for target in 0..7 {
            nav.go_to(target, now);
            now = settle(&mut nav, now);
            for i in 0..7 {
                let expected = match i.cmp(&target) {
                    std::cmp::Ordering::Less => SectionState::Visited,
                    std::cmp::Ordering::Equal => SectionState::Active,
                    std::cmp::Ordering::Greater => SectionState::Upcoming,
                };
                assert_eq!(nav.state_of(i), expected, "i={} target={}", i, target);
            }
        }
    }

    #[test]
    fn test_out_of_range_go_to_is_a_no_op() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        nav.go_to(99, t0);
        assert_eq!(nav.current(), 0);
        assert!(!nav.is_animating(t0));
    }

    #[test]
    fn test_go_to_targets_offset_minus_header() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        nav.go_to(3, t0);
        let done = settle(&mut nav, t0);
        // Section 3 sits at offset 365; header offset 5
        assert_eq!(nav.scroll(), 360);
        assert!(!nav.is_animating(done));
    }

    #[test]
    fn test_active_section_stays_in_view() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        for target in 0..5 {
            nav.go_to(target, t0);
            let done = settle(&mut nav, t0);
            let top = nav.sections()[target].offset;
            let scroll = nav.scroll();

            // The landed section's top is inside a 40-row viewport
            assert!(
                top >= scroll && top < scroll + 40,
                "target {}: top {} outside viewport at scroll {}",
                target,
                top,
                scroll
            );

            // Midline tracking agrees with the landing position
            nav.sync_from_scroll(scroll, 40, done);
            assert_eq!(nav.current(), target);
        }
    }

    #[test]
    fn test_requests_dropped_while_animating() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        nav.next(t0);
        assert_eq!(nav.current(), 1);

        // Mid-flight: next/previous are dropped
        let mid = t0 + Duration::from_millis(500);
        nav.update(mid);
        nav.next(mid);
        nav.previous(mid);
        assert_eq!(nav.current(), 1);

        // After completion requests succeed again
        let done = settle(&mut nav, t0);
        nav.next(done);
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn test_click_bypasses_animation_gate() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        nav.next(t0);
        let mid = t0 + Duration::from_millis(500);
        assert!(nav.is_animating(mid));

        // Indicator clicks call go_to directly and are honored mid-flight
        nav.go_to(4, mid);
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn test_no_wraparound_at_boundaries() {
        let mut nav = navigator(3);
        let mut now = Instant::now();

        nav.previous(now);
        assert_eq!(nav.current(), 0);

        for _ in 0..5 {
            nav.next(now);
            now = settle(&mut nav, now);
        }
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn test_four_downs_visit_everything() {
        let mut nav = navigator(5);
        let mut now = Instant::now();

        for _ in 0..4 {
            nav.next(now);
            now = settle(&mut nav, now);
        }

        assert_eq!(nav.current(), 4);
        assert_eq!(nav.state_of(4), SectionState::Active);
        for i in 0..4 {
            assert_eq!(nav.state_of(i), SectionState::Visited);
        }
    }

    #[test]
    fn test_first_and_last() {
        let mut nav = navigator(5);
        let mut now = Instant::now();

        nav.last(now);
        now = settle(&mut nav, now);
        assert_eq!(nav.current(), 4);

        nav.first(now);
        settle(&mut nav, now);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_midline_tracking_updates_index() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        // Viewport of 40 rows scrolled so its midline (scroll + 20) falls
        // inside section 2 ([245, 365))
        nav.sync_from_scroll(300, 40, t0);
        assert_eq!(nav.current(), 2);
        // No animation was started
        assert!(!nav.is_animating(t0));
    }

    #[test]
    fn test_midline_tracking_idle_only() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        nav.go_to(1, t0);
        let mid = t0 + Duration::from_millis(500);
        nav.sync_from_scroll(400, 40, mid);
        // Ignored while animating
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_drift_clamps_and_tracks() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        nav.drift(-10, 40, t0);
        assert_eq!(nav.scroll(), 0);

        // Drift deep into the document; midline tracking follows
        nav.drift(400, 40, t0);
        assert_eq!(nav.scroll(), 400);
        assert_eq!(nav.current(), 3);

        // Clamped at the bottom: document is 605 rows, viewport 40
        nav.drift(10_000, 40, t0);
        assert_eq!(nav.scroll(), nav.max_scroll(40));
    }

    #[test]
    fn test_relayout_preserves_index() {
        let mut nav = navigator(3);
        let t0 = Instant::now();

        nav.go_to(2, t0);
        settle(&mut nav, t0);

        // Narrower viewport: everything got taller
        let wider: Vec<Section> = (0..3)
            .map(|i| Section {
                index: i,
                offset: 5 + (i as u16) * 200,
                height: 200,
            })
            .collect();
        nav.relayout(wider);

        assert_eq!(nav.current(), 2);
        assert_eq!(nav.scroll(), 400); // 405 - header offset
        assert!(!nav.is_animating(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_pulse_follows_navigation() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        assert!(!nav.pulse_active(t0));
        nav.go_to(1, t0);
        assert!(nav.pulse_active(t0 + Duration::from_millis(100)));
        assert!(!nav.pulse_active(t0 + Duration::from_millis(400)));
    }
}
