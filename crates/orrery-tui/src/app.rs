use std::time::Instant;

use ratatui::layout::Rect;
use tracing::info;

use orrery_core::nav::{SectionNavigator, SwipeDirection, SwipeTracker, WheelDebouncer, WheelGesture};
use orrery_core::post::Post;
use orrery_core::AppConfig;

use crate::input::Action;
use crate::layout::{self, SectionContent};

/// Rows of document scrolled per ten units of settled drift delta
const WHEEL_DRIFT_DIVISOR: i32 = 10;

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Posts loaded from the universe directory
    pub posts: Vec<Post>,
    /// Navigator over the measured sections; `None` until the first layout
    /// pass, and stays `None` for an empty universe
    pub navigator: Option<SectionNavigator>,
    /// Pre-wrapped render content, index-aligned with the sections
    pub contents: Vec<SectionContent>,
    /// Wheel input coalescing
    wheel: WheelDebouncer,
    /// Drag gesture tracking
    swipe: SwipeTracker,
    /// Screen rects of the indicator dots from the last render
    pub indicator_dots: Vec<(Rect, usize)>,
    /// Content area width the current layout was measured for
    content_width: u16,
    /// Content area height (for midline tracking and scroll clamping)
    pub viewport_height: u16,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, posts: Vec<Post>) -> Self {
        let scroll = config.ui.scroll;
        Self {
            config,
            posts,
            navigator: None,
            contents: Vec::new(),
            wheel: WheelDebouncer::new(scroll.wheel_debounce(), scroll.wheel_threshold),
            swipe: SwipeTracker::new(scroll.min_swipe_distance),
            indicator_dots: Vec::new(),
            content_width: 0,
            viewport_height: 0,
            should_quit: false,
        }
    }

    /// Measure posts against the content width and (re)build the navigator.
    ///
    /// Called on the first draw and after every resize. An empty universe
    /// never produces a navigator: no sections means nothing to attach.
    pub fn relayout(&mut self, content_width: u16) {
        if content_width == self.content_width {
            return;
        }
        self.content_width = content_width;

        let header_offset = self.config.ui.scroll.header_offset;
        let (sections, contents) = layout::measure(&self.posts, content_width, header_offset);
        self.contents = contents;

        match self.navigator.as_mut() {
            Some(nav) => nav.relayout(sections),
            None => {
                self.navigator = SectionNavigator::new(sections, self.config.ui.scroll);
                if self.navigator.is_some() {
                    info!(sections = self.posts.len(), "navigator initialized");
                }
            }
        }
    }

    /// Whether the universe has anything to navigate
    pub fn is_active(&self) -> bool {
        self.navigator.is_some()
    }

    /// A wheel notch was received; feed the debouncer.
    pub fn on_wheel(&mut self, direction: i32, now: Instant) {
        let delta = direction * self.config.ui.scroll.wheel_tick_units;
        self.wheel.on_wheel(delta, now);
    }

    /// Evaluate a settled wheel gesture, if its quiet period has passed.
    pub fn poll_wheel(&mut self, now: Instant) {
        let Some(gesture) = self.wheel.poll(now) else {
            return;
        };
        let viewport = self.viewport_height;
        let Some(nav) = self.navigator.as_mut() else {
            return;
        };
        match gesture {
            WheelGesture::Navigate(delta) if delta > 0 => nav.next(now),
            WheelGesture::Navigate(_) => nav.previous(now),
            WheelGesture::Drift(delta) => {
                let rows = (delta / WHEEL_DRIFT_DIVISOR).clamp(i16::MIN as i32, i16::MAX as i32);
                nav.drift(rows as i16, viewport, now);
            }
        }
    }

    /// Drag began on the document area
    pub fn swipe_press(&mut self, row: u16) {
        self.swipe.press(row);
    }

    /// Drag ended; classify it as a swipe action.
    pub fn swipe_release(&mut self, row: u16) -> Action {
        match self.swipe.release(row) {
            Some(SwipeDirection::Up) => Action::NextSection,
            Some(SwipeDirection::Down) => Action::PrevSection,
            None => Action::None,
        }
    }

    /// Hit-test a click against the indicator dots from the last render
    pub fn indicator_at(&self, column: u16, row: u16) -> Option<usize> {
        self.indicator_dots
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, index)| *index)
    }

    /// Apply an input action to the navigator.
    pub fn apply(&mut self, action: Action, now: Instant) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        let Some(nav) = self.navigator.as_mut() else {
            return;
        };
        match action {
            Action::NextSection => nav.next(now),
            Action::PrevSection => nav.previous(now),
            Action::FirstSection => nav.first(now),
            Action::LastSection => nav.last(now),
            Action::GoToSection(index) => nav.go_to(index, now),
            Action::Quit | Action::None => {}
        }
    }

    /// Per-frame update: advance the animation and settle wheel input.
    /// Returns the scroll offset to render at.
    pub fn update(&mut self, now: Instant) -> u16 {
        self.poll_wheel(now);
        match self.navigator.as_mut() {
            Some(nav) => nav.update(now),
            None => 0,
        }
    }

    /// True when the next frame should come at the animation tick rate
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.wheel.has_pending()
            || self
                .navigator
                .as_ref()
                .map(|nav| nav.is_animating(now))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn posts(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| Post {
                title: format!("Planet {}", i + 1),
                body: vec!["A small world.".to_string()],
            })
            .collect()
    }

    fn app(n: usize) -> App {
        let mut app = App::new(AppConfig::default(), posts(n));
        app.relayout(60);
        app.viewport_height = 40;
        app
    }

    #[test]
    fn test_empty_universe_stays_inactive() {
        let mut app = App::new(AppConfig::default(), Vec::new());
        app.relayout(60);
        assert!(!app.is_active());

        // Navigation input is a guarded no-op
        let t0 = Instant::now();
        app.apply(Action::NextSection, t0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_apply_navigates() {
        let mut app = app(5);
        let t0 = Instant::now();

        app.apply(Action::NextSection, t0);
        assert_eq!(app.navigator.as_ref().unwrap().current(), 1);

        app.apply(Action::GoToSection(4), t0);
        assert_eq!(app.navigator.as_ref().unwrap().current(), 4);
    }

    #[test]
    fn test_quit() {
        let mut app = app(2);
        app.apply(Action::Quit, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_wheel_notch_navigates_once() {
        let mut app = app(5);
        let t0 = Instant::now();

        // One notch (60 units by default) exceeds the 50-unit threshold
        app.on_wheel(1, t0);
        app.poll_wheel(t0 + Duration::from_millis(60));
        assert_eq!(app.navigator.as_ref().unwrap().current(), 1);

        // Polling again does nothing: the gesture was consumed
        app.poll_wheel(t0 + Duration::from_millis(120));
        assert_eq!(app.navigator.as_ref().unwrap().current(), 1);
    }

    #[test]
    fn test_swipe_maps_to_actions() {
        let mut app = app(3);

        app.swipe_press(40);
        // Default threshold is 50 rows; a 10-row drag is ignored
        assert_eq!(app.swipe_release(30), Action::None);
    }

    #[test]
    fn test_indicator_hit_test() {
        let mut app = app(3);
        app.indicator_dots = vec![
            (Rect::new(70, 10, 3, 1), 0),
            (Rect::new(70, 12, 3, 1), 1),
            (Rect::new(70, 14, 3, 1), 2),
        ];

        assert_eq!(app.indicator_at(71, 12), Some(1));
        assert_eq!(app.indicator_at(71, 13), None);
        assert_eq!(app.indicator_at(5, 12), None);
    }

    #[test]
    fn test_relayout_same_width_is_noop() {
        let mut app = app(3);
        let before = app.navigator.as_ref().unwrap().sections().to_vec();
        app.relayout(60);
        assert_eq!(app.navigator.as_ref().unwrap().sections(), &before[..]);
    }
}
