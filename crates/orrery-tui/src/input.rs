use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSection,
    PrevSection,
    FirstSection,
    LastSection,
    /// Jump straight to a section (indicator click)
    GoToSection(usize),
    None,
}

/// Translate a key event into an action.
///
/// The keymap lookup matches modifiers exactly, so chorded char keys
/// (Ctrl-j, Alt-k, ...) fall through to `Action::None` instead of
/// triggering navigation.
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);
    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Translate a mouse event into an action.
///
/// Wheel ticks feed the debouncer (the settled delta is evaluated later on
/// a tick), drags feed the swipe tracker, and left clicks are hit-tested
/// against the indicator dots.
pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App, now: Instant) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            app.on_wheel(1, now);
            Action::None
        }
        MouseEventKind::ScrollUp => {
            app.on_wheel(-1, now);
            Action::None
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = app.indicator_at(mouse.column, mouse.row) {
                return Action::GoToSection(index);
            }
            app.swipe_press(mouse.row);
            Action::None
        }
        MouseEventKind::Up(MouseButton::Left) => app.swipe_release(mouse.row),
        _ => Action::None,
    }
}
