use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::DeepSpace;

/// Short post-navigation pulse, drawn over the document for the few
/// hundred milliseconds after a section change.
pub struct FeedbackWidget;

impl FeedbackWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let Some(nav) = app.navigator.as_ref() else {
            return;
        };
        if !nav.pulse_active(now) || area.height == 0 {
            return;
        }

        let text = " 🚀 ";
        // Display width, not byte length (the rocket is a wide glyph)
        let display_width = 4u16;
        let rect = Rect::new(
            area.x + area.width.saturating_sub(display_width) / 2,
            area.y + area.height / 2,
            display_width.min(area.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(DeepSpace::PULSE)
                    .add_modifier(Modifier::BOLD),
            ))),
            rect,
        );
    }
}
