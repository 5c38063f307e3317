use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::DeepSpace;

/// Pinned one-row header. The document's banner region scrolls away
/// underneath it; this row never moves.
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let position = match app.navigator.as_ref() {
            Some(nav) => format!(" {} / {} ", nav.current() + 1, nav.len()),
            None => String::new(),
        };

        let title = " ✦ Orrery ";
        let padding = area
            .width
            .saturating_sub(title.len() as u16 + position.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(DeepSpace::ACCENT)
                    .bg(DeepSpace::BG1)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(padding), Style::default().bg(DeepSpace::BG1)),
            Span::styled(
                position,
                Style::default().fg(DeepSpace::FG1).bg(DeepSpace::BG1),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
