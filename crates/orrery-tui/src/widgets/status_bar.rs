use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::DeepSpace;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status_text = match app.navigator.as_ref() {
            Some(nav) => format!(
                " Section {}/{} | row {}",
                nav.current() + 1,
                nav.len(),
                nav.scroll()
            ),
            None => " empty universe".to_string(),
        };

        let help_hint = " j/k:sections Home/End:ends q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(DeepSpace::FG0).bg(DeepSpace::BG1),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(DeepSpace::BG1)),
            Span::styled(
                help_hint,
                Style::default().fg(DeepSpace::FG1).bg(DeepSpace::BG1),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
