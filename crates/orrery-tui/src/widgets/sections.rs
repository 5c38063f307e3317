use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use orrery_core::nav::SectionState;

use crate::app::App;
use crate::theme::DeepSpace;

/// The scrolling document: banner region, then one section per post.
///
/// Renders a viewport-sized window of the virtual document row by row.
/// Each document row is either banner, a section's title/underline/body
/// line, or gap; section rows are styled by their display state.
pub struct SectionsWidget;

impl SectionsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, scroll: u16, now: Instant) {
        let Some(nav) = app.navigator.as_ref() else {
            let empty = Paragraph::new(Line::from(Span::styled(
                "no posts in this universe",
                Style::default().fg(DeepSpace::FG2),
            )));
            frame.render_widget(empty, area);
            return;
        };

        let header_offset = nav.config().header_offset;
        let pulse = nav.pulse_active(now);

        let mut lines = Vec::with_capacity(area.height as usize);
        for y in 0..area.height {
            let doc_row = scroll.saturating_add(y);
            lines.push(Self::document_row(app, doc_row, header_offset, pulse, area.width));
        }

        let paragraph =
            Paragraph::new(lines).style(Style::default().bg(DeepSpace::BG0).fg(DeepSpace::FG0));
        frame.render_widget(paragraph, area);
    }

    /// Produce one rendered document row.
    fn document_row(
        app: &App,
        doc_row: u16,
        header_offset: u16,
        pulse: bool,
        width: u16,
    ) -> Line<'static> {
        if doc_row < header_offset {
            return Self::banner_row(doc_row, header_offset, width);
        }

        let nav = match app.navigator.as_ref() {
            Some(nav) => nav,
            None => return Line::default(),
        };

        let hit = nav
            .sections()
            .iter()
            .find(|s| doc_row >= s.offset && doc_row < s.offset.saturating_add(s.height));
        let Some(section) = hit else {
            // Gap between sections
            return Line::default();
        };

        let state = nav.state_of(section.index);
        let content = &app.contents[section.index];
        let row_in_section = doc_row - section.offset;

        let (title_style, body_style) = match state {
            SectionState::Active => (
                Style::default()
                    .fg(if pulse {
                        DeepSpace::PULSE
                    } else {
                        DeepSpace::ACCENT
                    })
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(DeepSpace::FG0),
            ),
            SectionState::Visited => (
                Style::default().fg(DeepSpace::GLOW),
                Style::default().fg(DeepSpace::FG1),
            ),
            SectionState::Upcoming => (
                Style::default().fg(DeepSpace::FG2),
                Style::default().fg(DeepSpace::FG2),
            ),
        };

        match row_in_section {
            0 => {
                let marker = match state {
                    SectionState::Active => "◉ ",
                    SectionState::Visited => "● ",
                    SectionState::Upcoming => "○ ",
                };
                Line::from(vec![
                    Span::styled(marker.to_string(), title_style),
                    Span::styled(content.title.clone(), title_style),
                ])
            }
            1 => {
                let rule_width = (content.title.width() + 2).min(width as usize);
                Line::from(Span::styled("─".repeat(rule_width), title_style))
            }
            n => {
                let line = content
                    .lines
                    .get(n as usize - 2)
                    .cloned()
                    .unwrap_or_default();
                Line::from(Span::styled(line, body_style))
            }
        }
    }

    /// Banner rows above the first section: a tagline in the middle of the
    /// region, stars elsewhere.
    fn banner_row(doc_row: u16, header_offset: u16, width: u16) -> Line<'static> {
        if doc_row == header_offset / 2 {
            let tagline = "· a universe of small planets ·";
            let pad = (width as usize).saturating_sub(tagline.width()) / 2;
            return Line::from(Span::styled(
                format!("{}{}", " ".repeat(pad), tagline),
                Style::default().fg(DeepSpace::FG1),
            ));
        }
        // Sparse deterministic starfield
        if doc_row % 7 == 3 {
            let col = (doc_row as usize * 13) % width.max(1) as usize;
            return Line::from(Span::styled(
                format!("{}·", " ".repeat(col)),
                Style::default().fg(DeepSpace::FG2),
            ));
        }
        Line::default()
    }
}
