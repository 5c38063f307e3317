use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use orrery_core::nav::SectionState;

use crate::app::App;
use crate::theme::DeepSpace;

/// Minimum panel width for the dot labels and help footer
pub const MIN_LABEL_WIDTH: u16 = 14;

/// The side panel of section indicator dots.
///
/// One dot per section, vertically centered, mirroring the navigator's
/// display-state partition. Dot rows are recorded back into the app so
/// mouse clicks can be hit-tested against the last rendered frame.
pub struct IndicatorsWidget;

impl IndicatorsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        app.indicator_dots.clear();

        let Some(nav) = app.navigator.as_ref() else {
            return;
        };
        let count = nav.len();
        let pulse = nav.pulse_active(now);
        let show_labels = area.width >= MIN_LABEL_WIDTH;

        if show_labels && area.height > 0 {
            let title_rect = Rect::new(area.x, area.y, area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    " Planets",
                    Style::default()
                        .fg(DeepSpace::FG1)
                        .add_modifier(Modifier::BOLD),
                ))),
                title_rect,
            );
        }

        // Dots every other row, centered vertically in the panel
        let stack_height = (count as u16 * 2).saturating_sub(1);
        let top = area.y + area.height.saturating_sub(stack_height) / 2;

        let mut dots = Vec::with_capacity(count);
        for index in 0..count {
            let state = nav.state_of(index);
            let row = top + index as u16 * 2;
            if row >= area.y + area.height {
                break;
            }

            let (symbol, style) = match state {
                SectionState::Active => (
                    "◉",
                    Style::default()
                        .fg(if pulse {
                            DeepSpace::PULSE
                        } else {
                            DeepSpace::ACCENT
                        })
                        .add_modifier(Modifier::BOLD),
                ),
                SectionState::Visited => ("●", Style::default().fg(DeepSpace::GLOW)),
                SectionState::Upcoming => ("○", Style::default().fg(DeepSpace::FG2)),
            };

            let mut spans = vec![
                Span::raw(" "),
                Span::styled(symbol.to_string(), style),
            ];
            if show_labels {
                let label = format!(" {}", index + 1);
                let label_style = match state {
                    SectionState::Active => Style::default().fg(DeepSpace::FG0),
                    _ => Style::default().fg(DeepSpace::FG2),
                };
                spans.push(Span::styled(label, label_style));
            }

            let rect = Rect::new(area.x, row, area.width, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), rect);
            dots.push((rect, index));
        }
        app.indicator_dots = dots;

        if app.config.ui.show_help && show_labels {
            Self::render_help(frame, area);
        }
    }

    fn render_help(frame: &mut Frame, area: Rect) {
        let help = [" ↑↓ or j/k", " wheel/drag", " q to quit"];
        if area.height < help.len() as u16 + 1 {
            return;
        }
        let style = Style::default().fg(DeepSpace::FG2);
        let top = area.y + area.height - help.len() as u16;
        for (i, text) in help.iter().enumerate() {
            let rect = Rect::new(area.x, top + i as u16, area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(*text, style))),
                rect,
            );
        }
    }
}
