use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use orrery_core::post::load_universe;
use orrery_core::AppConfig;
use orrery_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    widgets::{FeedbackWidget, HeaderWidget, IndicatorsWidget, SectionsWidget, StatusBarWidget},
};

/// Width of the indicator panel; a narrower variant keeps just the dots
const INDICATOR_WIDTH: u16 = 14;
const INDICATOR_WIDTH_NARROW: u16 = 4;

pub fn run(config: AppConfig, universe: &Path) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    let posts = load_universe(universe)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Orrery")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_fps,
    );

    let mut app = App::new(config, posts);

    let result = run_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    // Track if we need the high frame rate for smooth scrolling.
    // Checked at the END of each iteration for the NEXT iteration's tick.
    let mut needs_fast_update = false;

    loop {
        // Advance the scroll animation and settle pending wheel input
        let now = Instant::now();
        let scroll = app.update(now);

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: pinned header + content + status bar
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            let indicator_width = if size.width < 50 {
                INDICATOR_WIDTH_NARROW
            } else {
                INDICATOR_WIDTH
            };
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(1), Constraint::Length(indicator_width)])
                .split(rows[1]);

            // Re-measure the document when the content width changed
            app.viewport_height = columns[0].height;
            app.relayout(columns[0].width);

            HeaderWidget::render(frame, rows[0], app);
            SectionsWidget::render(frame, columns[0], app, scroll, now);
            FeedbackWidget::render(frame, columns[0], app, now);
            IndicatorsWidget::render(frame, columns[1], app, now);
            StatusBarWidget::render(frame, rows[2], app);
        })?;

        // Handle events (use faster tick rate during animations or when a
        // wheel gesture is waiting to settle)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, keymap);
                    app.apply(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app, now);
                    app.apply(action, now);
                }
                AppEvent::Resize(_, _) => {
                    // Next draw re-measures against the new size
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
