use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use slidenav_core::AppConfig;
use slidenav_tui::{
    event::{AppEvent, EventHandler},
    widgets, App, Deck,
};

pub fn run(config: AppConfig, deck: Deck) -> Result<()> {
    let title = format!("slidenav - {}", deck.title().unwrap_or("untitled"));
    let (cols, rows) = terminal::size()?;
    let mut app = App::new(deck, &config, cols, rows)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.ui.animation_tick_duration(),
    );

    info!(slides = app.navigator.slide_count(), cols, rows, "presenter starting");
    app.start();
    let result = main_loop(&mut terminal, &mut app, &event_handler);

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

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        app.frame();

        // Draw UI
        terminal.draw(|frame| widgets::draw(frame, app))?;

        // Animation frames while something moves, otherwise sleep until the
        // next intro timer or the idle tick
        let event = if app.is_animating() {
            event_handler.next_animation()?
        } else if let Some(deadline) = app.next_deadline() {
            let wait = deadline.saturating_duration_since(Instant::now());
            event_handler.next_within(wait)?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.status_message = None;
                    app.handle_key(key);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::Resize(cols, rows) => app.resize(cols, rows),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!(index = app.navigator.index(), "presenter closing");
            return Ok(());
        }
    }
}
