//! Component Tour - Entry Point
//!
//! Initializes logging and the terminal, then runs the event loop until the
//! user quits.

use std::io;
use std::time::Duration;
use std::fs::OpenOptions;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use component_tour::{App, Settings};

/// How long to wait for input before checking again
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Component Tour v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load();
    let mut app = App::new(&settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Component Tour shut down cleanly");
    result
}

/// Log to a file so output does not interfere with the TUI
fn init_logging() {
    let target = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("component-tour.log")
        .or_else(|_| OpenOptions::new().write(true).open(null_device()));

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    );
    match target {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        // nowhere to write: keep the screen clean
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn null_device() -> &'static str {
    if cfg!(windows) { "NUL" } else { "/dev/null" }
}

/// Redraw only when navigation state or terminal size changed
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut drawn_stamp = None;

    loop {
        if drawn_stamp != Some(app.render_stamp()) {
            terminal.draw(|frame| app.render(frame))?;
            drawn_stamp = Some(app.render_stamp());
        }

        if !event::poll(POLL_TIMEOUT)? {
            continue;
        }

        match event::read()? {
            // Only handle key press events, not releases
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match app.handle_input(key) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => log::warn!("Input handling error: {}", e),
                }
            }
            Event::Resize(width, height) => {
                log::debug!("Terminal resized to {}x{}", width, height);
                drawn_stamp = None;
            }
            _ => {}
        }
    }

    Ok(())
}
