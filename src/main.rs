use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use vibes::api::{self, ApiClient};
use vibes::app::App;
use vibes::cli::Cli;
use vibes::config;

/// Event poll timeout; bounds timer latency for debounce and rotation
const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load();
    let server = cli.resolve_server(&config);

    // Fetch worker: owns the HTTP client, talks over channels
    let client = ApiClient::new(&server)?;
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    api::spawn_worker(client, request_rx, response_tx);

    let app = App::new(&config, cli.city, request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    // Navigation handoff: the wrapper runs the actual weather search
    if let Some(city) = result? {
        println!("{city}");
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<String>> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events, falling through to the tick on timeout
        if event::poll(TICK_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        app.on_tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(app.take_submitted())
}
