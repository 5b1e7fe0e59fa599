mod app;
mod board;
mod cli;
mod config;
mod event;
mod logging;
mod model;
mod prefs;
mod source;
mod ui;

use std::io;
use std::panic;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use app::{Action, App};
use prefs::file::FilePreferenceStore;
use prefs::Preferences;
use source::http::HttpTicketSource;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Load config
    let config = config::load_config()?;
    let _log_guard =
        logging::init_logging(&config::data_dir().join("logs"), config.log_level.as_deref());

    match args.first().map(String::as_str) {
        Some("print") => return cli::handle_print(&args[1..], &config).await,
        Some("help" | "--help" | "-h") => {
            cli::print_help();
            return Ok(());
        }
        Some(other) => {
            cli::print_help();
            anyhow::bail!("Unknown command '{other}'");
        }
        None => {}
    }

    let source = HttpTicketSource::new(config.endpoint(), config.timeout())?;
    let prefs = Preferences::load(Box::new(FilePreferenceStore::new()));
    info!(endpoint = config.endpoint(), "starting ticketboard");

    // Set up action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Create app
    let mut app = App::new(prefs, Box::new(source), action_tx.clone());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Spawn event reader
    let event_tx = action_tx.clone();
    tokio::spawn(async move {
        event::run_event_loop(event_tx).await;
    });

    // The one fetch; runs in the background while the board is already live
    app.start_fetch();

    // Main loop
    loop {
        // Render
        terminal.draw(|f| ui::render(f, &app))?;

        // Wait for action
        if let Some(action) = action_rx.recv().await {
            app.update(action);
            if app.should_quit {
                break;
            }
        } else {
            break;
        }
    }

    // Cancels the fetch if it is still in flight
    drop(app);

    // Restore terminal
    terminal.show_cursor()?;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    info!("ticketboard exited");
    Ok(())
}
