use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use slashpad::app::{config, r#loop::run_loop, state::AppState};
use slashpad::{infrastructure, logging};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(%panic_info, "panic");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let (app_config, config_error) = config::load();

    let log_path = app_config
        .log_file
        .clone()
        .or_else(logging::default_log_path);
    let _log_guard = logging::init_or_disable(&app_config.log_level, log_path.as_deref());
    if let Some(err) = config_error {
        tracing::warn!(error = %format!("{err:#}"), "using default configuration");
    }

    setup_panic_hook();

    // Build the source BEFORE terminal setup so a bad endpoint is reported
    // on a normal terminal.
    let source = infrastructure::command_source(&app_config)?;
    let mut app_state = AppState::new(&app_config);
    app_state.source_label = source.describe();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "editor loop failed");
        println!("{err:?}");
    }

    Ok(())
}
