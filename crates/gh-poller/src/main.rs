use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod orchestrator;
mod reducers;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod theme;
mod utils;
mod view_models;
mod views;

use actions::{Action, GlobalAction, SettingsAction};
use gh_client::{OctocrabClient, SearchClient};
use gh_poller_config::{load_settings, AppConfig, FileStore};
use middleware::{
    github_middleware::GitHubMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware, settings_middleware::SettingsMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting gh-poller, logging to {:?}", log_file);

    let config = AppConfig::load();
    let store_path = config.store_path()?;
    let settings_store = FileStore::open(&store_path)
        .with_context(|| format!("Failed to open settings store {:?}", store_path))?;
    let settings = load_settings(&settings_store);

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let client: Arc<dyn SearchClient> =
        Arc::new(OctocrabClient::with_base_uri(config.api_base_uri.as_deref())?);

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(settings));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SettingsMiddleware::new(settings_store)));
    store.add_middleware(Box::new(GitHubMiddleware::new(
        client,
        runtime.handle().clone(),
    )));

    if !store.state().settings.is_complete() {
        log::info!("Settings incomplete, opening settings editor");
        store.dispatch(Action::Settings(SettingsAction::Open));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }

    log::info!("Exiting gh-poller");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    loop {
        // Apply everything dispatched since the last frame (keys, run events)
        store.process_pending();

        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
