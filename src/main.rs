mod config;
mod controller;
mod logging;
mod model;
mod view;
#[cfg(test)]
mod testing;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use view::AppView;
use config::Config;
use controller::AppController;
use model::{AppModel, TmdbClient};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== MovieRama Starting ===");

    let config = Config::from_env()?;
    tracing::debug!(api_url = %config.api_url, language = %config.language, "Configuration loaded");

    let source = Arc::new(TmdbClient::new(&config));
    let model = Arc::new(AppModel::new());
    let controller = AppController::new(model.clone(), source, &config);

    // Genres and the first page load in the background while the UI comes up
    let controller_for_init = controller.clone();
    tokio::spawn(async move {
        controller_for_init.initialize().await;
    });

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("MovieRama shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (ui_state, listing, should_quit) = (
            model.get_ui_state().await,
            model.get_listing().await,
            model.should_quit().await,
        );

        terminal.draw(|f| {
            AppView::render(f, &ui_state, &listing);
        })?;

        // Short poll keeps background fetches showing up promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::error!(error = %e, "Key handling failed");
                }
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
