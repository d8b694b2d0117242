//! Farm Admin TUI - terminal back office for a cattle farm
//!
//! A Ratatui-based TUI for browsing and editing animals, properties,
//! locations, employees and business partners.

mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AdminConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use data::InMemoryStore;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_admin_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AdminConfig::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config: {e:#}");
        AdminConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Box::new(InMemoryStore::seeded()))
        .with_config_path(AdminConfig::path());
    let result = match app.init().await {
        Ok(()) => run_app(&mut terminal, &mut app).await,
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let poll_duration = Duration::from_millis(100);

    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await?;
                }
            }
        }

        // Debounced search and other timers
        app.tick(Instant::now());

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
