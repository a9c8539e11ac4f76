// ABOUTME: Main entry point for the termfolio terminal portfolio

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::warn;

mod app;
mod components;
mod config;
mod contact;
mod models;

use app::{App, AppState, EventHandler};
use components::LayoutComponent;
use config::Config;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about = "Terminal-based personal portfolio")]
struct Cli {
    /// Start with this theme instead of the saved preference
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Skip the loading splash screen
    #[arg(long)]
    no_splash: bool,

    /// Collapse animations to their end states
    #[arg(long)]
    reduced_motion: bool,

    /// Use an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();
    setup_panic_handler();

    let config_path = match cli.config.clone() {
        Some(path) => Some(path),
        None => Config::default_path().ok(),
    };
    let mut config = match config_path.as_deref().map(Config::load) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            warn!("could not load preferences, using defaults: {e}");
            Config::default()
        }
        None => Config::default(),
    };

    if let Some(theme) = cli.theme {
        config.set_theme_dark(matches!(theme, ThemeArg::Dark));
    }
    if cli.reduced_motion {
        config.reduced_motion = true;
    }

    let state = AppState::new(config, config_path, !cli.no_splash);
    let mut app = App::new(state);
    let mut layout = LayoutComponent::new();

    run_tui(&mut app, &mut layout)
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Fast enough for the typed headline's 100 ms cadence.
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if let Some(app_event) =
                        EventHandler::handle_key_event(key_event, &mut app.state)
                    {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                Event::Mouse(mouse_event) => {
                    let size = terminal.size()?;
                    if let Some(app_event) =
                        EventHandler::handle_mouse_event(mouse_event, size, &app.state)
                    {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                Event::Resize(_, _) => {}
                Event::FocusGained => {}
                Event::FocusLost => {}
                Event::Paste(_) => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = directories::ProjectDirs::from("", "", "termfolio")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from(".termfolio/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "termfolio-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .expect("Failed to create log file");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "termfolio=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before logging so the message is readable.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
