//! Strictly Snakes - terminal snakes and ladders, human vs computer.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod orchestrator;
mod players;
mod simulate;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use orchestrator::{GameEvent, Orchestrator};
use players::{ComputerPlayer, HumanPlayer};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};
use strictly_snakes::{BoardTopology, GameSession};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,strictly_snakes=debug,strictly_snakes_tui=debug";

/// Frame interval while waiting for keys.
const FRAME: Duration = Duration::from_millis(30);

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play(args) => {
            init_file_tracing(&cli.log_file)?;
            let config = GameConfig::load(&cli.config)?.with_overrides(&args);
            run_tui(config).await
        }
        Command::Simulate {
            games,
            seed,
            max_turns,
            json,
        } => {
            init_stderr_tracing();
            simulate::run(games, seed, max_turns, json)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to stderr so stdout stays clean for the report.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the interactive game.
async fn run_tui(config: GameConfig) -> Result<()> {
    info!(?config, "Starting Strictly Snakes TUI");

    let session = match config.seed() {
        Some(seed) => GameSession::seeded(*seed),
        None => GameSession::new(),
    };
    let topology = session.topology().clone();

    let (key_tx, key_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let human = HumanPlayer::new(config.player_name().clone(), key_rx);
    let computer = ComputerPlayer::new("Computer", config.computer_delay());
    let mut orchestrator =
        Orchestrator::new(session, Box::new(human), Box::new(computer), event_tx);

    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            debug!(error = %e, "Orchestrator stopped");
        }
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config.player_name().clone(), config.animation_step());
    let res = run_app(&mut terminal, app, &topology, key_tx, &mut event_rx).await;

    orchestrator_handle.abort();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Strictly Snakes TUI exited");
    res
}

/// Draw, drain orchestrator events, forward keys. Returns when the user quits.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    topology: &BoardTopology,
    key_tx: mpsc::UnboundedSender<KeyCode>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event, Instant::now());
        }
        app.tick(Instant::now());

        terminal.draw(|f| ui::draw(f, &app, topology))?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        info!("User quit");
                        return Ok(());
                    }
                    code => {
                        if key_tx.send(code).is_err() {
                            anyhow::bail!("Game loop stopped unexpectedly");
                        }
                    }
                }
            }
        } else {
            tokio::task::yield_now().await;
        }
    }
}
