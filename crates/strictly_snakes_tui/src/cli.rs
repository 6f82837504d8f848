//! Command-line interface for strictly_snakes.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Snakes - snakes and ladders against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_snakes")]
#[command(about = "Snakes and ladders in the terminal, human vs computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "snakes.toml")]
    pub config: PathBuf,

    /// File the TUI writes its log to
    #[arg(long, global = true, default_value = "strictly_snakes.log")]
    pub log_file: PathBuf,

    /// Subcommand to run; plays in the terminal when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Play many computer-vs-computer games headlessly and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Base seed; game `i` uses `seed + i`
        #[arg(long)]
        seed: Option<u64>,

        /// Give up on a game after this many turns
        #[arg(long, default_value = "10000")]
        max_turns: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Overrides for the interactive game. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Name shown for the human seat
    #[arg(long)]
    pub name: Option<String>,

    /// Milliseconds the computer waits before rolling
    #[arg(long)]
    pub computer_delay_ms: Option<u64>,

    /// Milliseconds per square when animating a snake or ladder
    #[arg(long)]
    pub animation_step_ms: Option<u64>,

    /// Seed the dice for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,
}
