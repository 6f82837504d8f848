//! Headless simulation: many automatic games, one report.

use anyhow::Result;
use serde::Serialize;
use strictly_snakes::{GameSession, GameSummary, Player as Seat};
use tracing::{debug, info, instrument};

/// Aggregate results over a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Games the first seat won.
    pub human_wins: u32,
    /// Games the second seat won.
    pub computer_wins: u32,
    /// Games cut off by the turn limit.
    pub unfinished: u32,
    /// Mean turns over finished games.
    pub mean_turns: f64,
    /// Longest finished game.
    pub max_turns: u32,
}

impl SimulationReport {
    fn record(&mut self, summary: GameSummary) {
        self.games += 1;
        match summary.winner {
            Some(Seat::Human) => self.human_wins += 1,
            Some(Seat::Computer) => self.computer_wins += 1,
            None => {
                self.unfinished += 1;
                return;
            }
        }
        let finished = f64::from(self.human_wins + self.computer_wins);
        self.mean_turns += (f64::from(summary.turns) - self.mean_turns) / finished;
        self.max_turns = self.max_turns.max(summary.turns);
    }

    /// Plain-text rendering for the terminal.
    pub fn to_text(&self) -> String {
        format!(
            "Games played:   {}\n\
             Human wins:     {}\n\
             Computer wins:  {}\n\
             Unfinished:     {}\n\
             Mean turns:     {:.1}\n\
             Longest game:   {}",
            self.games,
            self.human_wins,
            self.computer_wins,
            self.unfinished,
            self.mean_turns,
            self.max_turns,
        )
    }
}

/// Plays `games` automatic games. With a seed, game `i` rolls from `seed + i`
/// so the whole batch is reproducible.
#[instrument]
pub fn simulate(games: u32, seed: Option<u64>, max_turns: u32) -> Result<SimulationReport> {
    info!("Starting simulation");
    let mut report = SimulationReport::default();

    for game in 0..games {
        let mut session = match seed {
            Some(seed) => GameSession::seeded(seed.wrapping_add(u64::from(game))),
            None => GameSession::new(),
        };
        let summary = session.play_out(max_turns)?;
        debug!(game, winner = ?summary.winner, turns = summary.turns, "Game finished");
        report.record(summary);
    }

    info!(
        human_wins = report.human_wins,
        computer_wins = report.computer_wins,
        unfinished = report.unfinished,
        "Simulation complete"
    );
    Ok(report)
}

/// Runs the `simulate` subcommand and prints the report.
pub fn run(games: u32, seed: Option<u64>, max_turns: u32, json: bool) -> Result<()> {
    let report = simulate(games, seed, max_turns)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
