//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use strictly_snakes::{GameSnapshot, Intent};

/// Trait for seats that can act on the game.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Waits for this player's next intent given the current snapshot.
    async fn next_intent(&mut self, snapshot: &GameSnapshot) -> Result<Intent>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
