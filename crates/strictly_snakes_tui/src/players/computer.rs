//! Computer player: waits a beat, then rolls.

use super::Player;
use anyhow::Result;
use std::time::Duration;
use strictly_snakes::{GameSnapshot, Intent};
use tracing::{debug, instrument};

/// The computer seat. It never makes a choice beyond rolling.
pub struct ComputerPlayer {
    name: String,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that pauses `delay` before each roll.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(turn = snapshot.turn))]
    async fn next_intent(&mut self, snapshot: &GameSnapshot) -> Result<Intent> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Computer thinking");
        tokio::time::sleep(self.delay).await;
        Ok(Intent::Roll)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_snakes::GameSession;

    #[tokio::test]
    async fn always_rolls() {
        let mut computer = ComputerPlayer::new("Computer", Duration::ZERO);
        let snapshot = GameSession::seeded(3).snapshot();
        assert_eq!(computer.next_intent(&snapshot).await.unwrap(), Intent::Roll);
        assert_eq!(computer.name(), "Computer");
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_delay() {
        let mut computer = ComputerPlayer::new("Computer", Duration::from_secs(5));
        let snapshot = GameSession::seeded(3).snapshot();
        let started = tokio::time::Instant::now();
        computer.next_intent(&snapshot).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
