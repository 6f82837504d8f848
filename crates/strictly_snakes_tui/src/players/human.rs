//! Human player that gets input from keyboard.

use super::Player;
use anyhow::Result;
use crossterm::event::KeyCode;
use strictly_snakes::{GameSnapshot, Intent};
use tokio::sync::mpsc;
use tracing::debug;

/// Maps a key to the intent it raises, if any.
pub fn intent_for_key(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::Char('r' | 'R' | ' ') => Some(Intent::Roll),
        KeyCode::Char('c' | 'C') | KeyCode::Enter => Some(Intent::Continue),
        KeyCode::Char('n' | 'N') => Some(Intent::Restart),
        _ => None,
    }
}

/// Human player using keyboard input.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<KeyCode>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<KeyCode>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn next_intent(&mut self, _snapshot: &GameSnapshot) -> Result<Intent> {
        while let Some(key) = self.input_rx.recv().await {
            match intent_for_key(key) {
                Some(intent) => return Ok(intent),
                None => debug!(?key, "Key has no binding"),
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_snakes::GameSession;

    #[test]
    fn bindings() {
        assert_eq!(intent_for_key(KeyCode::Char('r')), Some(Intent::Roll));
        assert_eq!(intent_for_key(KeyCode::Char(' ')), Some(Intent::Roll));
        assert_eq!(intent_for_key(KeyCode::Enter), Some(Intent::Continue));
        assert_eq!(intent_for_key(KeyCode::Char('c')), Some(Intent::Continue));
        assert_eq!(intent_for_key(KeyCode::Char('n')), Some(Intent::Restart));
        assert_eq!(intent_for_key(KeyCode::Char('x')), None);
        assert_eq!(intent_for_key(KeyCode::Esc), None);
    }

    #[tokio::test]
    async fn skips_unbound_keys() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut human = HumanPlayer::new("Ada", rx);
        tx.send(KeyCode::Char('z')).unwrap();
        tx.send(KeyCode::Enter).unwrap();
        let snapshot = GameSession::seeded(1).snapshot();
        assert_eq!(human.next_intent(&snapshot).await.unwrap(), Intent::Continue);
    }

    #[tokio::test]
    async fn closed_channel_is_an_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(tx);
        let mut human = HumanPlayer::new("Ada", rx);
        let snapshot = GameSession::seeded(1).snapshot();
        assert!(human.next_intent(&snapshot).await.is_err());
    }
}
