//! Game orchestration between the two seats.

use crate::players::Player;
use anyhow::Result;
use strictly_snakes::{DiceSource, GameSession, GameSnapshot, Intent, Player as Seat};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// An intent was accepted; here is the new state.
    Updated(GameSnapshot),
    /// The computer is about to roll.
    ComputerThinking,
    /// The session refused an intent for a reason other than sequencing.
    Failed(String),
}

/// Owns the session and feeds it intents from whichever seat should act.
///
/// The orchestrator is the only writer of game state. The UI sees nothing but
/// the snapshots it publishes.
pub struct Orchestrator<D> {
    session: GameSession<D>,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<D: DiceSource + Send> Orchestrator<D> {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession<D>,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            human,
            computer,
            event_tx,
        }
    }

    /// Runs the game loop until a player or the UI goes away.
    ///
    /// The computer acts only when it has a roll to make. Every other
    /// decision, including continuing past the computer's turn and
    /// starting a new game, waits on the human.
    #[instrument(skip_all, fields(human = %self.human.name()))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.event_tx
            .send(GameEvent::Updated(self.session.snapshot()))?;

        loop {
            let snapshot = self.session.snapshot();
            let computer_to_roll =
                snapshot.current_player == Seat::Computer && snapshot.allows(Intent::Roll);

            let intent = if computer_to_roll {
                self.event_tx.send(GameEvent::ComputerThinking)?;
                self.computer.next_intent(&snapshot).await?
            } else {
                debug!(turn = snapshot.turn, "Waiting for human");
                self.human.next_intent(&snapshot).await?
            };

            self.submit(intent)?;
        }
    }

    /// Applies one intent and publishes the result.
    fn submit(&mut self, intent: Intent) -> Result<()> {
        match self.session.request(intent) {
            Ok(snapshot) => {
                self.event_tx.send(GameEvent::Updated(snapshot))?;
            }
            Err(e) if e.is_ignorable() => {
                debug!(%intent, error = %e, "Ignoring intent");
            }
            Err(e) => {
                error!(%intent, error = %e, "Session refused intent");
                self.event_tx.send(GameEvent::Failed(e.to_string()))?;
            }
        }
        Ok(())
    }
}
