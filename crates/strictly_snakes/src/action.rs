//! First-class intent types.
//!
//! Intents are what a front end asks the session to do. They carry no
//! arguments; legality depends only on the session state.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A request raised by the presentation layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Intent {
    /// Roll the die for the current player.
    Roll,
    /// Pass control to the other player.
    Continue,
    /// Start a fresh game after a win.
    Restart,
}

/// Why an intent was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Rejection {
    /// The current player has already rolled this turn.
    #[strum(serialize = "this turn's roll is already resolved")]
    TurnAlreadyResolved,
    /// The current player has not rolled yet.
    #[strum(serialize = "the current player has not rolled yet")]
    TurnNotResolved,
    /// Someone reached square 100.
    #[strum(serialize = "the game is over")]
    GameOver,
    /// Nobody has won yet.
    #[strum(serialize = "the game is still in progress")]
    GameInProgress,
}
