//! Human-readable turn events.
//!
//! A roll produces events in a fixed order: the roll itself, then either an
//! overshoot notice or a transition notice followed by the movement, then the
//! win notice if square 100 was reached.

use crate::{Player, Roll, Square};
use serde::{Deserialize, Serialize};

/// One line of the turn log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The die was rolled.
    Rolled {
        /// Who rolled.
        player: Player,
        /// Face shown.
        roll: Roll,
    },
    /// The roll would have passed 100.
    Overshot {
        /// Who rolled.
        player: Player,
        /// Exact pips still needed.
        needed: u8,
    },
    /// Landed on a ladder bottom.
    Climbed {
        /// Who landed on it.
        player: Player,
    },
    /// Landed on a snake head.
    Slid {
        /// Who landed on it.
        player: Player,
    },
    /// The token travels along a snake or ladder.
    Moving {
        /// Whose token.
        player: Player,
        /// Head or bottom.
        from: Square,
        /// Tail or top.
        to: Square,
    },
    /// Square 100 reached.
    Won {
        /// The winner.
        player: Player,
    },
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            TurnEvent::Rolled {
                player: Player::Human,
                roll,
            } => write!(f, "You rolled a {roll}!"),
            TurnEvent::Rolled { player, roll } => write!(f, "{player} rolled a {roll}!"),
            TurnEvent::Overshot {
                player: Player::Human,
                needed,
            } => write!(f, "Overshot! Need {needed} more."),
            TurnEvent::Overshot { player, needed } => {
                write!(f, "{player} overshot! Needs {needed} more.")
            }
            TurnEvent::Climbed {
                player: Player::Human,
            } => write!(f, "Ladder! Climb up!"),
            TurnEvent::Climbed { player } => write!(f, "{player} climbs a ladder!"),
            TurnEvent::Slid {
                player: Player::Human,
            } => write!(f, "Snake! Slide down!"),
            TurnEvent::Slid { player } => write!(f, "{player} slides down a snake!"),
            TurnEvent::Moving {
                player: Player::Human,
                from,
                to,
            } => write!(f, "Moving from {from} to {to}..."),
            TurnEvent::Moving { player, from, to } => {
                write!(f, "{player} moving from {from} to {to}...")
            }
            TurnEvent::Won {
                player: Player::Human,
            } => write!(f, "You win!"),
            TurnEvent::Won { player } => write!(f, "{player} wins!"),
        }
    }
}
