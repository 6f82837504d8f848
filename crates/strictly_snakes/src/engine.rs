//! Turn engine: resolves a single roll without touching shared state.

use crate::{BoardTopology, Roll, Square, SquarePath, Transition};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What a roll did to the acting player's token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The roll would pass square 100. The token stays put.
    Overshoot {
        /// Pips needed to land exactly on 100.
        needed: u8,
    },
    /// The token moved.
    Moved {
        /// Final square after any snake or ladder.
        to: Square,
        /// Whether a snake or ladder fired.
        transition: Transition,
        /// Square the token reached before the transition.
        transition_from: Square,
    },
}

impl MoveOutcome {
    /// Where the token stands afterwards, given where it started.
    pub fn final_square(&self, from: Square) -> Square {
        match self {
            MoveOutcome::Overshoot { .. } => from,
            MoveOutcome::Moved { to, .. } => *to,
        }
    }

    /// Whether the token ended on square 100.
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Moved { to, .. } if to.is_final())
    }

    /// Squares the token travels along its snake or ladder, for animation.
    ///
    /// Empty for overshoots, plain moves, and jumps that go nowhere.
    pub fn slide(&self) -> SquarePath {
        match *self {
            MoveOutcome::Moved {
                to,
                transition: Transition::Snake | Transition::Ladder,
                transition_from,
            } => SquarePath::new(transition_from, to),
            _ => SquarePath::empty(),
        }
    }
}

/// Computes the outcome of `roll` for a token on `current`.
///
/// Jumps resolve exactly once: a snake tail or ladder top that happens to be
/// another special square does not fire again.
#[instrument(skip(topology))]
pub fn apply_roll(current: Square, roll: Roll, topology: &BoardTopology) -> MoveOutcome {
    let Some(candidate) = Square::new(current.get() + roll.get()) else {
        return MoveOutcome::Overshoot {
            needed: current.distance_to_final(),
        };
    };

    match topology.jump_from(candidate) {
        Some((transition, to)) => MoveOutcome::Moved {
            to,
            transition,
            transition_from: candidate,
        },
        None => MoveOutcome::Moved {
            to: candidate,
            transition: Transition::None,
            transition_from: candidate,
        },
    }
}

/// Where the acting player is within its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TurnPhase {
    /// Waiting for the current player's roll.
    AwaitingRoll,
    /// The roll is resolved; waiting for control to pass.
    RollApplied,
    /// Someone reached square 100. Only a restart leaves this phase.
    GameOver,
}
