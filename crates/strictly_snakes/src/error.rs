//! Error types for board construction and session intents.

use crate::{Intent, Rejection, Square};
use derive_more::{Display, Error};

/// A custom board topology failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A square number outside 1-100.
    #[display("Square {} is off the board (must be 1-100)", value)]
    SquareOutOfRange {
        /// The offending number.
        value: u8,
    },

    /// A snake whose tail is not below its head.
    #[display("Snake at {} must slide down, not to {}", head, tail)]
    SnakeNotDescending {
        /// Snake head.
        head: Square,
        /// Snake tail.
        tail: Square,
    },

    /// A ladder whose top is not above its bottom.
    #[display("Ladder at {} must climb up, not to {}", bottom, top)]
    LadderNotAscending {
        /// Ladder bottom.
        bottom: Square,
        /// Ladder top.
        top: Square,
    },

    /// A square used as the source of more than one snake or ladder.
    #[display("Square {} already starts a snake or ladder", square)]
    SquareReused {
        /// The duplicated source square.
        square: Square,
    },

    /// Square 100 ends the game and cannot start a jump.
    #[display("Square {} is terminal and cannot start a snake or ladder", square)]
    TerminalSource {
        /// Always square 100.
        square: Square,
    },
}

/// Errors raised by [`GameSession`](crate::GameSession) intents.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The intent is not legal in the current state. Nothing changed.
    #[display("Cannot {} now: {}", intent, reason)]
    IllegalIntent {
        /// What was asked for.
        intent: Intent,
        /// Why it was refused.
        reason: Rejection,
    },

    /// A dice source produced a value outside 1-6. Nothing changed.
    #[display("Dice produced {}, expected 1-6", value)]
    InvalidRoll {
        /// The out-of-range value.
        value: u8,
    },

    /// A postcondition failed after applying an intent.
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// Which invariants failed.
        description: String,
    },
}

impl SessionError {
    /// Whether a front end may silently drop this error.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, SessionError::IllegalIntent { .. })
    }
}
