//! Contract-based validation for session intents.
//!
//! Each intent has a contract: preconditions decide whether the intent is
//! legal right now, postconditions verify the transition it produced.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{GameState, Intent, Rejection, SessionError};
use tracing::{instrument, warn};

/// Preconditions and postconditions for one kind of intent.
pub trait Contract<S> {
    /// The intent this contract governs.
    const INTENT: Intent;

    /// Checks preconditions before applying the intent.
    fn pre(state: &S) -> Result<(), SessionError>;

    /// Checks postconditions after applying the intent.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

fn reject(intent: Intent, reason: Rejection) -> SessionError {
    warn!(%intent, %reason, "Rejected intent");
    SessionError::IllegalIntent { intent, reason }
}

fn broken(intent: Intent, what: &str) -> SessionError {
    SessionError::InvariantViolation {
        description: format!("Postcondition failed after {intent}: {what}"),
    }
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: nobody has reached square 100.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects `intent` once the game is over.
    #[instrument(skip(state))]
    pub fn check(intent: Intent, state: &GameState) -> Result<(), SessionError> {
        if state.game_over() {
            Err(reject(intent, Rejection::GameOver))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the current player has not rolled yet.
pub struct TurnOpen;

impl TurnOpen {
    /// Rejects `intent` after the roll is resolved.
    #[instrument(skip(state))]
    pub fn check(intent: Intent, state: &GameState) -> Result<(), SessionError> {
        if state.turn_completed() {
            Err(reject(intent, Rejection::TurnAlreadyResolved))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the current player has rolled.
pub struct TurnResolved;

impl TurnResolved {
    /// Rejects `intent` before the roll.
    #[instrument(skip(state))]
    pub fn check(intent: Intent, state: &GameState) -> Result<(), SessionError> {
        if state.turn_completed() {
            Ok(())
        } else {
            Err(reject(intent, Rejection::TurnNotResolved))
        }
    }
}

/// Precondition: someone has won.
pub struct GameFinished;

impl GameFinished {
    /// Rejects `intent` while the game is running.
    #[instrument(skip(state))]
    pub fn check(intent: Intent, state: &GameState) -> Result<(), SessionError> {
        if state.game_over() {
            Ok(())
        } else {
            Err(reject(intent, Rejection::GameInProgress))
        }
    }
}

/// Verifies every session invariant on `after`.
fn invariants_hold(intent: Intent, after: &GameState) -> Result<(), SessionError> {
    SessionInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        broken(intent, &descriptions)
    })
}

// ─────────────────────────────────────────────────────────────
//  Intent contracts
// ─────────────────────────────────────────────────────────────

/// Contract for rolling.
///
/// Preconditions: game not over, turn not yet resolved.
/// Postconditions: same player, opponent untouched, turn resolved.
pub struct RollContract;

impl Contract<GameState> for RollContract {
    const INTENT: Intent = Intent::Roll;

    fn pre(state: &GameState) -> Result<(), SessionError> {
        GameNotOver::check(Self::INTENT, state)?;
        TurnOpen::check(Self::INTENT, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), SessionError> {
        let player = before.current_player();
        if after.current_player() != player {
            return Err(broken(Self::INTENT, "current player changed"));
        }
        if after.positions().of(player.opponent()) != before.positions().of(player.opponent()) {
            return Err(broken(Self::INTENT, "opponent moved"));
        }
        if !after.turn_completed() || after.log().is_empty() {
            return Err(broken(Self::INTENT, "turn not resolved"));
        }
        invariants_hold(Self::INTENT, after)
    }
}

/// Contract for passing control.
///
/// Preconditions: game not over, turn resolved.
/// Postconditions: player toggled once, tokens untouched, log cleared.
pub struct ContinueContract;

impl Contract<GameState> for ContinueContract {
    const INTENT: Intent = Intent::Continue;

    fn pre(state: &GameState) -> Result<(), SessionError> {
        GameNotOver::check(Self::INTENT, state)?;
        TurnResolved::check(Self::INTENT, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), SessionError> {
        if after.current_player() != before.current_player().opponent() {
            return Err(broken(Self::INTENT, "player did not toggle"));
        }
        if after.positions() != before.positions() {
            return Err(broken(Self::INTENT, "a token moved"));
        }
        if after.turn_completed() || !after.log().is_empty() {
            return Err(broken(Self::INTENT, "turn not reset"));
        }
        invariants_hold(Self::INTENT, after)
    }
}

/// Contract for starting over.
///
/// Precondition: game over.
/// Postcondition: state equals a fresh game.
pub struct RestartContract;

impl Contract<GameState> for RestartContract {
    const INTENT: Intent = Intent::Restart;

    fn pre(state: &GameState) -> Result<(), SessionError> {
        GameFinished::check(Self::INTENT, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), SessionError> {
        if *after != GameState::new() {
            return Err(broken(Self::INTENT, "state not reset"));
        }
        invariants_hold(Self::INTENT, after)
    }
}
