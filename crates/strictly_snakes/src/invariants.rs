//! First-class invariants over [`GameState`].
//!
//! Invariants are logical properties that hold between any two intents.
//! They are checked after every intent in debug builds and can be tested
//! independently.

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// `game_over` is set exactly when a token stands on square 100.
pub struct GameOverMatchesFinal;

impl Invariant<GameState> for GameOverMatchesFinal {
    fn holds(state: &GameState) -> bool {
        let positions = state.positions();
        let someone_home = positions.human.is_final() || positions.computer.is_final();
        state.game_over() == someone_home
    }

    fn description() -> &'static str {
        "game over iff a player stands on square 100"
    }
}

/// A finished game always has its final roll resolved.
pub struct OverImpliesResolved;

impl Invariant<GameState> for OverImpliesResolved {
    fn holds(state: &GameState) -> bool {
        !state.game_over() || state.turn_completed()
    }

    fn description() -> &'static str {
        "game over implies the turn is completed"
    }
}

/// Before the current player rolls, the log is empty.
pub struct QuietUntilRolled;

impl Invariant<GameState> for QuietUntilRolled {
    fn holds(state: &GameState) -> bool {
        state.turn_completed() || state.log().is_empty()
    }

    fn description() -> &'static str {
        "log is empty until the current player rolls"
    }
}

/// A turn report exists exactly when the turn is completed.
pub struct ReportMatchesTurn;

impl Invariant<GameState> for ReportMatchesTurn {
    fn holds(state: &GameState) -> bool {
        state.last_turn().is_some() == state.turn_completed()
            && state
                .last_turn()
                .is_none_or(|report| report.player == state.current_player())
    }

    fn description() -> &'static str {
        "last turn report belongs to the current, completed turn"
    }
}

/// Every invariant the session maintains.
pub type SessionInvariants = (
    GameOverMatchesFinal,
    OverImpliesResolved,
    QuietUntilRolled,
    ReportMatchesTurn,
);
