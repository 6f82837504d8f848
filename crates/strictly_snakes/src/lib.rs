//! Strictly Snakes - snakes and ladders game logic
//!
//! A human plays the computer on a fixed 100-square board. This crate holds
//! the game state machine only; rendering lives with the front end, which
//! reads [`GameSnapshot`]s and raises [`Intent`]s.
//!
//! # Architecture
//!
//! - **Board**: [`BoardTopology`] maps snake heads and ladder bottoms
//! - **Dice**: [`DiceSource`] is injectable; [`RandomDice`] and [`ScriptedDice`] ship
//! - **Engine**: [`apply_roll`] resolves a roll into a [`MoveOutcome`]
//! - **Session**: [`GameSession`] owns the state and sequences intents
//!
//! # Example
//!
//! ```
//! use strictly_snakes::{GameSession, Player, ScriptedDice};
//!
//! let mut session = GameSession::with_dice(ScriptedDice::new([3]));
//! let snapshot = session.request_roll()?;
//! // 1 + 3 lands on the ladder at 4, which climbs to 14.
//! assert_eq!(snapshot.positions.human.get(), 14);
//!
//! let snapshot = session.request_continue()?;
//! assert_eq!(snapshot.current_player, Player::Computer);
//! # Ok::<(), strictly_snakes::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod dice;
mod engine;
mod error;
mod events;
mod path;
mod session;
mod types;

pub mod contracts;
pub mod invariants;

// Crate-level exports - Domain types
pub use types::{Player, Positions, Square, Transition};

// Crate-level exports - Board
pub use board::{BoardTopology, LADDERS, ROW_WIDTH, SNAKES};

// Crate-level exports - Dice
pub use dice::{DiceSource, RandomDice, Roll, ScriptedDice};

// Crate-level exports - Engine
pub use engine::{MoveOutcome, TurnPhase, apply_roll};
pub use path::SquarePath;

// Crate-level exports - Session
pub use action::{Intent, Rejection};
pub use events::TurnEvent;
pub use session::{GameSession, GameSnapshot, GameState, GameSummary, TurnReport};

// Crate-level exports - Errors
pub use error::{BoardError, SessionError};
