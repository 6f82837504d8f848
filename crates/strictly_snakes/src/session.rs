//! Game session: owns the mutable state and enforces intent sequencing.

use crate::contracts::{Contract, ContinueContract, RestartContract, RollContract};
use crate::engine::{self, MoveOutcome, TurnPhase};
use crate::{
    BoardTopology, DiceSource, Intent, Player, Positions, RandomDice, Roll, SessionError, Square,
    Transition, TurnEvent,
};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Record of the most recent roll, kept so a front end can animate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct TurnReport {
    /// Who rolled.
    pub player: Player,
    /// The face rolled.
    pub roll: Roll,
    /// Square before the roll.
    pub from: Square,
    /// What happened.
    pub outcome: MoveOutcome,
}

impl TurnReport {
    /// Square after the roll.
    pub fn to(&self) -> Square {
        self.outcome.final_square(self.from)
    }
}

/// Complete mutable game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) positions: Positions,
    pub(crate) current_player: Player,
    pub(crate) turn_completed: bool,
    pub(crate) game_over: bool,
    pub(crate) log: Vec<TurnEvent>,
    pub(crate) last_turn: Option<TurnReport>,
    pub(crate) turn: u32,
}

impl GameState {
    /// Both tokens on square 1, the human to roll.
    pub fn new() -> Self {
        Self {
            positions: Positions::start(),
            current_player: Player::Human,
            turn_completed: false,
            game_over: false,
            log: Vec::new(),
            last_turn: None,
            turn: 1,
        }
    }

    /// Token positions.
    pub fn positions(&self) -> Positions {
        self.positions
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the current player's roll has been resolved.
    pub fn turn_completed(&self) -> bool {
        self.turn_completed
    }

    /// Whether someone reached square 100.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Events of the current turn, oldest first.
    pub fn log(&self) -> &[TurnEvent] {
        &self.log
    }

    /// The roll that completed the current turn, if any.
    pub fn last_turn(&self) -> Option<&TurnReport> {
        self.last_turn.as_ref()
    }

    /// One-based turn counter. Each roll-and-continue cycle is one turn.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.game_over.then_some(self.current_player)
    }

    /// Where the acting player is within its turn.
    pub fn phase(&self) -> TurnPhase {
        match (self.game_over, self.turn_completed) {
            (true, _) => TurnPhase::GameOver,
            (false, true) => TurnPhase::RollApplied,
            (false, false) => TurnPhase::AwaitingRoll,
        }
    }

    /// Commits a resolved roll and narrates it.
    fn commit_roll(&mut self, report: TurnReport) {
        let player = report.player;
        self.log.push(TurnEvent::Rolled {
            player,
            roll: report.roll,
        });

        match report.outcome {
            MoveOutcome::Overshoot { needed } => {
                self.log.push(TurnEvent::Overshot { player, needed });
            }
            MoveOutcome::Moved {
                to,
                transition,
                transition_from,
            } => {
                let jumped = match transition {
                    Transition::Ladder => Some(TurnEvent::Climbed { player }),
                    Transition::Snake => Some(TurnEvent::Slid { player }),
                    Transition::None => None,
                };
                if let Some(event) = jumped {
                    self.log.push(event);
                    if transition_from != to {
                        self.log.push(TurnEvent::Moving {
                            player,
                            from: transition_from,
                            to,
                        });
                    }
                }
                self.positions.set(player, to);
            }
        }

        self.turn_completed = true;
        if self.positions.of(player).is_final() {
            self.game_over = true;
            self.log.push(TurnEvent::Won { player });
        }
        self.last_turn = Some(report);
    }

    /// Hands control to the other player.
    fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_completed = false;
        self.log.clear();
        self.last_turn = None;
        self.turn += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view handed to the presentation layer after every intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Token positions.
    pub positions: Positions,
    /// Whose turn it is.
    pub current_player: Player,
    /// Whether the current roll has been resolved.
    pub turn_completed: bool,
    /// Whether someone reached square 100.
    pub game_over: bool,
    /// Messages from the most recent roll; empty right after a continue.
    pub log: Vec<String>,
    /// One-based turn counter.
    pub turn: u32,
    /// The most recent roll, while its turn is open.
    pub last_turn: Option<TurnReport>,
}

impl GameSnapshot {
    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.game_over.then_some(self.current_player)
    }

    /// Whether `intent` would be accepted in this state.
    pub fn allows(&self, intent: Intent) -> bool {
        match intent {
            Intent::Roll => !self.turn_completed && !self.game_over,
            Intent::Continue => self.turn_completed && !self.game_over,
            Intent::Restart => self.game_over,
        }
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            positions: state.positions,
            current_player: state.current_player,
            turn_completed: state.turn_completed,
            game_over: state.game_over,
            log: state.log.iter().map(ToString::to_string).collect(),
            turn: state.turn,
            last_turn: state.last_turn,
        }
    }
}

/// How a fully played game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GameSummary {
    /// Winner, or `None` if the turn limit ran out first.
    pub winner: Option<Player>,
    /// Turns played, counting both players.
    pub turns: u32,
}

/// One game of snakes and ladders between the human and the computer.
///
/// The session is the single owner of [`GameState`]. Every intent is handled
/// atomically: it either commits fully or returns an error with the state
/// untouched.
#[derive(Debug)]
pub struct GameSession<D = RandomDice> {
    topology: BoardTopology,
    dice: D,
    state: GameState,
}

impl GameSession<RandomDice> {
    /// A session on the canonical board with a fair die.
    #[instrument]
    pub fn new() -> Self {
        Self::with_dice(RandomDice::new())
    }

    /// A session whose dice sequence is reproducible.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_dice(RandomDice::seeded(seed))
    }
}

impl Default for GameSession<RandomDice> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DiceSource> GameSession<D> {
    /// A session on the canonical board rolling `dice`.
    pub fn with_dice(dice: D) -> Self {
        Self::with_topology(BoardTopology::canonical(), dice)
    }

    /// A session on a custom board.
    pub fn with_topology(topology: BoardTopology, dice: D) -> Self {
        info!("Creating new game session");
        Self {
            topology,
            dice,
            state: GameState::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board in play.
    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    /// Read-only copy of the state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    /// Dispatches any intent.
    pub fn request(&mut self, intent: Intent) -> Result<GameSnapshot, SessionError> {
        match intent {
            Intent::Roll => self.request_roll(),
            Intent::Continue => self.request_continue(),
            Intent::Restart => self.request_restart(),
        }
    }

    /// Rolls for the current player and resolves the move.
    ///
    /// # Errors
    ///
    /// [`SessionError::IllegalIntent`] if the turn is already resolved or the
    /// game is over; [`SessionError::InvalidRoll`] if the dice misbehave.
    /// Neither changes the state.
    #[instrument(skip(self), fields(player = %self.state.current_player, turn = self.state.turn))]
    pub fn request_roll(&mut self) -> Result<GameSnapshot, SessionError> {
        RollContract::pre(&self.state)?;

        let roll = Roll::new(self.dice.roll()).inspect_err(|e| {
            warn!(error = %e, "Dice source misbehaved");
        })?;

        let player = self.state.current_player;
        let from = self.state.positions.of(player);
        let outcome = engine::apply_roll(from, roll, &self.topology);
        let report = TurnReport::new(player, roll, from, outcome);
        let mut next = self.state.clone();
        next.commit_roll(report);

        debug!(%roll, %from, to = %report.to(), ?outcome, "Roll resolved");
        if let Some(winner) = next.winner() {
            info!(%winner, turns = next.turn, "Game over");
        }

        self.commit::<RollContract>(next)
    }

    /// Passes control to the other player.
    ///
    /// # Errors
    ///
    /// [`SessionError::IllegalIntent`] before the roll or after the game ends.
    #[instrument(skip(self), fields(player = %self.state.current_player, turn = self.state.turn))]
    pub fn request_continue(&mut self) -> Result<GameSnapshot, SessionError> {
        ContinueContract::pre(&self.state)?;

        let mut next = self.state.clone();
        next.pass_turn();
        debug!(next = %next.current_player, "Turn passed");

        self.commit::<ContinueContract>(next)
    }

    /// Starts a fresh game once someone has won.
    ///
    /// # Errors
    ///
    /// [`SessionError::IllegalIntent`] while the game is still running.
    #[instrument(skip(self))]
    pub fn request_restart(&mut self) -> Result<GameSnapshot, SessionError> {
        RestartContract::pre(&self.state)?;

        info!("Game restarted");
        self.commit::<RestartContract>(GameState::new())
    }

    /// Replaces the state with `next` once its postconditions hold.
    ///
    /// Postconditions are checked in debug builds only. On failure the
    /// current state is kept.
    fn commit<C: Contract<GameState>>(
        &mut self,
        next: GameState,
    ) -> Result<GameSnapshot, SessionError> {
        #[cfg(debug_assertions)]
        C::post(&self.state, &next).inspect_err(|e| {
            warn!(error = %e, intent = %C::INTENT, "Postcondition failed, state kept");
        })?;

        self.state = next;
        Ok(self.snapshot())
    }

    /// Plays both seats automatically until someone wins or `max_turns`
    /// turns have been played.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError::InvalidRoll`] from the dice.
    #[instrument(skip(self))]
    pub fn play_out(&mut self, max_turns: u32) -> Result<GameSummary, SessionError> {
        loop {
            match self.state.phase() {
                TurnPhase::GameOver => {
                    return Ok(GameSummary::new(self.state.winner(), self.state.turn));
                }
                TurnPhase::AwaitingRoll => {
                    self.request_roll()?;
                }
                TurnPhase::RollApplied if self.state.turn >= max_turns => {
                    debug!(max_turns, "Turn limit reached");
                    return Ok(GameSummary::new(None, self.state.turn));
                }
                TurnPhase::RollApplied => {
                    self.request_continue()?;
                }
            }
        }
    }
}
