//! Application state and logic.

use crate::orchestrator::GameEvent;
use std::time::{Duration, Instant};
use strictly_snakes::{GameSnapshot, GameState, Player as Seat, Square, SquarePath};
use tracing::debug;

/// A token walking a snake or ladder one square at a time.
#[derive(Debug, Clone)]
struct Animation {
    seat: Seat,
    path: SquarePath,
    at: Square,
    last_step: Instant,
}

/// Main application state.
///
/// Holds the latest snapshot from the orchestrator plus purely visual state.
/// Nothing here feeds back into the game.
pub struct App {
    player_name: String,
    snapshot: GameSnapshot,
    step: Duration,
    animation: Option<Animation>,
    thinking: bool,
    error: Option<String>,
}

impl App {
    /// Creates a new application that animates slides at `step` per square.
    pub fn new(player_name: impl Into<String>, step: Duration) -> Self {
        Self {
            player_name: player_name.into(),
            snapshot: GameSnapshot::from(&GameState::new()),
            step,
            animation: None,
            thinking: false,
            error: None,
        }
    }

    /// The latest snapshot.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Display name for a seat.
    pub fn seat_name(&self, seat: Seat) -> String {
        match seat {
            Seat::Human => self.player_name.clone(),
            Seat::Computer => seat.to_string(),
        }
    }

    /// Where to draw `seat`'s token right now.
    pub fn displayed_position(&self, seat: Seat) -> Square {
        match &self.animation {
            Some(animation) if animation.seat == seat => animation.at,
            _ => self.snapshot.positions.of(seat),
        }
    }

    /// Whether a slide is still playing.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent, now: Instant) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Updated(snapshot) => {
                self.thinking = false;
                self.error = None;
                if snapshot.last_turn != self.snapshot.last_turn {
                    self.animation = snapshot.last_turn.and_then(|report| {
                        Self::start_animation(report.player, report.outcome.slide(), now)
                    });
                }
                if snapshot.last_turn.is_none() {
                    self.animation = None;
                }
                self.snapshot = snapshot;
            }
            GameEvent::ComputerThinking => {
                self.thinking = true;
            }
            GameEvent::Failed(message) => {
                self.error = Some(message);
            }
        }
    }

    fn start_animation(seat: Seat, mut path: SquarePath, now: Instant) -> Option<Animation> {
        let at = path.next()?;
        debug!(%seat, from = path.start(), to = path.end(), "Animating slide");
        Some(Animation {
            seat,
            path,
            at,
            last_step: now,
        })
    }

    /// Advances the slide animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = &mut self.animation else {
            return;
        };
        while now.duration_since(animation.last_step) >= self.step {
            match animation.path.next() {
                Some(square) => {
                    animation.at = square;
                    animation.last_step += self.step;
                }
                None => {
                    self.animation = None;
                    return;
                }
            }
        }
    }

    /// One-line prompt describing what happens next.
    pub fn status_message(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {}", error);
        }

        let snap = &self.snapshot;
        if let Some(winner) = snap.winner() {
            return format!(
                "{} wins! Press N for a new game or Q to quit.",
                self.seat_name(winner)
            );
        }

        let current = self.seat_name(snap.current_player);
        if snap.turn_completed {
            let next = self.seat_name(snap.current_player.opponent());
            return format!("Press C to continue to {}'s turn.", next);
        }

        match snap.current_player {
            Seat::Human => format!("{}'s turn. Press R to roll.", current),
            Seat::Computer if self.thinking => format!("{}'s turn... thinking", current),
            Seat::Computer => format!("{}'s turn.", current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_snakes::{GameSession, ScriptedDice};

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    fn app() -> App {
        App::new("Ada", Duration::from_millis(50))
    }

    #[test]
    fn fresh_app_prompts_for_roll() {
        let app = app();
        assert_eq!(app.status_message(), "Ada's turn. Press R to roll.");
        assert_eq!(app.displayed_position(Seat::Human), Square::START);
    }

    #[test]
    fn ladder_animates_square_by_square() {
        let mut app = app();
        let mut session = GameSession::with_dice(ScriptedDice::new([3]));
        let start = Instant::now();
        app.handle_event(GameEvent::Updated(session.request_roll().unwrap()), start);

        assert!(app.is_animating());
        assert_eq!(app.displayed_position(Seat::Human), sq(4));
        assert_eq!(app.displayed_position(Seat::Computer), Square::START);

        app.tick(start + Duration::from_millis(120));
        assert_eq!(app.displayed_position(Seat::Human), sq(6));

        app.tick(start + Duration::from_secs(5));
        assert!(!app.is_animating());
        assert_eq!(app.displayed_position(Seat::Human), sq(14));
        assert_eq!(app.status_message(), "Press C to continue to Computer's turn.");
    }

    #[test]
    fn plain_move_does_not_animate() {
        let mut app = app();
        let mut session = GameSession::with_dice(ScriptedDice::new([2]));
        app.handle_event(GameEvent::Updated(session.request_roll().unwrap()), Instant::now());
        assert!(!app.is_animating());
        assert_eq!(app.displayed_position(Seat::Human), sq(3));
    }

    #[test]
    fn thinking_then_result() {
        let mut app = app();
        let mut session = GameSession::with_dice(ScriptedDice::new([2]));
        let now = Instant::now();
        session.request_roll().unwrap();
        app.handle_event(GameEvent::Updated(session.request_continue().unwrap()), now);
        app.handle_event(GameEvent::ComputerThinking, now);
        assert_eq!(app.status_message(), "Computer's turn... thinking");

        app.handle_event(GameEvent::Updated(session.request_roll().unwrap()), now);
        assert_eq!(app.status_message(), "Press C to continue to Ada's turn.");
    }

    #[test]
    fn failure_is_shown_until_next_update() {
        let mut app = app();
        let now = Instant::now();
        app.handle_event(GameEvent::Failed("Dice produced 9, expected 1-6".into()), now);
        assert!(app.status_message().starts_with("Error: Dice produced 9"));

        let session = GameSession::with_dice(ScriptedDice::new([1]));
        app.handle_event(GameEvent::Updated(session.snapshot()), now);
        assert_eq!(app.status_message(), "Ada's turn. Press R to roll.");
    }
}
