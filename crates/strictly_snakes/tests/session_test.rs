//! Tests for intent sequencing on a game session.

use strictly_snakes::{
    BoardTopology, GameSession, GameSnapshot, Intent, Player, Rejection, ScriptedDice,
    SessionError, Square, TurnPhase,
};

fn sq(n: u8) -> Square {
    Square::new(n).expect("square in range")
}

const NO_SNAKES: [(u8, u8); 0] = [];

/// Human climbs 4, 20, 21, 48, 51, 71, 96 and lands on 100 with the
/// fifteenth roll. The computer rolls 1 every turn and never gets far.
const HUMAN_WINS: [u8; 15] = [3, 1, 6, 1, 1, 1, 6, 1, 3, 1, 4, 1, 5, 1, 4];

/// Rolls and continues until the script is spent or the game ends.
fn play(session: &mut GameSession<ScriptedDice>, rolls: usize) {
    for _ in 0..rolls {
        session.request_roll().expect("roll accepted");
        if session.state().game_over() {
            return;
        }
        session.request_continue().expect("continue accepted");
    }
}

#[test]
fn test_fresh_session() {
    let session = GameSession::with_dice(ScriptedDice::new([1]));
    let snap = session.snapshot();
    assert_eq!(snap.positions.human, Square::START);
    assert_eq!(snap.positions.computer, Square::START);
    assert_eq!(snap.current_player, Player::Human);
    assert!(!snap.turn_completed);
    assert!(!snap.game_over);
    assert!(snap.log.is_empty());
    assert_eq!(session.state().phase(), TurnPhase::AwaitingRoll);
}

#[test]
fn test_first_roll_onto_ladder() {
    let mut session = GameSession::with_dice(ScriptedDice::new([3]));
    let snap = session.request_roll().expect("roll accepted");
    assert_eq!(snap.positions.human, sq(14));
    assert!(snap.turn_completed);
    assert_eq!(session.state().phase(), TurnPhase::RollApplied);
}

#[test]
fn test_second_human_roll_plain() {
    let mut session = GameSession::with_dice(ScriptedDice::new([3, 2, 6]));
    play(&mut session, 2);
    let snap = session.request_roll().expect("roll accepted");
    assert_eq!(snap.positions.human, sq(20));
    assert_eq!(snap.log, vec!["You rolled a 6!".to_string()]);
}

#[test]
fn test_roll_twice_is_rejected() {
    let mut session = GameSession::with_dice(ScriptedDice::new([2, 5]));
    session.request_roll().expect("roll accepted");
    let before = session.snapshot();

    let err = session.request_roll().unwrap_err();
    assert_eq!(
        err,
        SessionError::IllegalIntent {
            intent: Intent::Roll,
            reason: Rejection::TurnAlreadyResolved,
        }
    );
    assert!(err.is_ignorable());
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.snapshot().positions.human, sq(3));
}

#[test]
fn test_continue_toggles_exactly_once() {
    let mut session = GameSession::with_dice(ScriptedDice::new([2]));
    for expected in [Player::Computer, Player::Human, Player::Computer] {
        session.request_roll().expect("roll accepted");
        let snap = session.request_continue().expect("continue accepted");
        assert_eq!(snap.current_player, expected);
        assert!(!snap.turn_completed);
        assert!(snap.log.is_empty());
    }
}

#[test]
fn test_continue_before_roll_rejected() {
    let mut session = GameSession::with_dice(ScriptedDice::new([2]));
    assert!(matches!(
        session.request(Intent::Continue),
        Err(SessionError::IllegalIntent {
            reason: Rejection::TurnNotResolved,
            ..
        })
    ));
    assert_eq!(session.snapshot().current_player, Player::Human);
}

#[test]
fn test_human_wins_and_locks_out_rolls() {
    let mut session = GameSession::with_dice(ScriptedDice::new(HUMAN_WINS));
    play(&mut session, HUMAN_WINS.len());

    let snap = session.snapshot();
    assert!(snap.game_over);
    assert_eq!(snap.winner(), Some(Player::Human));
    assert_eq!(snap.positions.human, Square::FINAL);
    assert_eq!(snap.log.last().map(String::as_str), Some("You win!"));
    assert_eq!(session.state().phase(), TurnPhase::GameOver);

    for intent in [Intent::Roll, Intent::Continue] {
        assert_eq!(
            session.request(intent),
            Err(SessionError::IllegalIntent {
                intent,
                reason: Rejection::GameOver,
            })
        );
    }
    assert_eq!(session.snapshot(), snap);
}

#[test]
fn test_ladder_to_final_is_a_win() {
    // Human: 4->14, 20, 21->42, 48, 51->67, 73, 77, then 3 lands on the 80 ladder.
    let script = [3, 1, 6, 1, 1, 1, 6, 1, 3, 1, 6, 1, 4, 1, 3];
    let mut session = GameSession::with_dice(ScriptedDice::new(script));
    play(&mut session, script.len());

    let snap = session.snapshot();
    assert!(snap.game_over);
    assert_eq!(snap.positions.human, Square::FINAL);
    assert_eq!(
        snap.log,
        vec![
            "You rolled a 3!".to_string(),
            "Ladder! Climb up!".to_string(),
            "Moving from 80 to 100...".to_string(),
            "You win!".to_string(),
        ]
    );
}

#[test]
fn test_restart_only_after_game_over() {
    let mut session = GameSession::with_dice(ScriptedDice::new(HUMAN_WINS));
    assert!(matches!(
        session.request_restart(),
        Err(SessionError::IllegalIntent {
            reason: Rejection::GameInProgress,
            ..
        })
    ));

    play(&mut session, HUMAN_WINS.len());
    let snap = session.request_restart().expect("restart accepted");
    assert_eq!(snap.positions.human, Square::START);
    assert_eq!(snap.positions.computer, Square::START);
    assert_eq!(snap.current_player, Player::Human);
    assert!(!snap.turn_completed);
    assert!(!snap.game_over);
    assert!(snap.log.is_empty());
    assert_eq!(snap.turn, 1);
}

#[test]
fn test_overshoot_narration() {
    // One ladder from 3 to 99 puts the human next to the finish.
    let board = BoardTopology::try_new(NO_SNAKES, [(3, 99)]).expect("valid board");
    let mut session = GameSession::with_topology(board, ScriptedDice::new([2, 1, 5]));
    play(&mut session, 2);
    let snap = session.request_roll().expect("roll accepted");
    assert_eq!(snap.positions.human, sq(99));
    assert_eq!(
        snap.log,
        vec![
            "You rolled a 5!".to_string(),
            "Overshot! Need 1 more.".to_string(),
        ]
    );
    assert!(!snap.game_over);
}

#[test]
fn test_session_does_not_chain_transitions() {
    let board = BoardTopology::try_new([(12, 2)], [(5, 12)]).expect("valid board");
    let mut session = GameSession::with_topology(board, ScriptedDice::new([4]));
    let snap = session.request_roll().expect("roll accepted");
    assert_eq!(snap.positions.human, sq(12));
}

#[test]
fn test_invalid_roll_is_fatal_to_the_roll_only() {
    let mut session = GameSession::with_dice(ScriptedDice::new([0, 4]));
    assert_eq!(
        session.request_roll(),
        Err(SessionError::InvalidRoll { value: 0 })
    );
    assert!(!session.snapshot().turn_completed);

    let snap = session.request_roll().expect("second roll is valid");
    assert_eq!(snap.positions.human, sq(5));
}

#[test]
fn test_snapshot_serializes_plain_numbers() {
    let mut session = GameSession::with_dice(ScriptedDice::new([3]));
    let snap = session.request_roll().expect("roll accepted");
    let json = serde_json::to_value(&snap).expect("serializable");
    assert_eq!(json["positions"]["human"], 14);
    assert_eq!(json["current_player"], "Human");
    assert_eq!(json["turn_completed"], true);
}

#[test]
fn test_human_snake_narration() {
    // Human 1->4->14, computer 1, human 2 lands on the 16 snake.
    let mut session = GameSession::with_dice(ScriptedDice::new([3, 1, 2]));
    play(&mut session, 2);
    let snap = session.request_roll().expect("roll accepted");
    assert_eq!(snap.positions.human, sq(6));
    assert_eq!(
        snap.log,
        vec![
            "You rolled a 2!".to_string(),
            "Snake! Slide down!".to_string(),
            "Moving from 16 to 6...".to_string(),
        ]
    );
}

#[test]
fn test_computer_ladder_narration() {
    let mut session = GameSession::with_dice(ScriptedDice::new([1, 3]));
    play(&mut session, 1);
    let snap = session.request_roll().expect("roll accepted");
    assert_eq!(snap.current_player, Player::Computer);
    assert_eq!(snap.positions.computer, sq(14));
    assert_eq!(
        snap.log,
        vec![
            "Computer rolled a 3!".to_string(),
            "Computer climbs a ladder!".to_string(),
            "Computer moving from 4 to 14...".to_string(),
        ]
    );
}

#[test]
fn test_computer_snake_narration() {
    // Human 2, computer 1->4->14, human 3, computer 2 lands on the 16 snake.
    let mut session = GameSession::with_dice(ScriptedDice::new([1, 3, 1, 2]));
    play(&mut session, 3);
    let snap = session.request_roll().expect("roll accepted");
    assert_eq!(snap.current_player, Player::Computer);
    assert_eq!(snap.positions.computer, sq(6));
    assert_eq!(
        snap.log,
        vec![
            "Computer rolled a 2!".to_string(),
            "Computer slides down a snake!".to_string(),
            "Computer moving from 16 to 6...".to_string(),
        ]
    );
}

#[test]
fn test_snapshot_rejects_impossible_roll() {
    let mut session = GameSession::with_dice(ScriptedDice::new([2]));
    let snap = session.request_roll().expect("roll accepted");
    let mut json = serde_json::to_value(&snap).expect("serializable");
    assert_eq!(json["last_turn"]["roll"], 2);
    assert!(serde_json::from_value::<GameSnapshot>(json.clone()).is_ok());

    json["last_turn"]["roll"] = 0.into();
    assert!(serde_json::from_value::<GameSnapshot>(json).is_err());
}
