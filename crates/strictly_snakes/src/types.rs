//! Core domain types for snakes and ladders.

use crate::BoardError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A square on the 100-square board (1-100).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: u8 = 100;

    /// Square both players start on.
    pub const START: Self = Self(1);

    /// Terminal square. Reaching it exactly wins the game.
    pub const FINAL: Self = Self(Self::COUNT);

    /// Creates a square, returning `None` outside 1-100.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Builds a square from a literal known to be in range.
    pub(crate) const fn from_raw(value: u8) -> Self {
        Self(value)
    }

    /// Returns the square number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether this is square 100.
    pub const fn is_final(self) -> bool {
        self.0 == Self::COUNT
    }

    /// Pips still needed to land exactly on square 100.
    pub const fn distance_to_final(self) -> u8 {
        Self::COUNT - self.0
    }

    /// Iterates every square from 1 to 100.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> {
        (1..=Self::COUNT).map(Self)
    }
}

impl TryFrom<u8> for Square {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(BoardError::SquareOutOfRange { value })
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

/// One of the two seats at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Player {
    /// The person at the keyboard. Always moves first.
    Human,
    /// The automated opponent.
    Computer,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// What happened after the token reached its candidate square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Transition {
    /// Plain square, no jump.
    None,
    /// Landed on a snake head and slid to its tail.
    Snake,
    /// Landed on a ladder bottom and climbed to its top.
    Ladder,
}

/// Board positions of both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positions {
    /// Square occupied by the human.
    pub human: Square,
    /// Square occupied by the computer.
    pub computer: Square,
}

impl Positions {
    /// Both tokens on square 1.
    pub fn start() -> Self {
        Self {
            human: Square::START,
            computer: Square::START,
        }
    }

    /// Returns the square of the given player.
    pub fn of(&self, player: Player) -> Square {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    pub(crate) fn set(&mut self, player: Player, square: Square) {
        match player {
            Player::Human => self.human = square,
            Player::Computer => self.computer = square,
        }
    }

    /// Players standing on the given square.
    pub fn occupants(&self, square: Square) -> impl Iterator<Item = Player> + '_ {
        [Player::Human, Player::Computer]
            .into_iter()
            .filter(move |p| self.of(*p) == square)
    }
}

impl Default for Positions {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_bounds() {
        assert_eq!(Square::new(0), None);
        assert_eq!(Square::new(1), Some(Square::START));
        assert_eq!(Square::new(100), Some(Square::FINAL));
        assert_eq!(Square::new(101), None);
        assert_eq!(Square::all().count(), 100);
    }

    #[test]
    fn try_from_reports_value() {
        assert_eq!(
            Square::try_from(150),
            Err(BoardError::SquareOutOfRange { value: 150 })
        );
    }

    #[test]
    fn opponent_toggles() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent().opponent(), Player::Computer);
    }

    #[test]
    fn occupants_lists_shared_square() {
        let positions = Positions::start();
        let on_start: Vec<_> = positions.occupants(Square::START).collect();
        assert_eq!(on_start, vec![Player::Human, Player::Computer]);
        assert_eq!(positions.occupants(Square::FINAL).count(), 0);
    }
}
