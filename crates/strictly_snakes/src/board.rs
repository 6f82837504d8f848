//! Board topology: where the snakes and ladders are.
//!
//! The topology is immutable once built. [`BoardTopology::canonical`] is the
//! fixed board the game ships with; [`BoardTopology::try_new`] validates any
//! other arrangement.

use crate::{BoardError, Square, Transition};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Squares per row of the printed board.
pub const ROW_WIDTH: u8 = 10;

/// Snake heads and their tails on the canonical board.
pub const SNAKES: [(Square, Square); 10] = [
    (Square::from_raw(16), Square::from_raw(6)),
    (Square::from_raw(47), Square::from_raw(26)),
    (Square::from_raw(49), Square::from_raw(11)),
    (Square::from_raw(56), Square::from_raw(53)),
    (Square::from_raw(62), Square::from_raw(19)),
    (Square::from_raw(64), Square::from_raw(60)),
    (Square::from_raw(87), Square::from_raw(24)),
    (Square::from_raw(93), Square::from_raw(73)),
    (Square::from_raw(95), Square::from_raw(75)),
    (Square::from_raw(98), Square::from_raw(78)),
];

/// Ladder bottoms and their tops on the canonical board.
pub const LADDERS: [(Square, Square); 9] = [
    (Square::from_raw(1), Square::from_raw(38)),
    (Square::from_raw(4), Square::from_raw(14)),
    (Square::from_raw(9), Square::from_raw(31)),
    (Square::from_raw(21), Square::from_raw(42)),
    (Square::from_raw(28), Square::from_raw(84)),
    (Square::from_raw(36), Square::from_raw(44)),
    (Square::from_raw(51), Square::from_raw(67)),
    (Square::from_raw(71), Square::from_raw(91)),
    (Square::from_raw(80), Square::from_raw(100)),
];

/// Static mapping of special squares on the 100-square board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTopology {
    snakes: BTreeMap<Square, Square>,
    ladders: BTreeMap<Square, Square>,
}

impl BoardTopology {
    /// The board the game is played on.
    pub fn canonical() -> Self {
        Self {
            snakes: SNAKES.into_iter().collect(),
            ladders: LADDERS.into_iter().collect(),
        }
    }

    /// Builds and validates a custom topology from raw square numbers.
    ///
    /// # Errors
    ///
    /// Rejects off-board squares, snakes that do not descend, ladders that do
    /// not ascend, a source square used twice, and jumps starting on 100.
    #[instrument(skip(snakes, ladders))]
    pub fn try_new(
        snakes: impl IntoIterator<Item = (u8, u8)>,
        ladders: impl IntoIterator<Item = (u8, u8)>,
    ) -> Result<Self, BoardError> {
        let mut board = Self {
            snakes: BTreeMap::new(),
            ladders: BTreeMap::new(),
        };

        for (head, tail) in snakes {
            let (head, tail) = (Square::try_from(head)?, Square::try_from(tail)?);
            if tail >= head {
                return Err(BoardError::SnakeNotDescending { head, tail });
            }
            board.check_source(head)?;
            board.snakes.insert(head, tail);
        }

        for (bottom, top) in ladders {
            let (bottom, top) = (Square::try_from(bottom)?, Square::try_from(top)?);
            if top <= bottom {
                return Err(BoardError::LadderNotAscending { bottom, top });
            }
            board.check_source(bottom)?;
            board.ladders.insert(bottom, top);
        }

        debug!(
            snakes = board.snakes.len(),
            ladders = board.ladders.len(),
            "Built custom board"
        );
        Ok(board)
    }

    fn check_source(&self, square: Square) -> Result<(), BoardError> {
        if square.is_final() {
            return Err(BoardError::TerminalSource { square });
        }
        if self.snakes.contains_key(&square) || self.ladders.contains_key(&square) {
            return Err(BoardError::SquareReused { square });
        }
        Ok(())
    }

    /// Where a token landing on `square` ends up. Identity for plain squares.
    pub fn resolve(&self, square: Square) -> Square {
        self.jump_from(square).map_or(square, |(_, to)| to)
    }

    /// The jump starting on `square`, if any.
    pub fn jump_from(&self, square: Square) -> Option<(Transition, Square)> {
        if let Some(tail) = self.snakes.get(&square) {
            Some((Transition::Snake, *tail))
        } else {
            self.ladders
                .get(&square)
                .map(|top| (Transition::Ladder, *top))
        }
    }

    /// Classifies a square for rendering.
    pub fn kind(&self, square: Square) -> Transition {
        self.jump_from(square)
            .map_or(Transition::None, |(transition, _)| transition)
    }

    /// Snake heads mapped to tails, ordered by head.
    pub fn snakes(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.snakes.iter().map(|(h, t)| (*h, *t))
    }

    /// Ladder bottoms mapped to tops, ordered by bottom.
    pub fn ladders(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.ladders.iter().map(|(b, t)| (*b, *t))
    }

    /// The board rows as printed, top row first.
    ///
    /// Rows alternate direction: row ten reads 91 to 100 left to right, row
    /// nine reads 90 down to 81, and so on down to 10..1.
    pub fn layout_rows() -> Vec<Vec<Square>> {
        (1..=ROW_WIDTH)
            .rev()
            .map(|row| {
                let first = (row - 1) * ROW_WIDTH + 1;
                let squares = (first..first + ROW_WIDTH).map(Square::from_raw);
                if row % 2 == 0 {
                    squares.collect()
                } else {
                    squares.rev().collect()
                }
            })
            .collect()
    }
}

impl Default for BoardTopology {
    fn default() -> Self {
        Self::canonical()
    }
}
