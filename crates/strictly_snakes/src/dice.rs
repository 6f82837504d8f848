//! Dice: the only source of nondeterminism in the game.

use crate::SessionError;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A validated die face (1-6).
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
pub struct Roll(u8);

impl Roll {
    /// Lowest face.
    pub const MIN: u8 = 1;
    /// Highest face.
    pub const MAX: u8 = 6;

    /// Validates a raw die value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidRoll`] outside 1-6.
    pub fn new(value: u8) -> Result<Self, SessionError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SessionError::InvalidRoll { value })
        }
    }

    /// Returns the face value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Roll {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

/// Something that can be rolled.
///
/// Implementations must return values in 1-6. Anything else is rejected by
/// the session as [`SessionError::InvalidRoll`] without touching the game.
pub trait DiceSource {
    /// Rolls once.
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// A fair six-sided die.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Seeds from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> u8 {
        let value = self.rng.random_range(Roll::MIN..=Roll::MAX);
        trace!(value, "Rolled die");
        value
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// An empty script yields 0 on every roll, which the session rejects.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Creates a die that returns `script` in order, then repeats.
    pub fn new(script: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }
}
