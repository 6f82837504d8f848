//! Square-by-square travel path for animating a snake or ladder.

use crate::Square;

/// Lazy, finite sequence of squares from `start` to `end` inclusive.
///
/// Steps by one square toward `end`. A path whose ends coincide is empty: it
/// is a null move and yields nothing. Cloning or calling [`restart`]
/// replays the sequence from the beginning.
///
/// [`restart`]: SquarePath::restart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquarePath {
    start: u8,
    end: u8,
    emitted: u8,
}

impl SquarePath {
    /// Path from `start` to `end`.
    pub fn new(start: Square, end: Square) -> Self {
        Self {
            start: start.get(),
            end: end.get(),
            emitted: 0,
        }
    }

    /// A path with nothing to show.
    pub fn empty() -> Self {
        Self::new(Square::START, Square::START)
    }

    /// First square of the path.
    pub fn start(&self) -> u8 {
        self.start
    }

    /// Last square of the path.
    pub fn end(&self) -> u8 {
        self.end
    }

    /// Whether no squares remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewinds to the first square.
    pub fn restart(&mut self) {
        self.emitted = 0;
    }

    fn total(&self) -> u8 {
        if self.start == self.end {
            0
        } else {
            self.start.abs_diff(self.end) + 1
        }
    }
}

impl Iterator for SquarePath {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.emitted >= self.total() {
            return None;
        }
        let value = if self.end > self.start {
            self.start + self.emitted
        } else {
            self.start - self.emitted
        };
        self.emitted += 1;
        Square::new(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::from(self.total() - self.emitted);
        (left, Some(left))
    }
}

impl ExactSizeIterator for SquarePath {}

impl std::iter::FusedIterator for SquarePath {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    fn numbers(path: SquarePath) -> Vec<u8> {
        path.map(Square::get).collect()
    }

    #[test]
    fn climbs_inclusive() {
        assert_eq!(numbers(SquarePath::new(sq(4), sq(8))), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn slides_inclusive() {
        assert_eq!(numbers(SquarePath::new(sq(16), sq(13))), vec![16, 15, 14, 13]);
    }

    #[test]
    fn null_move_is_empty() {
        let path = SquarePath::new(sq(50), sq(50));
        assert_eq!(path.len(), 0);
        assert!(numbers(path).is_empty());
    }

    #[test]
    fn restart_replays() {
        let mut path = SquarePath::new(sq(1), sq(3));
        assert_eq!(path.next(), Some(sq(1)));
        assert_eq!(path.len(), 2);
        path.restart();
        assert_eq!(numbers(path), vec![1, 2, 3]);
    }
}
