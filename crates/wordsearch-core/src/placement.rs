//! Word placements.

use std::fmt::{self, Display};

use crate::{Direction, Position, Word};

/// Where a word sits in a grid: a start cell plus a direction.
///
/// Combined with a word length, a placement determines every occupied cell:
/// cell `i` is at `start + i * direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The cell holding the first letter.
    pub start: Position,
    /// The direction the word reads in.
    pub direction: Direction,
}

impl Placement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(start: Position, direction: Direction) -> Self {
        Self { start, direction }
    }

    /// Returns the cell holding the last letter of a word of `len` letters.
    ///
    /// Returns `None` for `len == 0` or when the end would have a negative
    /// coordinate.
    #[must_use]
    pub fn end(self, len: usize) -> Option<Position> {
        self.start.offset(self.direction, len.checked_sub(1)?)
    }

    /// Iterates the cells covered by a word of `len` letters, in reading order.
    ///
    /// Iteration stops early at the first cell with a negative coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, Placement, Position};
    ///
    /// let placement = Placement::new(Position::new(3, 1), Direction::Left);
    /// let cells: Vec<_> = placement.cells(3).collect();
    /// assert_eq!(
    ///     cells,
    ///     [Position::new(3, 1), Position::new(2, 1), Position::new(1, 1)]
    /// );
    /// ```
    pub fn cells(self, len: usize) -> impl Iterator<Item = Position> {
        (0..len).map_while(move |i| self.start.offset(self.direction, i))
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.direction)
    }
}

/// A word together with its placement: one entry of a puzzle's answer key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedWord {
    /// The hidden word.
    pub word: Word,
    /// Where the word's first letter sits and which way it reads.
    pub placement: Placement,
}

impl PlacedWord {
    /// Creates a placed word.
    #[must_use]
    pub fn new(word: Word, placement: Placement) -> Self {
        Self { word, placement }
    }

    /// Returns the cell holding the last letter.
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        self.placement.end(self.word.len())
    }

    /// Iterates the cells covered by the word, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        self.placement.cells(self.word.len())
    }
}

impl Display for PlacedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.word, self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_and_cells() {
        let placement = Placement::new(Position::new(0, 0), Direction::DownRight);
        assert_eq!(placement.end(1), Some(Position::new(0, 0)));
        assert_eq!(placement.end(4), Some(Position::new(3, 3)));
        assert_eq!(placement.end(0), None);
        assert_eq!(placement.cells(0).count(), 0);
        assert_eq!(placement.cells(4).last(), Some(Position::new(3, 3)));
    }

    #[test]
    fn test_cells_stop_at_negative_coordinates() {
        let placement = Placement::new(Position::new(1, 0), Direction::Left);
        assert_eq!(placement.cells(5).count(), 2);
        assert_eq!(placement.end(3), None);
    }

    #[test]
    fn test_display() {
        let placement = Placement::new(Position::new(0, 1), Direction::Right);
        assert_eq!(placement.to_string(), "(0, 1) Right");
    }

    #[test]
    fn test_placed_word() {
        let placed = PlacedWord::new(
            "MOON".parse().unwrap(),
            Placement::new(Position::new(3, 1), Direction::Left),
        );
        assert_eq!(placed.end(), Some(Position::new(0, 1)));
        assert_eq!(placed.cells().count(), 4);
        assert_eq!(placed.to_string(), "MOON at (3, 1) Left");
    }
}
