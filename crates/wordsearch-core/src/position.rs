//! Grid cell coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell position in a letter grid.
///
/// `x` is the column (growing to the right) and `y` is the row (growing
/// downward). Positions are not tied to a particular grid size; bounds are
/// checked by [`LetterGrid`](crate::LetterGrid).
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Direction::DownRight), Some(Position::new(3, 4)));
/// assert_eq!(Position::new(0, 0).step(Direction::Up), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the neighboring position one step in `direction`.
    ///
    /// Returns `None` if the step would leave the non-negative quadrant.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.offset(direction, 1)
    }

    /// Returns the position `distance` steps away in `direction`.
    ///
    /// Returns `None` if the result would have a negative coordinate.
    #[must_use]
    pub fn offset(self, direction: Direction, distance: usize) -> Option<Self> {
        let distance = isize::try_from(distance).ok()?;
        let dx = isize::from(direction.dx()).checked_mul(distance)?;
        let dy = isize::from(direction.dy()).checked_mul(distance)?;
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_in_all_directions() {
        let center = Position::new(1, 1);
        assert_eq!(center.step(Direction::Up), Some(Position::new(1, 0)));
        assert_eq!(center.step(Direction::Down), Some(Position::new(1, 2)));
        assert_eq!(center.step(Direction::Left), Some(Position::new(0, 1)));
        assert_eq!(center.step(Direction::Right), Some(Position::new(2, 1)));
        assert_eq!(center.step(Direction::UpLeft), Some(Position::new(0, 0)));
        assert_eq!(center.step(Direction::UpRight), Some(Position::new(2, 0)));
        assert_eq!(center.step(Direction::DownLeft), Some(Position::new(0, 2)));
        assert_eq!(center.step(Direction::DownRight), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_offset_rejects_negative_coordinates() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.offset(Direction::Left, 1), None);
        assert_eq!(origin.offset(Direction::Up, 1), None);
        assert_eq!(origin.offset(Direction::Left, 0), Some(origin));
        assert_eq!(
            Position::new(3, 0).offset(Direction::DownLeft, 3),
            Some(Position::new(0, 3))
        );
        assert_eq!(Position::new(3, 0).offset(Direction::DownLeft, 4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 7).to_string(), "(4, 7)");
    }
}
