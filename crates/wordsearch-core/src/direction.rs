//! Straight-line directions and line validity.

use std::fmt::{self, Display};

use crate::Position;

/// One of the 8 straight-line directions a word can run in.
///
/// Each direction is a unit step `(dx, dy)` with components in `{-1, 0, 1}`,
/// not both zero. Rows grow downward, so [`Direction::Down`] is `(0, 1)`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Position};
///
/// assert_eq!(Direction::from_delta(1, -1), Some(Direction::UpRight));
/// assert_eq!(Direction::from_delta(0, 0), None);
///
/// let dir = Direction::between(Position::new(3, 1), Position::new(0, 1));
/// assert_eq!(dir, Some(Direction::Left));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, -1)`.
    Up,
    /// `(0, 1)`.
    Down,
    /// `(-1, 0)`.
    Left,
    /// `(1, 0)`.
    Right,
    /// `(-1, -1)`.
    UpLeft,
    /// `(1, -1)`.
    UpRight,
    /// `(-1, 1)`.
    DownLeft,
    /// `(1, 1)`.
    DownRight,
}

impl Direction {
    /// All directions, in the order used when searching a grid for a word.
    pub const ALL: [Self; 8] = [
        Self::Down,
        Self::Right,
        Self::DownRight,
        Self::Left,
        Self::Up,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
    ];

    /// Creates a direction from a unit step.
    ///
    /// Returns `None` for `(0, 0)` or any component outside `{-1, 0, 1}`.
    #[must_use]
    pub const fn from_delta(dx: i64, dy: i64) -> Option<Self> {
        let dir = match (dx, dy) {
            (0, -1) => Self::Up,
            (0, 1) => Self::Down,
            (-1, 0) => Self::Left,
            (1, 0) => Self::Right,
            (-1, -1) => Self::UpLeft,
            (1, -1) => Self::UpRight,
            (-1, 1) => Self::DownLeft,
            (1, 1) => Self::DownRight,
            _ => return None,
        };
        Some(dir)
    }

    /// Returns the direction of the straight line from `from` to `to`.
    ///
    /// Returns `None` if the cells are identical or do not share a row, a
    /// column, or an exact diagonal.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let dx = to.x.abs_diff(from.x);
        let dy = to.y.abs_diff(from.y);
        if (dx == 0 && dy == 0) || (dx != 0 && dy != 0 && dx != dy) {
            return None;
        }
        Self::from_delta(signum(from.x, to.x), signum(from.y, to.y))
    }

    /// Returns the column step.
    #[must_use]
    pub const fn dx(self) -> i8 {
        match self {
            Self::Up | Self::Down => 0,
            Self::Left | Self::UpLeft | Self::DownLeft => -1,
            Self::Right | Self::UpRight | Self::DownRight => 1,
        }
    }

    /// Returns the row step.
    #[must_use]
    pub const fn dy(self) -> i8 {
        match self {
            Self::Left | Self::Right => 0,
            Self::Up | Self::UpLeft | Self::UpRight => -1,
            Self::Down | Self::DownLeft | Self::DownRight => 1,
        }
    }
}

/// Returns whether two cells form a selectable straight line.
///
/// True iff the cells differ and share a row, share a column, or lie on an
/// exact diagonal.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Position, direction::is_valid_line};
///
/// assert!(is_valid_line(Position::new(0, 0), Position::new(3, 3)));
/// assert!(!is_valid_line(Position::new(0, 0), Position::new(2, 1)));
/// assert!(!is_valid_line(Position::new(1, 1), Position::new(1, 1)));
/// ```
#[must_use]
pub fn is_valid_line(a: Position, b: Position) -> bool {
    Direction::between(a, b).is_some()
}

fn signum(from: usize, to: usize) -> i64 {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::UpLeft => "Up-Left",
            Self::UpRight => "Up-Right",
            Self::DownLeft => "Down-Left",
            Self::DownRight => "Down-Right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_delta_round_trip() {
        for dir in Direction::ALL {
            let back = Direction::from_delta(i64::from(dir.dx()), i64::from(dir.dy()));
            assert_eq!(back, Some(dir));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        assert_eq!(Direction::from_delta(-1, 2), None);
    }

    #[test]
    fn test_between() {
        let origin = Position::new(2, 2);
        assert_eq!(Direction::between(origin, Position::new(2, 0)), Some(Direction::Up));
        assert_eq!(Direction::between(origin, Position::new(2, 9)), Some(Direction::Down));
        assert_eq!(Direction::between(origin, Position::new(0, 2)), Some(Direction::Left));
        assert_eq!(Direction::between(origin, Position::new(5, 2)), Some(Direction::Right));
        assert_eq!(Direction::between(origin, Position::new(0, 0)), Some(Direction::UpLeft));
        assert_eq!(Direction::between(origin, Position::new(4, 0)), Some(Direction::UpRight));
        assert_eq!(Direction::between(origin, Position::new(0, 4)), Some(Direction::DownLeft));
        assert_eq!(Direction::between(origin, Position::new(4, 4)), Some(Direction::DownRight));
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, Position::new(3, 4)), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Direction::DownRight.to_string(), "Down-Right");
        assert_eq!(Direction::Up.to_string(), "Up");
    }

    proptest! {
        #[test]
        fn valid_line_iff_row_column_or_diagonal(
            ax in 0usize..50, ay in 0usize..50, bx in 0usize..50, by in 0usize..50,
        ) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            let expected = a != b && (ay == by || ax == bx || ax.abs_diff(bx) == ay.abs_diff(by));
            prop_assert_eq!(is_valid_line(a, b), expected);
            prop_assert_eq!(is_valid_line(a, b), is_valid_line(b, a));
        }
    }
}
