//! Rectangular letter grids.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::{Direction, Letter, LetterError, Placement, Position, Word};

/// A rectangular matrix of letters stored in row-major order.
///
/// A grid always has at least one row and one column, and every row has the
/// same width. Grids are immutable once constructed.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{LetterGrid, Position};
///
/// let grid = LetterGrid::from_rows(["ABC", "DEF"]).unwrap();
/// assert_eq!((grid.width(), grid.height()), (3, 2));
/// assert_eq!(grid[Position::new(1, 1)].to_char(), 'E');
/// assert_eq!(grid.to_string(), "ABC\nDEF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    width: usize,
    height: usize,
    cells: Vec<Letter>,
}

/// Errors returned when constructing a [`LetterGrid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GridError {
    /// Width or height is zero.
    #[display("grid must have at least one row and one column, got {width}x{height}")]
    EmptyDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The number of cells does not match `width * height`.
    #[display("expected {expected} cells, got {actual}")]
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A row has a different width than the first row.
    #[display("row {row} has {actual} letters, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        actual: usize,
    },
    /// A cell is not a letter.
    #[display("{_0}")]
    #[from]
    InvalidLetter(LetterError),
}

impl LetterGrid {
    /// Creates a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimension`] if either dimension is zero, or
    /// [`GridError::CellCountMismatch`] if `cells.len() != width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<Letter>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Creates a grid from rows of uppercase letters.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyDimension`] for no rows or an empty first row,
    /// [`GridError::RaggedRow`] if a row's width differs from the first row,
    /// and [`GridError::InvalidLetter`] for characters outside `A`-`Z`.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();
        for (row, text) in rows.into_iter().enumerate() {
            let before = cells.len();
            for ch in text.as_ref().chars() {
                cells.push(Letter::try_from(ch)?);
            }
            let actual = cells.len() - before;
            match width {
                None => width = Some(actual),
                Some(expected) if expected != actual => {
                    return Err(GridError::RaggedRow {
                        row,
                        expected,
                        actual,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        Self::new(width.unwrap_or(0), height, cells)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells (`width * height`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns all letters in row-major order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.cells
    }

    /// Iterates the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Letter]> {
        self.cells.chunks_exact(self.width)
    }

    /// Returns whether `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Returns the letter at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.contains(pos).then(|| self.cells[pos.y * self.width + pos.x])
    }

    /// Returns whether every cell of a `len`-letter word at `placement` lies
    /// inside the grid.
    #[must_use]
    pub fn fits(&self, placement: Placement, len: usize) -> bool {
        len > 0
            && self.contains(placement.start)
            && placement.end(len).is_some_and(|end| self.contains(end))
    }

    /// Reads `len` letters starting at `placement`.
    ///
    /// Returns `None` if `len` is zero or any cell lies outside the grid.
    #[must_use]
    pub fn read(&self, placement: Placement, len: usize) -> Option<Word> {
        if !self.fits(placement, len) {
            return None;
        }
        let letters = placement
            .cells(len)
            .map(|pos| self.get(pos))
            .collect::<Option<Vec<_>>>()?;
        Word::from_letters(letters).ok()
    }

    /// Finds the first placement of `word` in the grid.
    ///
    /// Cells are scanned row-major and, for each cell, directions in
    /// [`Direction::ALL`] order.
    #[must_use]
    pub fn find_word(&self, word: &Word) -> Option<Placement> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Position::new(x, y)))
            .flat_map(|start| Direction::ALL.map(|dir| Placement::new(start, dir)))
            .find(|&placement| self.read(placement, word.len()).as_ref() == Some(word))
    }
}

impl Index<Position> for LetterGrid {
    type Output = Letter;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            self.contains(pos),
            "position {pos} outside {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[pos.y * self.width + pos.x]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for letter in row {
                Display::fmt(letter, f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_rows() {
        let grid = LetterGrid::from_rows(["SUNX", "MOON", "ABCD"]).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.get(Position::new(3, 1)).map(Letter::to_char), Some('N'));
        assert_eq!(grid.get(Position::new(4, 1)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert_eq!(grid.rows().len(), 3);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(
            LetterGrid::from_rows(["ABC", "DE"]),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            LetterGrid::from_rows(Vec::<&str>::new()),
            Err(GridError::EmptyDimension {
                width: 0,
                height: 0
            })
        );
        assert!(matches!(
            LetterGrid::from_rows(["AbC"]),
            Err(GridError::InvalidLetter(LetterError { ch: 'b' }))
        ));
        assert_eq!(
            LetterGrid::new(2, 2, vec![Letter::A; 3]),
            Err(GridError::CellCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_letter_error_converts() {
        let err = LetterError { ch: '7' };
        assert_eq!(GridError::from(err), GridError::InvalidLetter(err));
        assert_eq!(GridError::from(err).to_string(), err.to_string());
    }

    #[test]
    fn test_read_and_fits() {
        let grid = LetterGrid::from_rows(["SUNX", "MOON"]).unwrap();
        let sun = Placement::new(Position::new(0, 0), Direction::Right);
        assert_eq!(grid.read(sun, 3), Some(word("SUN")));
        assert_eq!(grid.read(sun, 5), None);
        assert_eq!(grid.read(sun, 0), None);
        assert!(grid.fits(sun, 4));
        assert!(!grid.fits(sun, 5));

        let backwards = Placement::new(Position::new(3, 1), Direction::Left);
        assert_eq!(grid.read(backwards, 4), Some(word("NOOM")));
        assert!(!grid.fits(Placement::new(Position::new(9, 9), Direction::Up), 1));
    }

    #[test]
    fn test_find_word() {
        let grid = LetterGrid::from_rows(["CXXT", "XAXA", "XXTC"]).unwrap();
        assert_eq!(
            grid.find_word(&word("CAT")),
            Some(Placement::new(Position::new(0, 0), Direction::DownRight))
        );
        assert_eq!(
            grid.find_word(&word("TAC")),
            Some(Placement::new(Position::new(3, 0), Direction::Down))
        );
        assert_eq!(grid.find_word(&word("DOG")), None);
    }

    #[test]
    #[should_panic(expected = "outside 2x1 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = LetterGrid::from_rows(["AB"]).unwrap();
        let _ = grid[Position::new(2, 0)];
    }
}
