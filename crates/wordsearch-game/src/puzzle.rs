//! The puzzle model: a grid, its answer key, and found progress.

use wordsearch_core::{Direction, LetterGrid, PlacedWord, Placement, Position, Word};

/// Errors returned when building a [`Puzzle`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// Two entries of the answer key share the same word.
    #[display("word {word} appears more than once in the solution")]
    DuplicateWord {
        /// The repeated word.
        word: Word,
    },
    /// An entry covers a cell outside the grid.
    #[display("{placed} does not fit in a {width}x{height} grid")]
    OutOfBounds {
        /// The offending entry.
        placed: PlacedWord,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

/// One answer-key entry and whether the player has found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry {
    placed: PlacedWord,
    found: bool,
}

impl SolutionEntry {
    /// Returns the hidden word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.placed.word
    }

    /// Returns where the word sits.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placed.placement
    }

    /// Returns the word together with its placement.
    #[must_use]
    pub fn placed(&self) -> &PlacedWord {
        &self.placed
    }

    /// Returns whether the player has found this word.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found
    }
}

/// A letter grid with its answer key.
///
/// Every entry is checked against the grid bounds once, at construction, so
/// later lookups never leave the grid. The grid letters under an entry are not
/// compared with its word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: LetterGrid,
    entries: Vec<SolutionEntry>,
}

impl Puzzle {
    /// Creates a puzzle with every entry unfound.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::DuplicateWord`] if a word occurs twice and
    /// [`PuzzleError::OutOfBounds`] if an entry leaves the grid.
    pub fn new(grid: LetterGrid, solution: Vec<PlacedWord>) -> Result<Self, PuzzleError> {
        let mut entries: Vec<SolutionEntry> = Vec::with_capacity(solution.len());
        for placed in solution {
            if !grid.fits(placed.placement, placed.word.len()) {
                return Err(PuzzleError::OutOfBounds {
                    placed,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
            if entries.iter().any(|e| e.placed.word == placed.word) {
                return Err(PuzzleError::DuplicateWord { word: placed.word });
            }
            entries.push(SolutionEntry {
                placed,
                found: false,
            });
        }
        Ok(Self { grid, entries })
    }

    /// Creates a puzzle without an answer key.
    #[must_use]
    pub fn without_solution(grid: LetterGrid) -> Self {
        Self {
            grid,
            entries: Vec::new(),
        }
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the answer key in its original order.
    #[must_use]
    pub fn entries(&self) -> &[SolutionEntry] {
        &self.entries
    }

    /// Iterates the answer key without found flags.
    pub fn placed_words(&self) -> impl ExactSizeIterator<Item = &PlacedWord> {
        self.entries.iter().map(|e| &e.placed)
    }

    /// Returns the number of words found so far.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|e| e.found).count()
    }

    /// Returns whether the puzzle has an answer key and every word is found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.found)
    }

    /// Reads the word spelled by the straight line from `start` to `end`.
    ///
    /// Returns `None` if the cells do not form a valid line or the line leaves
    /// the grid.
    #[must_use]
    pub fn word_between(&self, start: Position, end: Position) -> Option<Word> {
        let direction = Direction::between(start, end)?;
        self.grid
            .read(Placement::new(start, direction), line_len(start, end)?)
    }

    /// Finds the first unfound entry spelled by the line from `start` to `end`,
    /// read in either direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, LetterGrid, PlacedWord, Placement, Position};
    /// use wordsearch_game::Puzzle;
    ///
    /// let grid = LetterGrid::from_rows(["SUNX", "MOON"]).unwrap();
    /// let moon = PlacedWord::new(
    ///     "MOON".parse().unwrap(),
    ///     Placement::new(Position::new(0, 1), Direction::Right),
    /// );
    /// let puzzle = Puzzle::new(grid, vec![moon]).unwrap();
    ///
    /// assert_eq!(puzzle.resolve(Position::new(3, 1), Position::new(0, 1)), Some(0));
    /// assert_eq!(puzzle.resolve(Position::new(0, 0), Position::new(2, 0)), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, start: Position, end: Position) -> Option<usize> {
        let word = self.word_between(start, end)?;
        let reversed = word.reversed();
        self.entries
            .iter()
            .position(|e| !e.found && (e.placed.word == word || e.placed.word == reversed))
    }

    /// Marks entry `index` as found.
    ///
    /// Returns `true` if the entry was previously unfound.
    pub fn mark_found(&mut self, index: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) if !entry.found => {
                entry.found = true;
                true
            }
            _ => false,
        }
    }
}

/// Number of cells from `start` to `end` inclusive along a row, column or
/// diagonal, or `None` if the count does not fit in `usize`.
pub(crate) fn line_len(start: Position, end: Position) -> Option<usize> {
    start
        .x
        .abs_diff(end.x)
        .max(start.y.abs_diff(end.y))
        .checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(word: &str, x: usize, y: usize, direction: Direction) -> PlacedWord {
        PlacedWord::new(
            word.parse().unwrap(),
            Placement::new(Position::new(x, y), direction),
        )
    }

    fn sun_moon() -> Puzzle {
        let grid = LetterGrid::from_rows(["SUNX", "MOON", "QRST", "UVWX"]).unwrap();
        Puzzle::new(
            grid,
            vec![
                placed("SUN", 0, 0, Direction::Right),
                placed("MOON", 0, 1, Direction::Right),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_entries() {
        let grid = LetterGrid::from_rows(["SUN", "ABC"]).unwrap();
        assert!(matches!(
            Puzzle::new(grid.clone(), vec![placed("SUN", 1, 0, Direction::Right)]),
            Err(PuzzleError::OutOfBounds {
                width: 3,
                height: 2,
                ..
            })
        ));
        assert_eq!(
            Puzzle::new(
                grid.clone(),
                vec![
                    placed("SUN", 0, 0, Direction::Right),
                    placed("SUN", 2, 0, Direction::Left),
                ]
            ),
            Err(PuzzleError::DuplicateWord {
                word: "SUN".parse().unwrap()
            })
        );
        let puzzle = Puzzle::new(grid, vec![placed("SUN", 0, 0, Direction::Right)]).unwrap();
        assert_eq!(puzzle.found_count(), 0);
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_word_between() {
        let puzzle = sun_moon();
        let word = |a, b, c, d| {
            puzzle
                .word_between(Position::new(a, b), Position::new(c, d))
                .map(|w| w.to_string())
        };
        assert_eq!(word(0, 0, 2, 0).as_deref(), Some("SUN"));
        assert_eq!(word(3, 1, 0, 1).as_deref(), Some("NOOM"));
        assert_eq!(word(0, 0, 3, 3).as_deref(), Some("SOSX"));
        assert_eq!(word(0, 0, 0, 0), None);
        assert_eq!(word(0, 0, 2, 1), None);
        assert_eq!(word(0, 0, 5, 0), None);
    }

    #[test]
    fn test_word_between_far_corners() {
        let puzzle = sun_moon();
        let far = Position::new(usize::MAX, usize::MAX);
        assert_eq!(puzzle.word_between(Position::new(0, 0), far), None);
        assert_eq!(puzzle.word_between(far, Position::new(0, 0)), None);
        assert_eq!(puzzle.resolve(far, Position::new(0, 0)), None);
        assert_eq!(line_len(Position::new(0, 0), far), None);
        assert_eq!(line_len(Position::new(2, 2), Position::new(0, 0)), Some(3));
    }

    #[test]
    fn test_resolve_either_direction() {
        let puzzle = sun_moon();
        for (start, end) in [((0, 0), (2, 0)), ((2, 0), (0, 0))] {
            assert_eq!(
                puzzle.resolve(Position::new(start.0, start.1), Position::new(end.0, end.1)),
                Some(0)
            );
        }
        assert_eq!(
            puzzle.resolve(Position::new(3, 1), Position::new(0, 1)),
            Some(1)
        );
        assert_eq!(
            puzzle.resolve(Position::new(0, 0), Position::new(1, 0)),
            None
        );
    }

    #[test]
    fn test_mark_found_skips_found_entries() {
        let mut puzzle = sun_moon();
        assert!(puzzle.mark_found(0));
        assert!(!puzzle.mark_found(0));
        assert!(!puzzle.mark_found(7));
        assert_eq!(
            puzzle.resolve(Position::new(0, 0), Position::new(2, 0)),
            None
        );
        assert!(puzzle.mark_found(1));
        assert!(puzzle.is_solved());
    }

    #[test]
    fn test_palindrome_matches_first_unfound() {
        let grid = LetterGrid::from_rows(["NOON", "ABCD"]).unwrap();
        let puzzle = Puzzle::new(grid, vec![placed("NOON", 0, 0, Direction::Right)]).unwrap();
        assert_eq!(
            puzzle.resolve(Position::new(3, 0), Position::new(0, 0)),
            Some(0)
        );
    }

    #[test]
    fn test_without_solution_is_never_solved() {
        let grid = LetterGrid::from_rows(["AB", "CD"]).unwrap();
        let puzzle = Puzzle::without_solution(grid);
        assert!(puzzle.entries().is_empty());
        assert!(!puzzle.is_solved());
    }
}
