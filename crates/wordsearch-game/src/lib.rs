//! Puzzle state and drag selection for word search games.
//!
//! - [`Puzzle`] owns a letter grid and its answer key, tracking which words
//!   have been found.
//! - [`SelectionEngine`] turns press / move / release / cancel input into
//!   straight-line selections and checks them against a [`Puzzle`].
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Direction, LetterGrid, PlacedWord, Placement, Position};
//! use wordsearch_game::{Puzzle, SelectionEngine, SelectionEvent};
//!
//! let grid = LetterGrid::from_rows(["SUNX", "MOON", "QRST", "UVWX"]).unwrap();
//! let sun = PlacedWord::new(
//!     "SUN".parse().unwrap(),
//!     Placement::new(Position::new(0, 0), Direction::Right),
//! );
//! let mut puzzle = Puzzle::new(grid, vec![sun]).unwrap();
//!
//! let mut engine = SelectionEngine::new();
//! engine.press(Position::new(0, 0));
//! engine.move_to(Position::new(2, 0));
//! let events = engine.release(&mut puzzle);
//!
//! assert!(matches!(events[0], SelectionEvent::WordFound { index: 0, .. }));
//! assert_eq!(events[1], SelectionEvent::PuzzleSolved);
//! assert!(puzzle.is_solved());
//! ```

pub mod puzzle;
pub mod selection;

pub use self::{
    puzzle::{Puzzle, PuzzleError, SolutionEntry},
    selection::{SelectionEngine, SelectionEvent, SelectionRange},
};
