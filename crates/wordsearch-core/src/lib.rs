//! Core data structures for word search puzzles.
//!
//! This crate provides the value types shared by the codec, the puzzle model,
//! the selection engine, and the generation boundary.
//!
//! # Overview
//!
//! 1. **Letters and words**
//!    - [`letter`]: Type-safe representation of the letters `A`-`Z`
//!    - [`word`]: Non-empty words made of [`Letter`]s
//!
//! 2. **Geometry**
//!    - [`position`]: Cell coordinates `(x, y)` (column, row)
//!    - [`direction`]: The 8 straight-line directions and line validity
//!    - [`placement`]: A start cell plus a direction
//!
//! 3. **Grid**
//!    - [`grid`]: Rectangular letter matrix with row-major storage
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Direction, LetterGrid, Placement, Position, Word};
//!
//! let grid = LetterGrid::from_rows(["SUNX", "MOON"]).unwrap();
//! let word: Word = "MOON".parse().unwrap();
//!
//! let placement = grid.find_word(&word).unwrap();
//! assert_eq!(placement, Placement::new(Position::new(0, 1), Direction::Right));
//! assert_eq!(grid.read(placement, word.len()).as_ref(), Some(&word));
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod placement;
pub mod position;
pub mod word;

pub use self::{
    direction::Direction,
    grid::{GridError, LetterGrid},
    letter::{Letter, LetterError},
    placement::{PlacedWord, Placement},
    position::Position,
    word::{Word, WordError},
};
