//! Drag selection over a puzzle grid.
//!
//! [`SelectionEngine`] is a two-state machine:
//!
//! ```text
//! Idle --press--> Selecting --move--> Selecting
//!   ^                 |
//!   +---release/cancel+
//! ```
//!
//! Input arriving in an unexpected state is ignored, so the engine never
//! panics or errors on out-of-order pointer events.

use wordsearch_core::{Direction, Placement, Position, Word};

use crate::{Puzzle, puzzle::line_len};

/// The cells spanned by an in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// The pressed cell.
    pub start: Position,
    /// The last cell forming a valid line with `start`, if any.
    pub end: Option<Position>,
}

impl SelectionRange {
    /// Returns the direction of the selected line, if it has an end.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.start, self.end?)
    }

    /// Returns the covered cells from `start` to `end` inclusive.
    ///
    /// A range without an end, or one too long to count, covers only its
    /// start cell.
    #[must_use]
    pub fn cells(&self) -> Vec<Position> {
        let (Some(end), Some(direction)) = (self.end, self.direction()) else {
            return vec![self.start];
        };
        let Some(len) = line_len(self.start, end) else {
            return vec![self.start];
        };
        Placement::new(self.start, direction).cells(len).collect()
    }
}

/// Outcome of a completed gesture.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionEvent {
    /// An unfound entry was matched and marked found.
    WordFound {
        /// Index of the entry in [`Puzzle::entries`].
        index: usize,
        /// The matched word.
        word: Word,
    },
    /// The last unfound entry was just found.
    PuzzleSolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    Selecting(SelectionRange),
}

/// Turns pointer input into line selections and checks them against a
/// [`Puzzle`].
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, LetterGrid, PlacedWord, Placement, Position};
/// use wordsearch_game::{Puzzle, SelectionEngine};
///
/// let grid = LetterGrid::from_rows(["SUNX", "MOON"]).unwrap();
/// let sun = PlacedWord::new(
///     "SUN".parse().unwrap(),
///     Placement::new(Position::new(0, 0), Direction::Right),
/// );
/// let mut puzzle = Puzzle::new(grid, vec![sun]).unwrap();
/// let mut engine = SelectionEngine::new();
///
/// engine.press(Position::new(0, 0));
/// engine.move_to(Position::new(2, 0));
/// // A knight's move off the row is ignored; the end stays at (2, 0).
/// engine.move_to(Position::new(3, 1));
/// assert_eq!(engine.range().and_then(|r| r.end), Some(Position::new(2, 0)));
///
/// let events = engine.release(&mut puzzle);
/// assert_eq!(events.len(), 2);
/// assert!(engine.range().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    state: State,
}

impl SelectionEngine {
    /// Creates an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a gesture is in progress.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, State::Selecting(_))
    }

    /// Returns the current selection, if a gesture is in progress.
    #[must_use]
    pub fn range(&self) -> Option<&SelectionRange> {
        match &self.state {
            State::Idle => None,
            State::Selecting(range) => Some(range),
        }
    }

    /// Returns the cells to highlight for the current gesture.
    #[must_use]
    pub fn highlighted_cells(&self) -> Vec<Position> {
        self.range().map(SelectionRange::cells).unwrap_or_default()
    }

    /// Starts a gesture at `pos`, discarding any gesture in progress.
    pub fn press(&mut self, pos: Position) {
        if let State::Selecting(range) = self.state {
            log::debug!("restarting selection from {} at {pos}", range.start);
        }
        self.state = State::Selecting(SelectionRange {
            start: pos,
            end: None,
        });
    }

    /// Extends the gesture to `pos` if it forms a valid line with the start.
    ///
    /// Returns `true` if the selected end changed. Off-line moves, and lines
    /// whose length overflows `usize`, keep the previous end; moves while idle
    /// are ignored.
    pub fn move_to(&mut self, pos: Position) -> bool {
        let State::Selecting(range) = &mut self.state else {
            return false;
        };
        if Direction::between(range.start, pos).is_none()
            || line_len(range.start, pos).is_none()
            || range.end == Some(pos)
        {
            return false;
        }
        range.end = Some(pos);
        true
    }

    /// Ends the gesture and checks the selected line against `puzzle`.
    ///
    /// Marks the matched entry found and returns [`SelectionEvent::WordFound`],
    /// followed by [`SelectionEvent::PuzzleSolved`] if that was the last
    /// unfound entry. Returns no events when idle, when the gesture has no
    /// end, or when nothing unfound matches.
    pub fn release(&mut self, puzzle: &mut Puzzle) -> Vec<SelectionEvent> {
        let State::Selecting(range) = std::mem::take(&mut self.state) else {
            return Vec::new();
        };
        let Some(end) = range.end else {
            return Vec::new();
        };
        let Some(index) = puzzle.resolve(range.start, end) else {
            log::debug!("selection {} -> {end} matched nothing", range.start);
            return Vec::new();
        };
        if !puzzle.mark_found(index) {
            return Vec::new();
        }

        let word = puzzle.entries()[index].word().clone();
        log::debug!("found {word} ({}/{})", puzzle.found_count(), puzzle.entries().len());
        let mut events = vec![SelectionEvent::WordFound { index, word }];
        if puzzle.is_solved() {
            log::debug!("puzzle solved");
            events.push(SelectionEvent::PuzzleSolved);
        }
        events
    }

    /// Abandons the gesture without touching any puzzle.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}
