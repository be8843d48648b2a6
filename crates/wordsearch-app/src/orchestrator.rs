//! Ties input validation, generation, the share codec, and gesture handling
//! to one [`Session`].
//!
//! Every operation that changes the session recomputes its share URL, so the
//! host can mirror [`Orchestrator::current_share_url`] into its address bar
//! after each call.

use std::sync::Arc;

use wordsearch_codec::{SharedPuzzle, SharedRequest, SharedSolution, decode_query, decode_request};
use wordsearch_core::{LetterGrid, PlacedWord, Position, Word};
use wordsearch_game::{Puzzle, PuzzleError, SelectionEngine, SelectionEvent};
use wordsearch_generator::{GeneratedPuzzle, GenerationError, GridGenerator};

use crate::{
    session::{Session, ShareData},
    settings::Settings,
    validation::{self, InputValidationError},
    worker::{self, GenerationJob, GenerationWorker, Ticket, WorkError},
};

/// Why a generation request produced no puzzle.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant)]
pub enum GenerationFailure {
    #[display("{_0}")]
    #[from]
    Generator(GenerationError),
    #[display("{_0}")]
    #[from]
    Worker(WorkError),
    #[display("generated puzzle is inconsistent: {_0}")]
    #[from]
    InvalidPuzzle(PuzzleError),
    #[display("generation {ticket} was superseded")]
    Stale { ticket: Ticket },
}

/// Progress of a generation request.
#[derive(Debug, derive_more::IsVariant)]
pub enum GenerationStatus {
    /// The generator is still running.
    Pending,
    /// The session now holds the generated puzzle.
    Ready,
    /// Generation failed; the session keeps its puzzle and is back in edit mode.
    Failed(GenerationFailure),
    /// The ticket does not belong to the current request.
    Stale,
}

/// What opening a link did to the session.
#[derive(Debug, derive_more::IsVariant)]
pub enum LinkOutcome {
    /// The link carried a puzzle, which is now the session.
    Restored,
    /// The link asked for a puzzle from its words; generation has started.
    Generating(Ticket),
    /// The link asked for a puzzle but its words or dimensions were rejected.
    Rejected(InputValidationError),
    /// The link carried nothing usable; the session is empty.
    Empty,
}

/// Result of a gesture: selection events plus the share URL afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GestureOutcome {
    pub events: Vec<SelectionEvent>,
    pub share_url: Option<String>,
}

#[derive(Debug)]
struct PendingGeneration {
    job: GenerationJob,
    title: Option<String>,
}

/// Owns the session and serializes every change to it.
#[derive(Debug)]
pub struct Orchestrator {
    settings: Settings,
    worker: GenerationWorker,
    session: Session,
    selection: SelectionEngine,
    pending: Option<PendingGeneration>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(settings: Settings, generator: Arc<dyn GridGenerator>) -> Self {
        Self {
            settings,
            worker: GenerationWorker::new(generator),
            session: Session::empty(),
            selection: SelectionEngine::new(),
            pending: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    /// Returns whether a generation request is outstanding.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates `words` and starts generating a grid for them.
    ///
    /// Any outstanding request is cancelled and its ticket becomes stale. The
    /// session is left untouched until the new request completes.
    pub fn create_from_words(
        &mut self,
        words: &str,
        width: Option<usize>,
        height: Option<usize>,
        title: Option<String>,
    ) -> Result<Ticket, InputValidationError> {
        let input = validation::validate(words, width, height, &self.settings.input)?;
        self.cancel_pending();

        let job = self.worker.submit(input.to_request());
        let ticket = job.ticket();
        log::debug!(
            "generating {}x{} grid for {} words as {ticket}",
            input.width,
            input.height,
            input.words.len()
        );
        self.pending = Some(PendingGeneration { job, title });
        Ok(ticket)
    }

    /// Checks a generation request without blocking.
    pub fn poll_generation(&mut self, ticket: Ticket) -> GenerationStatus {
        let Some(pending) = self.pending_for(ticket) else {
            return GenerationStatus::Stale;
        };
        let result = match pending.job.poll() {
            Ok(None) => return GenerationStatus::Pending,
            Ok(Some(result)) => result.map_err(GenerationFailure::from),
            Err(err) => Err(err.into()),
        };
        match self.finish_generation(result) {
            Ok(()) => GenerationStatus::Ready,
            Err(err) => GenerationStatus::Failed(err),
        }
    }

    /// Blocks until a generation request completes.
    pub fn wait_generation(&mut self, ticket: Ticket) -> Result<&Session, GenerationFailure> {
        let Some(pending) = self.pending_for(ticket) else {
            return Err(GenerationFailure::Stale { ticket });
        };
        let result = match worker::block_on(&mut pending.job) {
            Ok(result) => result.map_err(GenerationFailure::from),
            Err(err) => Err(err.into()),
        };
        self.finish_generation(result)?;
        Ok(&self.session)
    }

    fn pending_for(&mut self, ticket: Ticket) -> Option<&mut PendingGeneration> {
        match &mut self.pending {
            Some(pending) if pending.job.ticket() == ticket => Some(pending),
            _ => {
                log::warn!("discarding result of stale generation {ticket}");
                None
            }
        }
    }

    fn finish_generation(
        &mut self,
        result: Result<GeneratedPuzzle, GenerationFailure>,
    ) -> Result<(), GenerationFailure> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        let ticket = pending.job.ticket();
        let puzzle = result.and_then(|GeneratedPuzzle { grid, solution }| {
            Puzzle::new(grid, solution).map_err(GenerationFailure::from)
        });
        let puzzle = match puzzle {
            Ok(puzzle) => puzzle,
            Err(err) => {
                log::info!("generation {ticket} failed: {err}");
                self.session.set_edit_mode(true, &self.settings.share);
                return Err(err);
            }
        };
        log::info!(
            "created {}x{} puzzle with {} words",
            puzzle.grid().width(),
            puzzle.grid().height(),
            puzzle.entries().len()
        );
        self.replace_session(Session::new(
            puzzle,
            pending.title,
            false,
            &self.settings.share,
        ));
        Ok(())
    }

    /// Restores the puzzle carried by a share link.
    ///
    /// A link that carries no puzzle or fails to decode leaves an empty edit
    /// session and returns `None`.
    pub fn restore_from_url(&mut self, url: &str) -> Option<&Session> {
        self.cancel_pending();
        let shared = match decode_query(url) {
            Ok(Some(shared)) => shared,
            Ok(None) => {
                log::debug!("share link carries no puzzle");
                self.replace_session(Session::empty());
                return None;
            }
            Err(err) => {
                log::warn!("discarding invalid share link: {err}");
                self.replace_session(Session::empty());
                return None;
            }
        };

        let SharedPuzzle {
            grid,
            solution,
            edit_mode,
            title,
        } = shared;
        let puzzle = restore_puzzle(grid, solution);
        log::info!(
            "restored {}x{} puzzle with {} words",
            puzzle.grid().width(),
            puzzle.grid().height(),
            puzzle.entries().len()
        );
        self.replace_session(Session::new(
            puzzle,
            title,
            edit_mode,
            &self.settings.share,
        ));
        Some(&self.session)
    }

    /// Opens a link: restores the puzzle it carries, or starts generating one
    /// when it carries words but no grid.
    ///
    /// A generation request replaces the session with an empty edit session
    /// until the returned ticket completes.
    pub fn open_link(&mut self, url: &str) -> LinkOutcome {
        match decode_request(url) {
            Ok(Some(request)) => return self.generate_from_link(request),
            Ok(None) => {}
            Err(err) => {
                log::warn!("discarding invalid link request: {err}");
                self.clear();
                return LinkOutcome::Empty;
            }
        }
        match self.restore_from_url(url) {
            Some(_) => LinkOutcome::Restored,
            None => LinkOutcome::Empty,
        }
    }

    fn generate_from_link(&mut self, request: SharedRequest) -> LinkOutcome {
        let SharedRequest {
            words,
            width,
            height,
            title,
        } = request;
        self.clear();
        match self.create_from_words(&words.join("\n"), width, height, title) {
            Ok(ticket) => LinkOutcome::Generating(ticket),
            Err(err) => {
                log::warn!("rejecting link words: {err}");
                LinkOutcome::Rejected(err)
            }
        }
    }

    #[must_use]
    pub fn current_share_url(&self) -> Option<&str> {
        self.session.share_url()
    }

    #[must_use]
    pub fn share_data(&self) -> Option<ShareData> {
        self.session.share_data()
    }

    /// Changes the title and returns the recomputed share URL.
    pub fn set_title(&mut self, title: Option<String>) -> Option<&str> {
        self.session.set_title(title, &self.settings.share);
        self.session.share_url()
    }

    /// Switches between edit and solving mode and returns the recomputed share
    /// URL.
    pub fn set_edit_mode(&mut self, edit_mode: bool) -> Option<&str> {
        self.session.set_edit_mode(edit_mode, &self.settings.share);
        self.session.share_url()
    }

    /// Drops the puzzle and any outstanding request.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.replace_session(Session::empty());
        log::debug!("session cleared");
    }

    /// Starts a gesture. Cells outside the grid, or any press without a
    /// puzzle, are ignored.
    pub fn press(&mut self, pos: Position) -> GestureOutcome {
        if self.on_grid(pos) {
            self.selection.press(pos);
        }
        self.gesture_outcome(Vec::new())
    }

    /// Extends the gesture. Cells outside the grid keep the previous end.
    pub fn move_to(&mut self, pos: Position) -> GestureOutcome {
        if self.on_grid(pos) {
            self.selection.move_to(pos);
        }
        self.gesture_outcome(Vec::new())
    }

    pub fn release(&mut self) -> GestureOutcome {
        let events = match self.session.puzzle_mut() {
            Some(puzzle) => self.selection.release(puzzle),
            None => {
                self.selection.cancel();
                Vec::new()
            }
        };
        self.gesture_outcome(events)
    }

    pub fn cancel_gesture(&mut self) -> GestureOutcome {
        self.selection.cancel();
        self.gesture_outcome(Vec::new())
    }

    fn on_grid(&self, pos: Position) -> bool {
        self.session
            .puzzle()
            .is_some_and(|puzzle| puzzle.grid().contains(pos))
    }

    fn gesture_outcome(&self, events: Vec<SelectionEvent>) -> GestureOutcome {
        GestureOutcome {
            events,
            share_url: self.session.share_url().map(ToOwned::to_owned),
        }
    }

    fn replace_session(&mut self, session: Session) {
        self.selection.cancel();
        self.session = session;
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("cancelling generation {}", pending.job.ticket());
            pending.job.cancel();
        }
    }
}

fn restore_puzzle(grid: LetterGrid, solution: SharedSolution) -> Puzzle {
    let placed = match solution {
        SharedSolution::Absent => Vec::new(),
        SharedSolution::Placed(placed) => placed,
        SharedSolution::WordsOnly(words) => locate_words(&grid, words),
    };
    match Puzzle::new(grid.clone(), placed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            log::warn!("ignoring share link solution: {err}");
            Puzzle::without_solution(grid)
        }
    }
}

fn locate_words(grid: &LetterGrid, words: Vec<Word>) -> Vec<PlacedWord> {
    let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
    for word in words {
        if placed.iter().any(|p| p.word == word) {
            continue;
        }
        match grid.find_word(&word) {
            Some(placement) => placed.push(PlacedWord::new(word, placement)),
            None => log::warn!("word {word} not found in shared grid"),
        }
    }
    placed
}
