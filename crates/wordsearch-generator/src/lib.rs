//! Boundary to the external word search grid generator.
//!
//! Placing words in a grid is not done here. A generator receives a
//! [`GenerateRequest`] (comma-joined words plus dimensions) and answers with a
//! [`GenerateResponse`]: a grid text block and the placement of every word, or
//! an error message. [`GenerateResponse::into_puzzle`] validates the answer
//! and turns it into a [`GeneratedPuzzle`].
//!
//! Implementations of [`GridGenerator`]:
//!
//! - [`CommandGenerator`] runs an external program that speaks JSON over
//!   stdin/stdout.
//! - [`FixedGenerator`] always returns the same response.
//!
//! # Examples
//!
//! ```
//! use wordsearch_generator::{
//!     CancelToken, FixedGenerator, GenerateRequest, GenerateResponse, GridGenerator,
//! };
//!
//! let response: GenerateResponse = serde_json::from_str(
//!     r#"{
//!         "grid": "S U N\nA B C\n",
//!         "solution": [
//!             {"word": "SUN", "position": {"x": 0, "y": 0, "direction": {"dx": 1, "dy": 0}}}
//!         ]
//!     }"#,
//! )
//! .unwrap();
//! let generator = FixedGenerator::new(response);
//!
//! let request = GenerateRequest::new(["SUN"], 3, 2);
//! let puzzle = generator.generate(&request, &CancelToken::new()).unwrap();
//! assert_eq!(puzzle.grid.to_string(), "SUN\nABC");
//! assert_eq!(puzzle.solution[0].to_string(), "SUN at (0, 0) Right");
//! ```

pub mod cancel;
pub mod command;
pub mod dto;
pub mod error;
pub mod fixed;

use wordsearch_core::{LetterGrid, PlacedWord};

pub use self::{
    cancel::CancelToken,
    command::CommandGenerator,
    dto::{DirectionDto, GenerateRequest, GenerateResponse, PositionDto, SolutionDto},
    error::GenerationError,
    fixed::FixedGenerator,
};

/// A grid produced by a generator, with the placement of every word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The filled letter grid.
    pub grid: LetterGrid,
    /// Where each requested word was placed.
    pub solution: Vec<PlacedWord>,
}

/// A source of generated grids.
///
/// Calls block until the grid is ready. Implementations check `cancel`
/// while working and return [`GenerationError::Cancelled`] once it fires.
pub trait GridGenerator: Send + Sync {
    /// Generates a grid for `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] if the generator fails, answers with an
    /// error or an unusable response, or is cancelled.
    fn generate(
        &self,
        request: &GenerateRequest,
        cancel: &CancelToken,
    ) -> Result<GeneratedPuzzle, GenerationError>;
}
