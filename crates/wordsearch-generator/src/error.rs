//! Generation error type.

use std::{io, process::ExitStatus};

use wordsearch_core::{GridError, WordError};

/// Errors reported by a [`GridGenerator`](crate::GridGenerator).
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant)]
pub enum GenerationError {
    /// The generator answered with an error message.
    #[display("{message}")]
    Service {
        /// The generator's message, shown to the user as is.
        message: String,
    },
    /// The generator could not place every word.
    #[display("No result found.. try a bigger grid or less words.")]
    NoSolution,
    /// The grid block is ragged or contains non-letters.
    #[display("generator returned an invalid grid: {_0}")]
    #[from]
    InvalidGrid(GridError),
    /// A placement names an invalid word.
    #[display("generator returned invalid word {word:?}: {source}")]
    InvalidWord {
        /// The raw word.
        word: String,
        /// Why it was rejected.
        source: WordError,
    },
    /// A placement has a step that is not one of the 8 directions.
    #[display("generator returned invalid direction ({dx}, {dy}) for {word:?}")]
    InvalidDirection {
        /// The raw word.
        word: String,
        /// Column step.
        dx: i64,
        /// Row step.
        dy: i64,
    },
    /// The generator output is not a valid response document.
    #[display("failed to parse generator response: {_0}")]
    #[from]
    Json(serde_json::Error),
    /// The generator process could not be started or talked to.
    #[display("failed to run generator: {_0}")]
    #[from]
    Io(io::Error),
    /// The generator process exited unsuccessfully.
    #[display("generator exited with {status}: {stderr}")]
    Exited {
        /// The exit status.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },
    /// The request was cancelled before the generator finished.
    #[display("generation cancelled")]
    Cancelled,
}
