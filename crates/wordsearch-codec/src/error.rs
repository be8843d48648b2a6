//! Codec error type.

use wordsearch_core::GridError;

/// Errors produced while decoding a share link.
///
/// Every variant means the link does not describe a usable puzzle; callers
/// report it as "puzzle not found or invalid" and fall back to an empty session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CodecError {
    /// The grid token is empty.
    #[display("grid token is empty")]
    EmptyGridToken,
    /// The grid token contains a character outside the base-62 alphabet.
    #[display("grid token {token:?} contains invalid character {ch:?}")]
    InvalidGridToken {
        /// The offending token.
        token: String,
        /// The first invalid character.
        ch: char,
    },
    /// The grid token encodes more letters than the grid has cells.
    #[display("grid token {token:?} does not fit in {cells} cells")]
    GridOverflow {
        /// The offending token.
        token: String,
        /// `width * height`.
        cells: usize,
    },
    /// A dimension parameter is missing while a grid is present.
    #[display("missing grid dimension `{name}`")]
    MissingDimension {
        /// Query parameter name.
        name: &'static str,
    },
    /// A dimension parameter is not an integer in `1..=MAX_DIMENSION`.
    #[display("invalid grid dimension `{name}`: {value:?}")]
    InvalidDimension {
        /// Query parameter name.
        name: &'static str,
        /// The raw parameter value.
        value: String,
    },
    /// A solution entry does not have the `word_x_y_dx_dy` shape.
    #[display("malformed solution entry {entry:?}")]
    MalformedSolutionEntry {
        /// The raw entry.
        entry: String,
    },
    /// A parameter value is not valid percent-encoded UTF-8.
    #[display("parameter `{name}` is not valid percent-encoded UTF-8")]
    InvalidEncoding {
        /// Query parameter name.
        name: &'static str,
    },
    /// A legacy `grid` parameter does not describe a rectangular letter grid.
    #[display("invalid legacy grid: {_0}")]
    #[from]
    InvalidLegacyGrid(GridError),
}
