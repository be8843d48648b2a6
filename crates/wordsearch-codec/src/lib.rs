//! Compact share-link codec for word search puzzles.
//!
//! A puzzle travels as a URL query string short enough to share:
//!
//! | param | meaning |
//! |---|---|
//! | `g` | base-62 encoded grid letters ([`grid_token`]) |
//! | `w`, `h` | grid width and height, required to decode `g` |
//! | `e` | `1` for edit mode, `0` for solving mode |
//! | `s` | `.`-joined solution entries, each `word_x_y_dx_dy` ([`solution_token`]) |
//! | `t` | percent-encoded title (optional) |
//!
//! The [`share`] module packs and unpacks whole queries, including the older
//! `grid`/`words` link format.
//!
//! # Examples
//!
//! ```
//! use wordsearch_codec::{SharedSolution, ShareLink, decode_query, encode_query, share_url};
//! use wordsearch_core::{Direction, LetterGrid, PlacedWord, Placement, Position};
//!
//! let grid = LetterGrid::from_rows(["SUNX", "MOON", "ABCD", "EFGH"]).unwrap();
//! let sun = PlacedWord::new(
//!     "SUN".parse().unwrap(),
//!     Placement::new(Position::new(0, 0), Direction::Right),
//! );
//!
//! let query = encode_query(&grid, [&sun], false, Some("Sky"));
//! let ShareLink::Ready(url) = share_url("https://example.com/", &query, 2000) else {
//!     panic!("small puzzles always fit");
//! };
//!
//! let shared = decode_query(&url).unwrap().expect("url carries a grid");
//! assert_eq!(shared.grid, grid);
//! assert_eq!(shared.solution, SharedSolution::Placed(vec![sun]));
//! assert_eq!(shared.title.as_deref(), Some("Sky"));
//! ```

pub mod error;
pub mod grid_token;
pub mod share;
pub mod solution_token;

pub use self::{
    error::CodecError,
    grid_token::{decode_grid, decode_letters, encode_grid, encode_letters},
    share::{
        DEFAULT_MAX_URL_LEN, MAX_DIMENSION, ShareLink, SharedPuzzle, SharedRequest,
        SharedSolution, decode_query, decode_request, encode_query, share_url,
    },
    solution_token::{decode_solution, encode_solution},
};
