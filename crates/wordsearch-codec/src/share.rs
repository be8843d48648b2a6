//! Whole share links: query encoding, URL length ceiling, and decoding.

use std::borrow::Cow;

use wordsearch_core::{LetterGrid, PlacedWord, Word};

use crate::{CodecError, grid_token, solution_token};

/// Default ceiling for the length of a complete share URL.
pub const DEFAULT_MAX_URL_LEN: usize = 2000;

/// Largest width or height accepted when decoding a link.
pub const MAX_DIMENSION: usize = 100;

/// Result of building a share URL.
///
/// A puzzle too large to share is a normal state, not an error: the caller
/// simply has no link to offer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ShareLink {
    /// The complete URL.
    Ready(String),
    /// The URL would reach or exceed the ceiling.
    TooLarge {
        /// Length the URL would have had.
        len: usize,
        /// The configured ceiling.
        max_len: usize,
    },
}

impl ShareLink {
    /// Returns the URL, if the puzzle was representable.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Ready(url) => Some(url),
            Self::TooLarge { .. } => None,
        }
    }

    /// Consumes the link and returns the URL, if any.
    #[must_use]
    pub fn into_url(self) -> Option<String> {
        match self {
            Self::Ready(url) => Some(url),
            Self::TooLarge { .. } => None,
        }
    }
}

/// The answer key carried by a share link.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SharedSolution {
    /// Words with their placements (compact format).
    Placed(Vec<PlacedWord>),
    /// Words without placements (legacy format); the caller locates them.
    WordsOnly(Vec<Word>),
    /// No usable answer key: the parameter was missing or malformed.
    Absent,
}

/// A puzzle decoded from a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedPuzzle {
    /// The letter grid.
    pub grid: LetterGrid,
    /// The answer key.
    pub solution: SharedSolution,
    /// Whether the link opens in edit mode.
    pub edit_mode: bool,
    /// The puzzle title, if any.
    pub title: Option<String>,
}

/// Builds the compact query string (without a leading `?`) for a puzzle.
///
/// Parameters are emitted in the order `g`, `w`, `h`, `e`, `s`, `t`; `s` is
/// omitted for an empty answer key and `t` for a missing or empty title.
#[must_use]
pub fn encode_query<'a, I>(
    grid: &LetterGrid,
    solution: I,
    edit_mode: bool,
    title: Option<&str>,
) -> String
where
    I: IntoIterator<Item = &'a PlacedWord>,
{
    let mut query = format!(
        "g={}&w={}&h={}&e={}",
        grid_token::encode_grid(grid),
        grid.width(),
        grid.height(),
        u8::from(edit_mode),
    );
    let solution = solution_token::encode_solution(solution);
    if !solution.is_empty() {
        query.push_str("&s=");
        query.push_str(&solution);
    }
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        query.push_str("&t=");
        query.push_str(&urlencoding::encode(title));
    }
    query
}

/// Joins a base URL and a query, enforcing the length ceiling.
///
/// Any query or fragment already present on `base_url` is replaced. The result
/// is [`ShareLink::TooLarge`] unless the full URL is shorter than `max_len`.
#[must_use]
pub fn share_url(base_url: &str, query: &str, max_len: usize) -> ShareLink {
    let base = base_url.split(['?', '#']).next().unwrap_or_default();
    let url = format!("{base}?{query}");
    if url.len() < max_len {
        ShareLink::Ready(url)
    } else {
        log::debug!("share url is {} bytes, limit {max_len}", url.len());
        ShareLink::TooLarge {
            len: url.len(),
            max_len,
        }
    }
}

/// Decodes a share link.
///
/// Accepts a bare query, a query with a leading `?`, or a full URL; any
/// `#fragment` is ignored. Returns `Ok(None)` when the link carries no grid.
/// A malformed `s` parameter is dropped (the answer key becomes
/// [`SharedSolution::Absent`]) rather than failing the whole link.
///
/// # Errors
///
/// Returns a [`CodecError`] if a grid is present but cannot be decoded.
pub fn decode_query(input: &str) -> Result<Option<SharedPuzzle>, CodecError> {
    let params = QueryParams::parse(input);
    if let Some(token) = params.get("g") {
        decode_compact(&params, token).map(Some)
    } else if let Some(rows) = params.get("grid") {
        decode_legacy(&params, rows).map(Some)
    } else {
        Ok(None)
    }
}

/// A link asking for a new puzzle: words but no grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedRequest {
    /// Raw words, trimmed, in link order. Not yet validated.
    pub words: Vec<String>,
    /// Requested grid width, if given.
    pub width: Option<usize>,
    /// Requested grid height, if given.
    pub height: Option<usize>,
    /// The puzzle title, if any.
    pub title: Option<String>,
}

/// Decodes a link that carries `words` (and optionally `width`, `height` and
/// `title`) but no grid.
///
/// Returns `Ok(None)` when the link carries a grid, which [`decode_query`]
/// handles, or no words. Dimensions are not range-checked here.
///
/// # Errors
///
/// Returns [`CodecError::InvalidDimension`] for a non-numeric dimension and
/// [`CodecError::InvalidEncoding`] for a malformed `words` or `title` value.
pub fn decode_request(input: &str) -> Result<Option<SharedRequest>, CodecError> {
    let params = QueryParams::parse(input);
    if params.get("g").is_some() || params.get("grid").is_some() {
        return Ok(None);
    }
    let words: Vec<String> = params
        .text("words")?
        .map(|words| {
            words
                .split(',')
                .map(|w| w.trim().to_owned())
                .filter(|w| !w.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if words.is_empty() {
        return Ok(None);
    }
    Ok(Some(SharedRequest {
        words,
        width: params.optional_number("width")?,
        height: params.optional_number("height")?,
        title: params.text("title")?,
    }))
}

fn decode_compact(params: &QueryParams<'_>, token: &str) -> Result<SharedPuzzle, CodecError> {
    let width = params.dimension("w")?;
    let height = params.dimension("h")?;
    let grid = grid_token::decode_grid(token, width, height)?;

    let solution = match params.get("s") {
        None => SharedSolution::Absent,
        Some(raw) => match solution_token::decode_solution(raw) {
            Ok(placed) => SharedSolution::Placed(placed),
            Err(err) => {
                log::warn!("ignoring share link solution: {err}");
                SharedSolution::Absent
            }
        },
    };

    Ok(SharedPuzzle {
        grid,
        solution,
        edit_mode: params.get("e") == Some("1"),
        title: params.text("t")?,
    })
}

fn decode_legacy(params: &QueryParams<'_>, rows: &str) -> Result<SharedPuzzle, CodecError> {
    let rows = decode_component("grid", rows)?;
    let grid = LetterGrid::from_rows(rows.split(','))?;
    for (name, value) in [("width", grid.width()), ("height", grid.height())] {
        if value > MAX_DIMENSION {
            return Err(CodecError::InvalidDimension {
                name,
                value: value.to_string(),
            });
        }
    }

    let words = params
        .text("words")?
        .map(|words| {
            words
                .split(',')
                .map(|w| w.trim().to_uppercase())
                .filter(|w| !w.is_empty())
                .filter_map(|w| match w.parse::<Word>() {
                    Ok(word) => Some(word),
                    Err(err) => {
                        log::warn!("skipping legacy word {w:?}: {err}");
                        None
                    }
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    let solution = if words.is_empty() {
        SharedSolution::Absent
    } else {
        SharedSolution::WordsOnly(words)
    };

    Ok(SharedPuzzle {
        grid,
        solution,
        edit_mode: false,
        title: params.text("title")?,
    })
}

fn decode_component(name: &'static str, raw: &str) -> Result<String, CodecError> {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(Cow::into_owned)
        .map_err(|_| CodecError::InvalidEncoding { name })
}

/// Raw `key=value` pairs of a query string; the first occurrence of a key wins.
struct QueryParams<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> QueryParams<'a> {
    fn parse(input: &'a str) -> Self {
        let input = input.split('#').next().unwrap_or_default();
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None => input,
        };
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect();
        Self { pairs }
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    fn dimension(&self, name: &'static str) -> Result<usize, CodecError> {
        let raw = self.get(name).ok_or(CodecError::MissingDimension { name })?;
        match raw.parse::<usize>() {
            Ok(value) if (1..=MAX_DIMENSION).contains(&value) => Ok(value),
            _ => Err(CodecError::InvalidDimension {
                name,
                value: raw.to_owned(),
            }),
        }
    }

    fn optional_number(&self, name: &'static str) -> Result<Option<usize>, CodecError> {
        let Some(raw) = self.get(name).filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };
        raw.parse().map(Some).map_err(|_| CodecError::InvalidDimension {
            name,
            value: raw.to_owned(),
        })
    }

    fn text(&self, name: &'static str) -> Result<Option<String>, CodecError> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        let text = decode_component(name, raw)?;
        Ok((!text.is_empty()).then_some(text))
    }
}
