//! Base-62 grid tokens.
//!
//! The row-major letters of a grid are read as the digits of one base-26
//! numeral (`A = 0`, most significant first). That integer is written out in
//! base 62 using [`BASE62_ALPHABET`], most significant digit first.
//!
//! Re-basing drops leading `A`s, so the token alone is ambiguous: `"A"`,
//! `"AA"` and `""` all encode as `"0"`. The decoder therefore always takes the
//! letter count and left-pads with `A`.

use num_bigint::BigUint;
use num_traits::Zero as _;
use wordsearch_core::{Letter, LetterGrid};

use crate::CodecError;

/// Base-62 digits in value order: `0-9`, then `a-z`, then `A-Z`.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const LETTER_RADIX: u32 = 26;
const TOKEN_RADIX: u32 = 62;

/// Encodes letters as a base-62 token.
///
/// An empty slice or an all-`A` slice encodes as `"0"`.
///
/// # Examples
///
/// ```
/// use wordsearch_codec::{decode_letters, encode_letters};
/// use wordsearch_core::Letter;
///
/// let letters: Vec<Letter> = "HELLO".chars().map(|c| Letter::try_from(c).unwrap()).collect();
/// let token = encode_letters(&letters);
/// assert_eq!(decode_letters(&token, letters.len()).unwrap(), letters);
/// ```
#[must_use]
pub fn encode_letters(letters: &[Letter]) -> String {
    let digits: Vec<u8> = letters.iter().map(|l| l.index()).collect();
    let value = BigUint::from_radix_be(&digits, LETTER_RADIX).unwrap_or_default();
    if value.is_zero() {
        return "0".to_owned();
    }
    value
        .to_radix_be(TOKEN_RADIX)
        .into_iter()
        .map(|d| char::from(BASE62_ALPHABET[usize::from(d)]))
        .collect()
}

/// Decodes a base-62 token back into exactly `len` letters.
///
/// # Errors
///
/// Returns [`CodecError::EmptyGridToken`] for an empty token,
/// [`CodecError::InvalidGridToken`] if it contains a character outside the
/// base-62 alphabet, and [`CodecError::GridOverflow`] if its value needs more
/// than `len` letters.
pub fn decode_letters(token: &str, len: usize) -> Result<Vec<Letter>, CodecError> {
    if token.is_empty() {
        return Err(CodecError::EmptyGridToken);
    }
    let digits = token
        .chars()
        .map(|ch| {
            base62_value(ch).ok_or_else(|| CodecError::InvalidGridToken {
                token: token.to_owned(),
                ch,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let value = BigUint::from_radix_be(&digits, TOKEN_RADIX).unwrap_or_default();

    let significant = if value.is_zero() {
        Vec::new()
    } else {
        value.to_radix_be(LETTER_RADIX)
    };
    if significant.len() > len {
        return Err(CodecError::GridOverflow {
            token: token.to_owned(),
            cells: len,
        });
    }

    let mut letters = vec![Letter::A; len - significant.len()];
    letters.extend(significant.into_iter().filter_map(Letter::from_index));
    debug_assert_eq!(letters.len(), len);
    Ok(letters)
}

/// Encodes a grid's letters as a base-62 token.
///
/// The token does not carry the dimensions; they travel separately.
#[must_use]
pub fn encode_grid(grid: &LetterGrid) -> String {
    encode_letters(grid.letters())
}

/// Decodes a grid token for a `width` × `height` grid.
///
/// # Errors
///
/// Returns the errors of [`decode_letters`], and
/// [`CodecError::InvalidDimension`] if either dimension is zero.
pub fn decode_grid(token: &str, width: usize, height: usize) -> Result<LetterGrid, CodecError> {
    let invalid = |name, value: usize| CodecError::InvalidDimension {
        name,
        value: value.to_string(),
    };
    if width == 0 {
        return Err(invalid("w", width));
    }
    if height == 0 {
        return Err(invalid("h", height));
    }
    let cells = width
        .checked_mul(height)
        .ok_or_else(|| invalid("h", height))?;
    let letters = decode_letters(token, cells)?;
    LetterGrid::new(width, height, letters).map_err(|_| invalid("w", width))
}

fn base62_value(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'a'..='z' => Some(ch as u8 - b'a' + 10),
        'A'..='Z' => Some(ch as u8 - b'A' + 36),
        _ => None,
    }
}
