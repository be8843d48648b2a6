//! Words hidden in a grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Letter, LetterError};

/// A non-empty word made of the letters `A`-`Z`.
///
/// Words are stored as [`Letter`]s, so comparisons are exact and a word can
/// never contain the separators used by the share codec.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
///
/// let word: Word = "MOON".parse().unwrap();
/// assert_eq!(word.len(), 4);
/// assert_eq!(word.reversed().to_string(), "NOOM");
///
/// let part: Word = "OO".parse().unwrap();
/// assert!(word.contains(&part));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Vec<Letter>);

/// Errors returned when parsing a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word has no letters.
    #[display("word is empty")]
    Empty,
    /// The word contains a character outside `A`-`Z`.
    #[display("invalid character {ch:?} at index {index}")]
    InvalidLetter {
        /// Byte index of the character.
        index: usize,
        /// The rejected character.
        ch: char,
    },
}

impl Word {
    /// Creates a word from its letters.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] if `letters` is empty.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self, WordError> {
        if letters.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self(letters))
    }

    /// Returns the letters of this word.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// Returns the number of letters in this word. Always at least one.
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns this word with its letters in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Returns whether `other` occurs as a contiguous run of letters in this word.
    ///
    /// A word contains itself.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.len() <= self.len() && self.0.windows(other.len()).any(|w| w == other.letters())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .char_indices()
            .map(|(index, ch)| {
                Letter::try_from(ch).map_err(|LetterError { ch }| WordError::InvalidLetter { index, ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(letters)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}

impl From<&Word> for String {
    fn from(word: &Word) -> Self {
        word.0.iter().map(|l| l.to_char()).collect()
    }
}
