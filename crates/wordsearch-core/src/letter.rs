//! Grid letter representation.

use std::fmt::{self, Display};

/// A grid letter in the range `A`-`Z`.
///
/// Letters carry their alphabet index (`A = 0`, `Z = 25`), which is the digit
/// value used by the base-26 grid codec.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Letter;
///
/// let letter = Letter::try_from('C').unwrap();
/// assert_eq!(letter.index(), 2);
/// assert_eq!(letter.to_char(), 'C');
///
/// // Lowercase and non-letters are rejected
/// assert!(Letter::try_from('c').is_err());
/// assert!(Letter::try_from('1').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error returned when a character is not an uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid letter {ch:?}: expected A-Z")]
pub struct LetterError {
    /// The rejected character.
    pub ch: char,
}

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: u8 = 26;

    /// The letter `A`, digit value zero.
    pub const A: Self = Self(0);

    /// The letter `Z`, the largest digit value.
    pub const Z: Self = Self(Self::COUNT - 1);

    /// Creates a letter from its alphabet index (`0` for `A`).
    ///
    /// Returns `None` if `index` is 26 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::Letter;
    ///
    /// assert_eq!(Letter::from_index(0), Some(Letter::A));
    /// assert_eq!(Letter::from_index(25), Some(Letter::Z));
    /// assert_eq!(Letter::from_index(26), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the alphabet index of this letter (`A = 0`).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns this letter as an uppercase `char`.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_uppercase() {
            Ok(Self(ch as u8 - b'A'))
        } else {
            Err(LetterError { ch })
        }
    }
}

impl TryFrom<u8> for Letter {
    type Error = LetterError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::try_from(char::from(byte))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_char(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Letter::try_from('A'), Ok(Letter::A));
        assert_eq!(Letter::try_from('Z'), Ok(Letter::Z));
        assert_eq!(Letter::A.index(), 0);
        assert_eq!(Letter::Z.index(), 25);

        for index in 0..Letter::COUNT {
            let letter = Letter::from_index(index).unwrap();
            assert_eq!(Letter::try_from(letter.to_char()), Ok(letter));
            assert_eq!(letter.index(), index);
        }

        assert_eq!(format!("{}", Letter::A), "A");
        let ch: char = Letter::Z.into();
        assert_eq!(ch, 'Z');
    }

    #[test]
    fn test_rejects_non_letters() {
        for ch in ['a', 'z', '0', ' ', '_', '.', 'É'] {
            assert_eq!(Letter::try_from(ch), Err(LetterError { ch }));
        }
        assert!(Letter::try_from(b'@').is_err());
        assert!(Letter::try_from(b'[').is_err());
        assert_eq!(Letter::from_index(Letter::COUNT), None);
    }

    #[test]
    fn test_error_display() {
        let err = Letter::try_from('x').unwrap_err();
        assert_eq!(err.to_string(), "invalid letter 'x': expected A-Z");
    }
}
