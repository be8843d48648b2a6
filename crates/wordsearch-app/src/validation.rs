//! Checks on user input before anything is sent to a generator.

use wordsearch_core::Word;
use wordsearch_generator::GenerateRequest;

use crate::settings::InputSettings;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputValidationError {
    #[display("Please enter some words to generate a grid.")]
    NoWords,
    #[display("{word} is too short: words need at least {min_len} letters")]
    WordTooShort { word: String, min_len: usize },
    #[display("{word} is part of {container}")]
    WordInsideWord { word: String, container: String },
    #[display("{name} must be between {min} and {max}, got {value}")]
    DimensionOutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Words and dimensions that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub words: Vec<Word>,
    pub width: usize,
    pub height: usize,
}

impl ValidatedInput {
    #[must_use]
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest::new(&self.words, self.width, self.height)
    }
}

/// Splits raw word input into sorted, unique, uppercase words.
///
/// Words are separated by newlines or commas. Characters outside `A`-`Z`
/// (after uppercasing) are dropped, so `"ice cream"` becomes `ICECREAM`.
#[must_use]
pub fn normalize_words(input: &str) -> Vec<String> {
    let mut words: Vec<String> = input
        .split(['\n', ','])
        .map(|w| {
            w.trim()
                .to_uppercase()
                .chars()
                .filter(char::is_ascii_uppercase)
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect();
    words.sort();
    words.dedup();
    words
}

/// Validates word input and optional dimensions.
///
/// Omitted dimensions default to the length of the longest word, clamped to
/// the allowed range.
pub fn validate(
    input: &str,
    width: Option<usize>,
    height: Option<usize>,
    settings: &InputSettings,
) -> Result<ValidatedInput, InputValidationError> {
    let words = normalize_words(input);
    if let Some(word) = words.iter().find(|w| w.len() < settings.min_word_len) {
        return Err(InputValidationError::WordTooShort {
            word: word.clone(),
            min_len: settings.min_word_len,
        });
    }
    for word in &words {
        if let Some(container) = words.iter().find(|c| *c != word && c.contains(word.as_str())) {
            return Err(InputValidationError::WordInsideWord {
                word: word.clone(),
                container: container.clone(),
            });
        }
    }
    if words.is_empty() {
        return Err(InputValidationError::NoWords);
    }

    let longest = words.iter().map(String::len).max().unwrap_or_default();
    let default_dim = longest.clamp(*settings.dimensions.start(), *settings.dimensions.end());
    let width = check_dimension("width", width, default_dim, settings)?;
    let height = check_dimension("height", height, default_dim, settings)?;

    let words = words
        .iter()
        .filter_map(|w| w.parse::<Word>().ok())
        .collect();
    Ok(ValidatedInput {
        words,
        width,
        height,
    })
}

fn check_dimension(
    name: &'static str,
    value: Option<usize>,
    default: usize,
    settings: &InputSettings,
) -> Result<usize, InputValidationError> {
    let Some(value) = value else {
        return Ok(default);
    };
    if settings.dimensions.contains(&value) {
        Ok(value)
    } else {
        Err(InputValidationError::DimensionOutOfRange {
            name,
            value,
            min: *settings.dimensions.start(),
            max: *settings.dimensions.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str) -> Result<ValidatedInput, InputValidationError> {
        validate(input, None, None, &InputSettings::default())
    }

    #[test]
    fn test_normalize_words() {
        assert_eq!(
            normalize_words("moon, Sun\n ice cream\n\nsun,,x-ray"),
            ["ICECREAM", "MOON", "SUN", "XRAY"]
        );
        assert!(normalize_words(" , \n123").is_empty());
    }

    #[test]
    fn test_valid_input_defaults_dimensions() {
        let input = check("sun\nmoon").unwrap();
        assert_eq!(input.words.len(), 2);
        assert_eq!(input.words[0].to_string(), "MOON");
        assert_eq!((input.width, input.height), (4, 4));
        assert_eq!(input.to_request().words, "MOON,SUN");

        // Defaults never drop below the minimum dimension.
        let input = check("ab").unwrap();
        assert_eq!((input.width, input.height), (2, 2));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            check("cat, catfish"),
            Err(InputValidationError::WordInsideWord {
                word: "CAT".to_owned(),
                container: "CATFISH".to_owned()
            })
        );
        assert_eq!(
            check("a, moon"),
            Err(InputValidationError::WordTooShort {
                word: "A".to_owned(),
                min_len: 2
            })
        );
        assert_eq!(check(" \n,"), Err(InputValidationError::NoWords));
        assert_eq!(
            validate("sun", Some(51), None, &InputSettings::default()),
            Err(InputValidationError::DimensionOutOfRange {
                name: "width",
                value: 51,
                min: 2,
                max: 50
            })
        );
        assert!(validate("sun", Some(10), Some(1), &InputSettings::default()).is_err());
    }

    #[test]
    fn test_duplicates_are_not_substrings() {
        let input = check("sun, SUN, Sun").unwrap();
        assert_eq!(input.words.len(), 1);
    }
}
