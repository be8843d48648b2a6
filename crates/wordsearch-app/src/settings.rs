use std::ops::RangeInclusive;

use wordsearch_codec::DEFAULT_MAX_URL_LEN;

#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub share: ShareSettings,
    pub input: InputSettings,
}

#[derive(Debug, Clone)]
pub struct ShareSettings {
    /// Base URL that share queries are appended to.
    pub base_url: String,
    /// Share URLs must be strictly shorter than this.
    pub max_url_len: usize,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            base_url: "https://wordsearch.example/".to_owned(),
            max_url_len: DEFAULT_MAX_URL_LEN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputSettings {
    pub min_word_len: usize,
    pub dimensions: RangeInclusive<usize>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            dimensions: 2..=50,
        }
    }
}
