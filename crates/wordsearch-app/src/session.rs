//! The puzzle session: what is on screen and what a share link carries.

use serde::Serialize;
use wordsearch_codec::{ShareLink, encode_query, share_url};
use wordsearch_game::Puzzle;

use crate::settings::ShareSettings;

pub const SHARE_TITLE: &str = "Word Search";
pub const SHARE_TEXT: &str = "Check out this word search I generated!";

/// Payload for a platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareData {
    pub title: &'static str,
    pub text: &'static str,
    pub url: String,
}

/// A grid with its answer key, title, mode, and last computed share URL.
///
/// A session without a puzzle is in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    puzzle: Option<Puzzle>,
    title: Option<String>,
    edit_mode: bool,
    share_url: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::empty()
    }
}

impl Session {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            puzzle: None,
            title: None,
            edit_mode: true,
            share_url: None,
        }
    }

    /// Creates a session around `puzzle` and computes its share URL.
    #[must_use]
    pub fn new(
        puzzle: Puzzle,
        title: Option<String>,
        edit_mode: bool,
        settings: &ShareSettings,
    ) -> Self {
        let mut session = Self {
            puzzle: Some(puzzle),
            title: title.filter(|t| !t.is_empty()),
            edit_mode,
            share_url: None,
        };
        session.refresh_share_url(settings);
        session
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub(crate) fn puzzle_mut(&mut self) -> Option<&mut Puzzle> {
        self.puzzle.as_mut()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Returns the share URL, or `None` if there is no puzzle or it is too
    /// large to share.
    #[must_use]
    pub fn share_url(&self) -> Option<&str> {
        self.share_url.as_deref()
    }

    #[must_use]
    pub fn share_data(&self) -> Option<ShareData> {
        self.share_url.as_ref().map(|url| ShareData {
            title: SHARE_TITLE,
            text: SHARE_TEXT,
            url: url.clone(),
        })
    }

    pub(crate) fn set_title(&mut self, title: Option<String>, settings: &ShareSettings) {
        self.title = title.filter(|t| !t.is_empty());
        self.refresh_share_url(settings);
    }

    pub(crate) fn set_edit_mode(&mut self, edit_mode: bool, settings: &ShareSettings) {
        self.edit_mode = edit_mode;
        self.refresh_share_url(settings);
    }

    fn refresh_share_url(&mut self, settings: &ShareSettings) {
        self.share_url = self.puzzle.as_ref().and_then(|puzzle| {
            let query = encode_query(
                puzzle.grid(),
                puzzle.placed_words(),
                self.edit_mode,
                self.title.as_deref(),
            );
            match share_url(&settings.base_url, &query, settings.max_url_len) {
                ShareLink::Ready(url) => Some(url),
                ShareLink::TooLarge { len, max_len } => {
                    log::info!("puzzle too large to share ({len} >= {max_len})");
                    None
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use wordsearch_core::{Direction, LetterGrid, PlacedWord, Placement, Position};

    use super::*;

    fn puzzle() -> Puzzle {
        let grid = LetterGrid::from_rows(["SUNX", "MOON"]).unwrap();
        let sun = PlacedWord::new(
            "SUN".parse().unwrap(),
            Placement::new(Position::new(0, 0), Direction::Right),
        );
        Puzzle::new(grid, vec![sun]).unwrap()
    }

    #[test]
    fn test_empty_session() {
        let session = Session::empty();
        assert!(session.is_edit_mode());
        assert!(session.puzzle().is_none());
        assert_eq!(session.share_url(), None);
        assert_eq!(session.share_data(), None);
    }

    #[test]
    fn test_share_url_tracks_changes() {
        let settings = ShareSettings::default();
        let mut session = Session::new(puzzle(), Some(String::new()), false, &settings);
        assert_eq!(session.title(), None);
        let url = session.share_url().unwrap().to_owned();
        assert!(url.starts_with(&settings.base_url));
        assert!(url.contains("&e=0&s=SUN_0_0_1_0"));

        session.set_title(Some("Sky".to_owned()), &settings);
        assert!(session.share_url().unwrap().ends_with("&t=Sky"));

        session.set_edit_mode(true, &settings);
        assert!(session.share_url().unwrap().contains("&e=1"));

        let data = session.share_data().unwrap();
        assert_eq!(data.title, "Word Search");
        assert_eq!(data.text, "Check out this word search I generated!");
    }

    #[test]
    fn test_oversized_puzzle_has_no_url() {
        let settings = ShareSettings {
            max_url_len: 10,
            ..ShareSettings::default()
        };
        let session = Session::new(puzzle(), None, false, &settings);
        assert!(session.puzzle().is_some());
        assert_eq!(session.share_url(), None);
        assert_eq!(session.share_data(), None);
    }
}
