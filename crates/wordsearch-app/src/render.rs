//! Plain-text rendering of a session for the terminal.

use std::fmt::Write as _;

use crate::session::Session;

/// Renders the title, the grid (letters separated by spaces), the word list
/// with found marks, and the share URL.
#[must_use]
pub fn render_session(session: &Session) -> String {
    let mut out = String::new();
    let Some(puzzle) = session.puzzle() else {
        out.push_str("(no puzzle)\n");
        return out;
    };

    if let Some(title) = session.title() {
        let _ = writeln!(out, "{title}\n");
    }
    for row in puzzle.grid().rows() {
        let letters: Vec<String> = row.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "{}", letters.join(" "));
    }

    if !puzzle.entries().is_empty() {
        let _ = writeln!(
            out,
            "\nWords ({}/{} found):",
            puzzle.found_count(),
            puzzle.entries().len()
        );
        for entry in puzzle.entries() {
            let mark = if entry.is_found() { 'x' } else { ' ' };
            let _ = writeln!(out, "  [{mark}] {}", entry.word());
        }
    }

    match session.share_url() {
        Some(url) => {
            let _ = writeln!(out, "\n{url}");
        }
        None => out.push_str("\n(puzzle too large to share)\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use wordsearch_core::{Direction, LetterGrid, PlacedWord, Placement, Position};
    use wordsearch_game::Puzzle;

    use super::*;
    use crate::settings::ShareSettings;

    #[test]
    fn test_render() {
        assert_eq!(render_session(&Session::empty()), "(no puzzle)\n");

        let grid = LetterGrid::from_rows(["SUN", "ABC"]).unwrap();
        let sun = PlacedWord::new(
            "SUN".parse().unwrap(),
            Placement::new(Position::new(0, 0), Direction::Right),
        );
        let mut puzzle = Puzzle::new(grid, vec![sun]).unwrap();
        puzzle.mark_found(0);
        let settings = ShareSettings {
            base_url: "https://example.com/".to_owned(),
            ..ShareSettings::default()
        };
        let session = Session::new(puzzle, Some("Sky".to_owned()), false, &settings);
        let text = render_session(&session);
        assert!(text.starts_with("Sky\n\nS U N\nA B C\n\nWords (1/1 found):\n  [x] SUN\n\nhttps://example.com/?g="));
    }
}
