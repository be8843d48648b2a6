//! Solution tokens: `word_x_y_dx_dy` entries joined by `.`.
//!
//! Words only contain `A`-`Z`, so neither separator can occur inside a field.

use wordsearch_core::{Direction, PlacedWord, Placement, Position, Word};

use crate::CodecError;

/// Separates solution entries.
pub const ENTRY_SEPARATOR: char = '.';

/// Separates the fields of one solution entry.
pub const FIELD_SEPARATOR: char = '_';

/// Encodes placed words as a solution token.
///
/// # Examples
///
/// ```
/// use wordsearch_codec::encode_solution;
/// use wordsearch_core::{Direction, PlacedWord, Placement, Position};
///
/// let moon = PlacedWord::new(
///     "MOON".parse().unwrap(),
///     Placement::new(Position::new(3, 1), Direction::Left),
/// );
/// assert_eq!(encode_solution([&moon]), "MOON_3_1_-1_0");
/// ```
#[must_use]
pub fn encode_solution<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a PlacedWord>,
{
    let mut out = String::new();
    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(ENTRY_SEPARATOR);
        }
        let PlacedWord { word, placement } = entry;
        let sep = FIELD_SEPARATOR;
        out.push_str(&format!(
            "{word}{sep}{}{sep}{}{sep}{}{sep}{}",
            placement.start.x,
            placement.start.y,
            placement.direction.dx(),
            placement.direction.dy(),
        ));
    }
    out
}

/// Decodes a solution token.
///
/// Bounds are not checked against any grid. A single malformed entry fails the
/// whole token so that a corrupted link never yields a partial answer key.
///
/// # Errors
///
/// Returns [`CodecError::MalformedSolutionEntry`] for an entry without exactly
/// five fields, with an invalid word, with non-numeric coordinates, or with a
/// step that is not one of the 8 directions.
pub fn decode_solution(token: &str) -> Result<Vec<PlacedWord>, CodecError> {
    token.split(ENTRY_SEPARATOR).map(decode_entry).collect()
}

fn decode_entry(entry: &str) -> Result<PlacedWord, CodecError> {
    let malformed = || CodecError::MalformedSolutionEntry {
        entry: entry.to_owned(),
    };

    let fields: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
    let &[word, x, y, dx, dy] = fields.as_slice() else {
        return Err(malformed());
    };

    let word: Word = word.parse().map_err(|_| malformed())?;
    let x: usize = x.parse().map_err(|_| malformed())?;
    let y: usize = y.parse().map_err(|_| malformed())?;
    let dx: i64 = dx.parse().map_err(|_| malformed())?;
    let dy: i64 = dy.parse().map_err(|_| malformed())?;
    let direction = Direction::from_delta(dx, dy).ok_or_else(malformed)?;

    Ok(PlacedWord::new(
        word,
        Placement::new(Position::new(x, y), direction),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(word: &str, x: usize, y: usize, direction: Direction) -> PlacedWord {
        PlacedWord::new(
            word.parse().unwrap(),
            Placement::new(Position::new(x, y), direction),
        )
    }

    #[test]
    fn test_encode_entries() {
        let entries = [
            placed("SUN", 0, 0, Direction::Right),
            placed("MOON", 3, 1, Direction::Left),
            placed("STAR", 4, 4, Direction::UpLeft),
        ];
        assert_eq!(
            encode_solution(&entries),
            "SUN_0_0_1_0.MOON_3_1_-1_0.STAR_4_4_-1_-1"
        );
        assert_eq!(encode_solution(&Vec::<PlacedWord>::new()), "");
    }

    #[test]
    fn test_decode_entries() {
        let decoded = decode_solution("SUN_0_0_1_0.MOON_3_1_-1_0").unwrap();
        assert_eq!(
            decoded,
            [
                placed("SUN", 0, 0, Direction::Right),
                placed("MOON", 3, 1, Direction::Left),
            ]
        );
    }

    #[test]
    fn test_decode_does_not_check_bounds() {
        let decoded = decode_solution("SUN_99_99_1_1").unwrap();
        assert_eq!(decoded, [placed("SUN", 99, 99, Direction::DownRight)]);
    }

    #[test]
    fn test_malformed_entry_rejects_whole_token() {
        for token in [
            "",
            "SUN_0_0_1",
            "SUN_0_0_1_0_7",
            "SUN_a_0_1_0",
            "SUN_-1_0_1_0",
            "SUN_0_0_0_0",
            "SUN_0_0_2_0",
            "sun_0_0_1_0",
            "SUN_0_0_1_0.",
            "SUN_0_0_1_0.MOON_3_1_x_0",
        ] {
            assert!(
                matches!(
                    decode_solution(token),
                    Err(CodecError::MalformedSolutionEntry { .. })
                ),
                "{token:?} should be rejected"
            );
        }
    }
}
