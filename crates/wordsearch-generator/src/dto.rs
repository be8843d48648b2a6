//! Wire types exchanged with a generator.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use wordsearch_core::{Direction, LetterGrid, PlacedWord, Placement, Position, Word};

use crate::{GeneratedPuzzle, GenerationError};

/// A generation request: `{"words": "SUN,MOON", "width": 4, "height": 4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Comma-joined uppercase words.
    pub words: String,
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
}

impl GenerateRequest {
    /// Creates a request, joining `words` with commas.
    #[must_use]
    pub fn new<I>(words: I, width: usize, height: usize) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let words = words
            .into_iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self {
            words,
            width,
            height,
        }
    }
}

/// A generator's answer: either a grid with placements or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(untagged)]
pub enum GenerateResponse {
    /// `{"error": "..."}`
    Failure {
        /// Human-readable message.
        error: String,
    },
    /// `{"grid": "S U N\n...", "solution": [...]}`
    Success {
        /// Rows separated by newlines, letters separated by spaces.
        grid: String,
        /// Placement of every word.
        #[serde(default)]
        solution: Vec<SolutionDto>,
    },
}

/// One placed word: `{"word": "SUN", "position": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionDto {
    /// The word.
    pub word: String,
    /// Start cell and direction.
    pub position: PositionDto,
}

/// A start cell and direction: `{"x": 0, "y": 0, "direction": {...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDto {
    /// Column of the first letter.
    pub x: usize,
    /// Row of the first letter.
    pub y: usize,
    /// Reading direction.
    pub direction: DirectionDto,
}

/// A unit step: `{"dx": 1, "dy": 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionDto {
    /// Column step.
    pub dx: i64,
    /// Row step.
    pub dy: i64,
}

impl From<&PlacedWord> for SolutionDto {
    fn from(placed: &PlacedWord) -> Self {
        let Placement { start, direction } = placed.placement;
        Self {
            word: placed.word.to_string(),
            position: PositionDto {
                x: start.x,
                y: start.y,
                direction: DirectionDto {
                    dx: i64::from(direction.dx()),
                    dy: i64::from(direction.dy()),
                },
            },
        }
    }
}

impl TryFrom<&SolutionDto> for PlacedWord {
    type Error = GenerationError;

    fn try_from(dto: &SolutionDto) -> Result<Self, Self::Error> {
        let word: Word = dto
            .word
            .parse()
            .map_err(|source| GenerationError::InvalidWord {
                word: dto.word.clone(),
                source,
            })?;
        let DirectionDto { dx, dy } = dto.position.direction;
        let direction =
            Direction::from_delta(dx, dy).ok_or_else(|| GenerationError::InvalidDirection {
                word: dto.word.clone(),
                dx,
                dy,
            })?;
        Ok(PlacedWord::new(
            word,
            Placement::new(Position::new(dto.position.x, dto.position.y), direction),
        ))
    }
}

impl GenerateResponse {
    /// Builds a success response from a generated puzzle.
    ///
    /// The grid is written in the wire layout: letters separated by spaces,
    /// one row per line.
    #[must_use]
    pub fn from_puzzle(puzzle: &GeneratedPuzzle) -> Self {
        let grid = puzzle
            .grid
            .rows()
            .map(|row| {
                let letters: Vec<String> = row.iter().map(ToString::to_string).collect();
                letters.join(" ") + "\n"
            })
            .collect();
        Self::Success {
            grid,
            solution: puzzle.solution.iter().map(SolutionDto::from).collect(),
        }
    }

    /// Validates the response and converts it into a puzzle.
    ///
    /// Blank lines and repeated spaces in the grid block are ignored.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Service`] for an error response.
    /// - [`GenerationError::NoSolution`] for an empty grid.
    /// - [`GenerationError::InvalidGrid`] for ragged rows or non-letters.
    /// - [`GenerationError::InvalidWord`] or [`GenerationError::InvalidDirection`]
    ///   for a bad placement.
    pub fn into_puzzle(self) -> Result<GeneratedPuzzle, GenerationError> {
        let (grid, solution) = match self {
            Self::Failure { error } => return Err(GenerationError::Service { message: error }),
            Self::Success { grid, solution } => (grid, solution),
        };

        let rows: Vec<String> = grid
            .lines()
            .map(|line| line.split_whitespace().collect::<String>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GenerationError::NoSolution);
        }
        let grid = LetterGrid::from_rows(&rows)?;
        let solution = solution
            .iter()
            .map(PlacedWord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GeneratedPuzzle { grid, solution })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = GenerateRequest::new(["SUN", "MOON"], 4, 4);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"words":"SUN,MOON","width":4,"height":4}"#
        );
    }

    #[test]
    fn test_parse_responses() {
        let ok: GenerateResponse = serde_json::from_str(
            r#"{"grid": "S U N X\n\nM  O O N\n", "solution": [
                {"word": "MOON", "position": {"x": 3, "y": 1, "direction": {"dx": -1, "dy": 0}}}
            ]}"#,
        )
        .unwrap();
        let puzzle = ok.into_puzzle().unwrap();
        assert_eq!(puzzle.grid.to_string(), "SUNX\nMOON");
        assert_eq!(puzzle.solution[0].to_string(), "MOON at (3, 1) Left");

        let err: GenerateResponse = serde_json::from_str(r#"{"error": "too many words"}"#).unwrap();
        assert!(err.is_failure());
        assert_eq!(
            err.into_puzzle().unwrap_err().to_string(),
            "too many words"
        );
    }

    #[test]
    fn test_empty_grid_is_no_solution() {
        let empty = GenerateResponse::Success {
            grid: "\n  \n".to_owned(),
            solution: Vec::new(),
        };
        let err = empty.into_puzzle().unwrap_err();
        assert!(err.is_no_solution());
        assert_eq!(
            err.to_string(),
            "No result found.. try a bigger grid or less words."
        );
    }

    #[test]
    fn test_invalid_placements() {
        let with_solution = |word: &str, dx, dy| GenerateResponse::Success {
            grid: "A B\nC D".to_owned(),
            solution: vec![SolutionDto {
                word: word.to_owned(),
                position: PositionDto {
                    x: 0,
                    y: 0,
                    direction: DirectionDto { dx, dy },
                },
            }],
        };
        assert!(with_solution("ab", 1, 0).into_puzzle().unwrap_err().is_invalid_word());
        assert!(
            with_solution("AB", 0, 0)
                .into_puzzle()
                .unwrap_err()
                .is_invalid_direction()
        );
        assert!(
            GenerateResponse::Success {
                grid: "A B\nC".to_owned(),
                solution: Vec::new(),
            }
            .into_puzzle()
            .unwrap_err()
            .is_invalid_grid()
        );
    }

    #[test]
    fn test_from_puzzle_matches_wire_layout() {
        let response = GenerateResponse::Success {
            grid: "S U N\nA B C\n".to_owned(),
            solution: vec![SolutionDto {
                word: "SUN".to_owned(),
                position: PositionDto {
                    x: 0,
                    y: 0,
                    direction: DirectionDto { dx: 1, dy: 0 },
                },
            }],
        };
        let puzzle = response.clone().into_puzzle().unwrap();
        assert_eq!(GenerateResponse::from_puzzle(&puzzle), response);
    }
}
