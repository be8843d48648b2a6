//! Text form of pointer gestures, one per line: `press X Y`, `move X Y`,
//! `release`, `cancel`.

use std::str::FromStr;

use wordsearch_core::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Press(Position),
    Move(Position),
    Release,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid gesture {line:?}: expected `press X Y`, `move X Y`, `release` or `cancel`")]
pub struct GestureParseError {
    line: String,
}

impl FromStr for Gesture {
    type Err = GestureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GestureParseError { line: s.to_owned() };
        let fields: Vec<&str> = s.split_whitespace().collect();
        let gesture = match fields.as_slice() {
            ["release"] => Self::Release,
            ["cancel"] => Self::Cancel,
            [verb @ ("press" | "move"), x, y] => {
                let x = x.parse().map_err(|_| err())?;
                let y = y.parse().map_err(|_| err())?;
                let pos = Position::new(x, y);
                if *verb == "press" {
                    Self::Press(pos)
                } else {
                    Self::Move(pos)
                }
            }
            _ => return Err(err()),
        };
        Ok(gesture)
    }
}
