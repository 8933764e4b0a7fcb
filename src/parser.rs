use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::warn;

use crate::data::{Pos, BOARD_SIZE, TOKENS};
use crate::puzzle::Puzzle;
use crate::state::State;

const NUMBERS: usize = TOKENS * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    NotANumber { index: usize, text: String },
    TooFewNumbers { found: usize },
    /// `value` is kept as written, it might not fit any integer type.
    OutOfBounds { token: usize, axis: Axis, value: String },
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::NotANumber { index, ref text } => {
                write!(f, "Value {} is not an integer: '{}'", index, text)
            }
            ParserErr::TooFewNumbers { found } => write!(
                f,
                "Expected {} integers ({} knights, x and y each), found {}",
                NUMBERS, TOKENS, found
            ),
            ParserErr::OutOfBounds {
                token,
                axis,
                ref value,
            } => write!(
                f,
                "Knight {} has {} = {}, must be between 0 and {}",
                token,
                axis,
                value,
                BOARD_SIZE - 1
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let goal = parse_goal(s)?;
        Ok(Puzzle::new(State::initial(), goal))
    }
}

/// Parses 8 whitespace separated integers - x and y of each knight in order.
///
/// Anything after the first 8 is ignored.
pub fn parse_goal(input: &str) -> Result<State, ParserErr> {
    let mut numbers = Vec::with_capacity(NUMBERS);
    let mut words = input.split_whitespace();

    for (index, word) in words.by_ref().take(NUMBERS).enumerate() {
        // too large values are still integers, they fail the bounds check below
        if !is_integer(word) {
            return Err(ParserErr::NotANumber {
                index,
                text: word.to_string(),
            });
        }
        numbers.push(word);
    }
    if numbers.len() < NUMBERS {
        return Err(ParserErr::TooFewNumbers {
            found: numbers.len(),
        });
    }

    let ignored = words.count();
    if ignored > 0 {
        warn!("Ignoring {} values after the first {}", ignored, NUMBERS);
    }

    let mut tokens = [Pos::new(0, 0); TOKENS];
    for (token, pair) in numbers.chunks(2).enumerate() {
        let x = coordinate(token, Axis::X, pair[0])?;
        let y = coordinate(token, Axis::Y, pair[1])?;
        tokens[token] = Pos::new(x, y);
    }
    Ok(State::new(tokens))
}

fn is_integer(word: &str) -> bool {
    let digits = word.trim_start_matches(|c: char| c == '-' || c == '+');
    // at most one sign
    word.len() - digits.len() <= 1
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
}

fn coordinate(token: usize, axis: Axis, word: &str) -> Result<i8, ParserErr> {
    match word.parse::<i64>() {
        Ok(value) if value >= 0 && value < i64::from(BOARD_SIZE) => Ok(value as i8),
        _ => Err(ParserErr::OutOfBounds {
            token,
            axis,
            value: word.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_goal() {
        let goal = parse_goal("2 2\n2 0\n0 2\n0 0\n").unwrap();
        assert_eq!(
            goal,
            State::new([Pos::new(2, 2), Pos::new(2, 0), Pos::new(0, 2), Pos::new(0, 0)])
        );
    }

    #[test]
    fn any_whitespace() {
        let goal = parse_goal("  0\t0 0   2\r\n2 0 2 2").unwrap();
        assert_eq!(goal, State::initial());
    }

    #[test]
    fn extra_values_ignored() {
        let goal = parse_goal("0 0 0 2 2 0 2 2 7 oops").unwrap();
        assert_eq!(goal, State::initial());
    }

    #[test]
    fn too_few() {
        assert_eq!(
            parse_goal("0 0 0 2 2 0 2").unwrap_err(),
            ParserErr::TooFewNumbers { found: 7 }
        );
        assert_eq!(
            parse_goal("").unwrap_err(),
            ParserErr::TooFewNumbers { found: 0 }
        );
    }

    #[test]
    fn not_a_number() {
        assert_eq!(
            parse_goal("0 0 0 x 2 0 2 2").unwrap_err(),
            ParserErr::NotANumber {
                index: 3,
                text: "x".to_string()
            }
        );
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            parse_goal("3 0 0 2 2 0 2 2").unwrap_err(),
            ParserErr::OutOfBounds {
                token: 0,
                axis: Axis::X,
                value: "3".to_string()
            }
        );
        assert_eq!(
            parse_goal("0 0 0 2 2 -1 2 2").unwrap_err(),
            ParserErr::OutOfBounds {
                token: 2,
                axis: Axis::Y,
                value: "-1".to_string()
            }
        );
        // doesn't overflow into a valid coordinate
        assert_eq!(
            parse_goal("0 0 0 2 2 0 2 259").unwrap_err(),
            ParserErr::OutOfBounds {
                token: 3,
                axis: Axis::Y,
                value: "259".to_string()
            }
        );
    }

    #[test]
    fn huge_values_are_out_of_bounds() {
        assert_eq!(
            parse_goal("0 0 0 2 2 0 2 99999999999999999999").unwrap_err(),
            ParserErr::OutOfBounds {
                token: 3,
                axis: Axis::Y,
                value: "99999999999999999999".to_string()
            }
        );
        assert_eq!(
            parse_goal("-99999999999999999999 0 0 2 2 0 2 2")
                .unwrap_err()
                .to_string(),
            "Knight 0 has x = -99999999999999999999, must be between 0 and 2"
        );
        // signs alone or doubled are still not numbers
        assert_eq!(
            parse_goal("0 0 0 2 2 0 2 --1").unwrap_err(),
            ParserErr::NotANumber {
                index: 7,
                text: "--1".to_string()
            }
        );
        assert_eq!(
            parse_goal("+ 0 0 2 2 0 2 2").unwrap_err(),
            ParserErr::NotANumber {
                index: 0,
                text: "+".to_string()
            }
        );
        assert_eq!(parse_goal("+0 0 0 2 2 0 2 2").unwrap(), State::initial());
    }

    #[test]
    fn error_messages() {
        let err = parse_goal("0 0 0 2 2 0 3 2").unwrap_err();
        assert_eq!(err.to_string(), "Knight 3 has x = 3, must be between 0 and 2");
        let err = parse_goal("1 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected 8 integers (4 knights, x and y each), found 2"
        );
    }

    #[test]
    fn parsing_puzzle() {
        let puzzle: Puzzle = "1 1 1 1 1 1 1 1".parse().unwrap();
        assert_eq!(puzzle.initial, State::initial());
        assert_eq!(puzzle.goal, State::new([Pos::new(1, 1); 4]));
    }
}
