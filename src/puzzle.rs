use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::board_formatter::BoardFormatter;
use crate::config::Format;
use crate::state::State;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub initial: State,
    pub goal: State,
}

impl Puzzle {
    pub fn new(initial: State, goal: State) -> Self {
        Puzzle { initial, goal }
    }

    pub fn format_initial(&self, format: Format) -> BoardFormatter<'_> {
        BoardFormatter::new(&self.initial, format)
    }

    pub fn format_goal(&self, format: Format) -> BoardFormatter<'_> {
        BoardFormatter::new(&self.goal, format)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial:")?;
        writeln!(f, "{}", self.format_initial(Format::Board))?;
        writeln!(f, "Goal:")?;
        write!(f, "{}", self.format_goal(Format::Board))
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.initial, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_puzzle() {
        let puzzle: Puzzle = "2 2 2 0 0 2 0 0".parse().unwrap();
        let expected = r"
Initial:
0.1
...
2.3

Goal:
3.2
...
1.0
"
        .trim_start_matches('\n');
        assert_eq!(puzzle.to_string(), expected);
        assert_eq!(
            format!("{:?}", puzzle),
            "[[0, 0], [0, 2], [2, 0], [2, 2]] -> [[2, 2], [2, 0], [0, 2], [0, 0]]"
        );
    }
}
