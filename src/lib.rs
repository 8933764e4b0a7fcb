// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board_formatter;
pub mod config;
pub mod data;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solver;
pub mod state;

mod fs;

use std::error::Error;

use crate::puzzle::Puzzle;
use crate::solver::{Observer, SolverOk};

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

impl LoadPuzzle for str {
    /// Reads the goal from a file, the initial state is always the same.
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>> {
        let contents = fs::read_file(self)?;
        Ok(contents.parse::<Puzzle>()?)
    }
}

pub trait Solve {
    fn solve(&self) -> SolverOk;

    fn solve_with(&self, observer: &mut dyn Observer) -> SolverOk;
}
