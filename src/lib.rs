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

pub mod api;
pub mod config;
pub mod data;
pub mod heuristic;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;

use std::error::Error;

use crate::api::SolveRequest;
use crate::config::Config;
use crate::puzzle::Puzzle;
use crate::solver::SearchReport;

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

/// Reads a JSON solve request.
pub trait LoadRequest {
    fn load_request(&self) -> Result<SolveRequest, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: &Config) -> SearchReport;
}
