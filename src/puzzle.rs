use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::MIN_SIZE;
use crate::state::State;

/// Roughly half of all permutations are solvable so this is never reached in practice.
const MAX_GENERATE_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleErr {
    SizeTooSmall(usize),
    WrongLength { expected: usize, found: usize },
    InvalidTile(u32),
    DuplicateTile(u32),
    GenerationFailed { attempts: usize },
}

impl Display for PuzzleErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleErr::SizeTooSmall(size) => {
                write!(f, "Size {} is too small - at least {} required", size, MIN_SIZE)
            }
            PuzzleErr::WrongLength { expected, found } => {
                write!(f, "Expected {} tiles, found {}", expected, found)
            }
            PuzzleErr::InvalidTile(tile) => write!(f, "Tile {} is out of range", tile),
            PuzzleErr::DuplicateTile(tile) => write!(f, "Tile {} appears more than once", tile),
            PuzzleErr::GenerationFailed { attempts } => {
                write!(f, "No solvable board found in {} attempts", attempts)
            }
        }
    }
}

impl Error for PuzzleErr {}

/// A validated (initial, goal) pair of the same size.
///
/// Only constructed through validation so the solver can rely on both boards
/// being permutations of `0..size²`:
///
/// ```compile_fail
/// use npuzzle_solver::puzzle::Puzzle;
/// use npuzzle_solver::state::State;
///
/// let puzzle = Puzzle { size: 4, initial: State::goal(3), goal: State::goal(4) };
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    initial: State,
    goal: State,
}

impl Puzzle {
    pub fn new(size: usize, initial: Vec<u32>, goal: Vec<u32>) -> Result<Self, PuzzleErr> {
        Puzzle::from_tiles(size, &initial, &goal)
    }

    /// Puzzle with the canonical goal.
    pub fn with_goal(size: usize, initial: Vec<u32>) -> Result<Self, PuzzleErr> {
        check_size(size)?;
        let initial = validate(size, &initial)?;
        Ok(Puzzle {
            size,
            initial,
            goal: State::goal(size),
        })
    }

    /// Validates raw labels - used for input that didn't come from the parser.
    pub fn from_tiles(size: usize, initial: &[u32], goal: &[u32]) -> Result<Self, PuzzleErr> {
        check_size(size)?;
        let initial = validate(size, initial)?;
        let goal = validate(size, goal)?;
        Ok(Puzzle {
            size,
            initial,
            goal,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn initial(&self) -> &State {
        &self.initial
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Both boards have to be in the same parity class for one to be reachable from the other.
    pub fn is_solvable(&self) -> bool {
        self.initial.is_solvable(self.size) == self.goal.is_solvable(self.size)
    }

    pub fn is_solved(&self) -> bool {
        self.initial == self.goal
    }

    /// Random solvable puzzle with the canonical goal, the same seed always gives the same puzzle.
    ///
    /// The generator is `rand`'s `StdRng` seeded with `seed`, the shuffle is Fisher-Yates.
    /// Shuffles are retried until the board is solvable and not already solved.
    pub fn generate(size: usize, seed: u64) -> Result<Self, PuzzleErr> {
        check_size(size)?;

        let goal = State::goal(size);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tiles = goal.tiles().to_vec();

        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            tiles.shuffle(&mut rng);
            let initial = State::new(tiles.clone());
            if initial.is_solvable(size) && initial != goal {
                debug!("Generated {}x{} puzzle after {} attempts", size, size, attempt);
                return Ok(Puzzle {
                    size,
                    initial,
                    goal,
                });
            }
        }

        Err(PuzzleErr::GenerationFailed {
            attempts: MAX_GENERATE_ATTEMPTS,
        })
    }
}

fn check_size(size: usize) -> Result<(), PuzzleErr> {
    if size < MIN_SIZE {
        Err(PuzzleErr::SizeTooSmall(size))
    } else {
        Ok(())
    }
}

/// Every label in `0..size²` exactly once.
fn validate(size: usize, tiles: &[u32]) -> Result<State, PuzzleErr> {
    // no board of an overflowing size can match the input
    let len = size.saturating_mul(size);
    if tiles.len() != len {
        return Err(PuzzleErr::WrongLength {
            expected: len,
            found: tiles.len(),
        });
    }

    let mut seen = vec![false; len];
    for &tile in tiles {
        let index = tile as usize;
        if index >= len {
            return Err(PuzzleErr::InvalidTile(tile));
        }
        if seen[index] {
            return Err(PuzzleErr::DuplicateTile(tile));
        }
        seen[index] = true;
    }

    Ok(State::new(tiles.to_vec()))
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial)?;
        if self.goal != State::goal(self.size) {
            writeln!(f)?;
            write!(f, "{}", self.goal)?;
        }
        Ok(())
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
