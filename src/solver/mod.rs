mod best_first;
mod breadth_first;
mod stats;

use std::fmt::{self, Debug, Display, Formatter};

use log::{info, warn};

use crate::config::{Config, Method};
use crate::moves::{Move, Moves};
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

pub use self::stats::Stats;

/// How a search ended.
#[derive(Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Path from the initial state to the goal, empty if the puzzle was already solved.
    Solved(Moves),
    /// Every reachable state was visited without finding the goal.
    Exhausted,
    /// Gave up after taking this many nodes off the frontier.
    LimitReached(usize),
}

impl Outcome {
    pub fn moves(&self) -> Option<&Moves> {
        match *self {
            Outcome::Solved(ref moves) => Some(moves),
            Outcome::Exhausted | Outcome::LimitReached(_) => None,
        }
    }

    /// Empty both for an already solved puzzle and for a failed search.
    pub fn moves_or_empty(&self) -> Moves {
        self.moves().cloned().unwrap_or_default()
    }

    pub fn is_solved(&self) -> bool {
        self.moves().is_some()
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Solved(ref moves) => write!(f, "Solved in {} moves", moves.move_cnt()),
            Outcome::Exhausted => write!(f, "No solution"),
            Outcome::LimitReached(limit) => {
                write!(f, "Search aborted - limit of {} iterations reached", limit)
            }
        }
    }
}

impl Debug for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Solved(ref moves) => write!(f, "Solved({})", moves),
            Outcome::Exhausted => write!(f, "Exhausted"),
            Outcome::LimitReached(limit) => write!(f, "LimitReached({})", limit),
        }
    }
}

pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: Stats,
    pub config: Config,
}

impl SearchReport {
    fn new(outcome: Outcome, stats: Stats, config: Config) -> Self {
        Self {
            outcome,
            stats,
            config,
        }
    }
}

impl Debug for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved(ref moves) => writeln!(f, "{}: {}", self.config, moves.move_cnt())?,
            ref outcome => writeln!(f, "{}: {}", self.config, outcome)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, config: &Config) -> SearchReport {
        solve(self, config)
    }
}

fn solve(puzzle: &Puzzle, config: &Config) -> SearchReport {
    info!(
        "Solving {}x{} puzzle using {}",
        puzzle.size(), puzzle.size(), config
    );

    // every call owns its counters so concurrent solves don't interfere
    let mut stats = Stats::new();
    let outcome = match config.method {
        Method::BreadthFirst => breadth_first::search(puzzle, config.max_iterations, &mut stats),
        Method::Greedy | Method::AStar => best_first::search(
            puzzle,
            config.heuristic,
            config.method == Method::AStar,
            config.max_iterations,
            &mut stats,
        ),
    };

    match outcome {
        Outcome::Solved(ref moves) => info!("Solution found in {} moves", moves.move_cnt()),
        Outcome::Exhausted => info!("No solution found"),
        Outcome::LimitReached(limit) => warn!("{} stopped after {} iterations", config, limit),
    }

    SearchReport::new(outcome, stats, *config)
}

/// A state reached during search - nodes live in an arena for the duration of one search
/// and link to the node they were expanded from.
#[derive(Debug)]
struct Node<'a> {
    state: State,
    prev: Option<(&'a Node<'a>, Move)>,
    dist: u32,
}

impl<'a> Node<'a> {
    fn root(state: State) -> Self {
        Node {
            state,
            prev: None,
            dist: 0,
        }
    }

    fn child(prev: &'a Node<'a>, state: State, mov: Move) -> Self {
        Node {
            state,
            prev: Some((prev, mov)),
            dist: prev.dist + 1,
        }
    }
}

fn backtrack_moves(final_node: &Node<'_>) -> Moves {
    let mut moves = Vec::with_capacity(final_node.dist as usize);
    let mut node = final_node;
    while let Some((prev, mov)) = node.prev {
        moves.push(mov);
        node = prev;
    }
    moves.reverse();
    Moves::new(moves)
}
