use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::heuristic::Heuristic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    UnknownMethod(String),
    UnknownHeuristic(String),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigErr::UnknownMethod(ref name) => write!(
                f,
                "Unknown method \"{}\" - expected breadth-first, greedy or a-star",
                name
            ),
            ConfigErr::UnknownHeuristic(ref name) => write!(
                f,
                "Unknown heuristic \"{}\" - expected hamming or manhattan",
                name
            ),
        }
    }
}

impl Error for ConfigErr {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    BreadthFirst,
    Greedy,
    AStar,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::BreadthFirst, Method::Greedy, Method::AStar];

    /// Greedy is unbounded unless the caller asks for a limit.
    pub fn default_max_iterations(self) -> Option<usize> {
        match self {
            Method::BreadthFirst => Some(100_000),
            Method::Greedy => None,
            Method::AStar => Some(50_000),
        }
    }

    pub fn uses_heuristic(self) -> bool {
        self != Method::BreadthFirst
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::AStar
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::BreadthFirst => write!(f, "breadth-first"),
            Method::Greedy => write!(f, "greedy"),
            Method::AStar => write!(f, "a-star"),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth-first" | "bfs" => Ok(Method::BreadthFirst),
            "greedy" => Ok(Method::Greedy),
            "a-star" | "astar" => Ok(Method::AStar),
            _ => Err(ConfigErr::UnknownMethod(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub method: Method,
    pub heuristic: Heuristic,
    /// Maximum number of nodes taken off the frontier, `None` means no limit.
    pub max_iterations: Option<usize>,
}

impl Config {
    pub fn new(method: Method, heuristic: Heuristic) -> Self {
        Config {
            method,
            heuristic,
            max_iterations: method.default_max_iterations(),
        }
    }

    pub fn with_max_iterations(self, max_iterations: Option<usize>) -> Self {
        Config {
            max_iterations,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Method::default(), Heuristic::default())
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.method.uses_heuristic() {
            write!(f, "{} ({})", self.method, self.heuristic)
        } else {
            write!(f, "{}", self.method)
        }
    }
}
