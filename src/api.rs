//! Request and response types for callers that talk to the solver over some transport
//! (the binary uses them for `--json`).

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigErr, Method};
use crate::heuristic::Heuristic;
use crate::puzzle::{Puzzle, PuzzleErr};
use crate::solver::Outcome;
use crate::Solve;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestErr {
    Config(ConfigErr),
    Puzzle(PuzzleErr),
}

impl Display for RequestErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            RequestErr::Config(ref err) => write!(f, "{}", err),
            RequestErr::Puzzle(ref err) => write!(f, "Malformed puzzle: {}", err),
        }
    }
}

impl Error for RequestErr {}

impl From<ConfigErr> for RequestErr {
    fn from(err: ConfigErr) -> Self {
        RequestErr::Config(err)
    }
}

impl From<PuzzleErr> for RequestErr {
    fn from(err: PuzzleErr) -> Self {
        RequestErr::Puzzle(err)
    }
}

/// Board size used when a request leaves it out.
pub const DEFAULT_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_size")]
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub initial: Vec<u32>,
    pub goal: Vec<u32>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub initial: Vec<u32>,
    pub goal: Vec<u32>,
    /// Missing selectors fall back to the defaults, unknown ones are still rejected.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_heuristic")]
    pub heuristic: String,
    #[serde(default = "default_size")]
    pub size: usize,
    /// Overrides the method's default limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

fn default_algorithm() -> String {
    Method::default().to_string()
}

fn default_heuristic() -> String {
    Heuristic::default().to_string()
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Solved,
    Exhausted,
    LimitReached,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    /// Destination indices of the blank. Empty when not solved - check `status`.
    pub moves: Vec<usize>,
    pub move_count: usize,
    pub size: usize,
    pub status: Status,
    pub nodes_created: u64,
    pub nodes_expanded: u64,
}

pub fn generate(request: GenerateRequest, seed: u64) -> Result<GenerateResponse, RequestErr> {
    let puzzle = Puzzle::generate(request.size, seed)?;
    Ok(GenerateResponse {
        initial: puzzle.initial().tiles().to_vec(),
        goal: puzzle.goal().tiles().to_vec(),
        size: puzzle.size(),
    })
}

/// Everything is validated before the search starts, selectors first.
pub fn solve(request: &SolveRequest) -> Result<SolveResponse, RequestErr> {
    let method: Method = request.algorithm.parse()?;
    let heuristic: Heuristic = request.heuristic.parse()?;
    let puzzle = Puzzle::from_tiles(request.size, &request.initial, &request.goal)?;

    let mut config = Config::new(method, heuristic);
    if request.max_iterations.is_some() {
        config = config.with_max_iterations(request.max_iterations);
    }

    let report = puzzle.solve(&config);
    let moves = report.outcome.moves_or_empty().indices();
    let status = match report.outcome {
        Outcome::Solved(_) => Status::Solved,
        Outcome::Exhausted => Status::Exhausted,
        Outcome::LimitReached(_) => Status::LimitReached,
    };

    Ok(SolveResponse {
        move_count: moves.len(),
        moves,
        size: puzzle.size(),
        status,
        nodes_created: report.stats.total_created(),
        nodes_expanded: report.stats.total_visited(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(algorithm: &str, heuristic: &str) -> SolveRequest {
        SolveRequest {
            initial: vec![1, 2, 3, 4, 0, 6, 7, 5, 8],
            goal: vec![1, 2, 3, 4, 5, 6, 7, 8, 0],
            algorithm: algorithm.to_owned(),
            heuristic: heuristic.to_owned(),
            size: 3,
            max_iterations: None,
        }
    }

    #[test]
    fn solving() {
        let a_star = solve(&request("a-star", "manhattan")).unwrap();
        assert_eq!(a_star.moves, vec![7, 8]);
        assert_eq!(a_star.move_count, 2);
        assert_eq!(a_star.status, Status::Solved);

        let bfs = solve(&request("breadth-first", "manhattan")).unwrap();
        assert_eq!(bfs.move_count, a_star.move_count);
    }

    #[test]
    fn unknown_selectors() {
        assert_eq!(
            solve(&request("dijkstra", "manhattan")).unwrap_err(),
            RequestErr::Config(ConfigErr::UnknownMethod("dijkstra".to_owned()))
        );
        assert_eq!(
            solve(&request("greedy", "euclid")).unwrap_err(),
            RequestErr::Config(ConfigErr::UnknownHeuristic("euclid".to_owned()))
        );
    }

    #[test]
    fn malformed_boards() {
        let mut req = request("astar", "hamming");
        req.initial = vec![1, 2, 3, 4, 4, 6, 7, 5, 8];
        assert_eq!(
            solve(&req).unwrap_err(),
            RequestErr::Puzzle(PuzzleErr::DuplicateTile(4))
        );

        let mut req = request("astar", "hamming");
        req.size = 4;
        assert_eq!(
            solve(&req).unwrap_err(),
            RequestErr::Puzzle(PuzzleErr::WrongLength {
                expected: 16,
                found: 9
            })
        );
    }

    #[test]
    fn failures_have_a_status() {
        let mut req = request("bfs", "hamming");
        req.initial = vec![1, 2, 3, 4, 5, 6, 8, 7, 0];
        req.max_iterations = Some(100);
        let response = solve(&req).unwrap();
        assert_eq!(response.status, Status::LimitReached);
        assert!(response.moves.is_empty());
        assert_eq!(response.move_count, 0);

        let unsolvable = SolveRequest {
            initial: vec![2, 1, 3, 0],
            goal: vec![1, 2, 3, 0],
            algorithm: "greedy".to_owned(),
            heuristic: "hamming".to_owned(),
            size: 2,
            max_iterations: None,
        };
        assert_eq!(solve(&unsolvable).unwrap().status, Status::Exhausted);
    }

    #[test]
    fn json() {
        let json = r#"{"initial":[1,2,3,4,0,6,7,5,8],"goal":[1,2,3,4,5,6,7,8,0],
                       "algorithm":"astar","heuristic":"manhattan","size":3}"#;
        let req: SolveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.max_iterations, None);

        let response = serde_json::to_string(&solve(&req).unwrap()).unwrap();
        assert_eq!(
            response,
            r#"{"moves":[7,8],"moveCount":2,"size":3,"status":"solved","nodesCreated":8,"nodesExpanded":3}"#
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let json = r#"{"initial":[1,2,3,4,0,6,7,5,8],"goal":[1,2,3,4,5,6,7,8,0]}"#;
        let req: SolveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.algorithm, "a-star");
        assert_eq!(req.heuristic, "manhattan");
        assert_eq!(req.size, 3);
        assert_eq!(solve(&req).unwrap().moves, vec![7, 8]);

        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.size, DEFAULT_SIZE);

        // present but unknown is still an error
        let json = r#"{"initial":[1,2,3,4,0,6,7,5,8],"goal":[1,2,3,4,5,6,7,8,0],"heuristic":"euclid"}"#;
        let req: SolveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            solve(&req).unwrap_err(),
            RequestErr::Config(ConfigErr::UnknownHeuristic("euclid".to_owned()))
        );

        // the boards have no default
        assert!(serde_json::from_str::<SolveRequest>(r#"{"goal":[1,2,3,0]}"#).is_err());
    }

    #[test]
    fn large_boards() {
        let response = generate(GenerateRequest { size: 17 }, 1).unwrap();
        assert_eq!(response.size, 17);
        assert_eq!(response.initial.len(), 289);

        let mut req = request("a-star", "manhattan");
        req.size = 17;
        req.initial = response.goal.clone();
        req.goal = response.goal;
        let solved = solve(&req).unwrap();
        assert_eq!(solved.status, Status::Solved);
        assert_eq!(solved.move_count, 0);
        assert_eq!(solved.size, 17);
    }

    #[test]
    fn generating() {
        let response = generate(GenerateRequest { size: 3 }, 123).unwrap();
        assert_eq!(response.size, 3);
        assert_eq!(response.goal, vec![1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_ne!(response.initial, response.goal);
        assert_eq!(response, generate(GenerateRequest { size: 3 }, 123).unwrap());

        assert_eq!(
            generate(GenerateRequest { size: 0 }, 1).unwrap_err(),
            RequestErr::Puzzle(PuzzleErr::SizeTooSmall(0))
        );
    }
}
