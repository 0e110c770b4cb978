use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::ConfigErr;
use crate::data::{coordinates_of, Pos};
use crate::state::State;

/// Lower bound on the number of moves left.
///
/// Both variants are consistent (a single move changes them by at most 1)
/// which is what lets greedy and A* close a state the first time it's expanded.
/// Any new variant has to keep that property or the searches need to reopen states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of misplaced tiles.
    Hamming,
    /// Sum of grid distances of each tile from its goal cell.
    Manhattan,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl Heuristic {
    pub fn evaluate(self, state: &State, goal: &State, size: usize) -> u32 {
        self.estimate(state, &Goal::new(goal, size))
    }

    pub(crate) fn estimate(self, state: &State, goal: &Goal<'_>) -> u32 {
        match self {
            Heuristic::Hamming => hamming(state, goal),
            Heuristic::Manhattan => manhattan(state, goal),
        }
    }
}

/// Goal board with each tile's target position looked up in advance.
#[derive(Debug)]
pub(crate) struct Goal<'a> {
    state: &'a State,
    size: usize,
    positions: Vec<Pos>,
}

impl<'a> Goal<'a> {
    pub(crate) fn new(state: &'a State, size: usize) -> Self {
        let mut positions = vec![Pos::new(0, 0); state.tiles().len()];
        for (i, &tile) in state.tiles().iter().enumerate() {
            positions[tile as usize] = coordinates_of(i, size);
        }
        Goal {
            state,
            size,
            positions,
        }
    }

    pub(crate) fn state(&self) -> &State {
        self.state
    }
}

fn hamming(state: &State, goal: &Goal<'_>) -> u32 {
    state
        .tiles()
        .iter()
        .zip(goal.state.tiles())
        .filter(|&(&s, &g)| s != g && s != 0)
        .count() as u32
}

fn manhattan(state: &State, goal: &Goal<'_>) -> u32 {
    let mut dist_sum = 0;
    for (i, &tile) in state.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let target = goal.positions[tile as usize];
        dist_sum += coordinates_of(i, goal.size).dist(target);
    }
    dist_sum as u32
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Hamming => write!(f, "hamming"),
            Heuristic::Manhattan => write!(f, "manhattan"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hamming" => Ok(Heuristic::Hamming),
            "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(ConfigErr::UnknownHeuristic(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{apply_move, legal_moves};

    fn state(tiles: &[u32]) -> State {
        State::new(tiles.to_vec())
    }

    #[test]
    fn goal_is_zero() {
        for size in 2..6 {
            let goal = State::goal(size);
            assert_eq!(Heuristic::Manhattan.evaluate(&goal, &goal, size), 0);
            assert_eq!(Heuristic::Hamming.evaluate(&goal, &goal, size), 0);
        }
    }

    #[test]
    fn known_values() {
        let goal = State::goal(3);

        let two_away = state(&[1, 2, 3, 4, 0, 6, 7, 5, 8]);
        assert_eq!(Heuristic::Hamming.evaluate(&two_away, &goal, 3), 2);
        assert_eq!(Heuristic::Manhattan.evaluate(&two_away, &goal, 3), 2);

        // every tile one row too low except 7 and 8 which wrap around
        let shifted = state(&[7, 8, 0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(Heuristic::Hamming.evaluate(&shifted, &goal, 3), 8);
        assert_eq!(Heuristic::Manhattan.evaluate(&shifted, &goal, 3), 1 + 1 + 1 + 1 + 1 + 1 + 2 + 2);
    }

    #[test]
    fn non_canonical_goal() {
        let goal = state(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let one_away = state(&[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Heuristic::Hamming.evaluate(&one_away, &goal, 3), 1);
        assert_eq!(Heuristic::Manhattan.evaluate(&one_away, &goal, 3), 1);
    }

    #[test]
    fn manhattan_dominates_hamming() {
        let goal = State::goal(3);
        let mut frontier = vec![goal.clone()];
        // walk a few levels out from the goal, checking every state on the way
        for _ in 0..6 {
            let mut next = Vec::new();
            for s in &frontier {
                let m = Heuristic::Manhattan.evaluate(s, &goal, 3);
                let h = Heuristic::Hamming.evaluate(s, &goal, 3);
                assert!(m >= h, "{:?}: manhattan {} < hamming {}", s, m, h);
                for mov in legal_moves(s, 3) {
                    next.push(apply_move(s, mov));
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn consistent_across_moves() {
        let goal = State::goal(4);
        let s = state(&[5, 1, 2, 3, 4, 7, 10, 8, 9, 6, 0, 12, 13, 14, 11, 15]);
        for &heuristic in &[Heuristic::Hamming, Heuristic::Manhattan] {
            let h = heuristic.evaluate(&s, &goal, 4) as i64;
            for mov in legal_moves(&s, 4) {
                let h2 = heuristic.evaluate(&apply_move(&s, mov), &goal, 4) as i64;
                assert!((h - h2).abs() <= 1);
            }
        }
    }

    #[test]
    fn parsing() {
        assert_eq!("hamming".parse::<Heuristic>().unwrap(), Heuristic::Hamming);
        assert_eq!("manhattan".parse::<Heuristic>().unwrap(), Heuristic::Manhattan);
        assert_eq!(
            "euclid".parse::<Heuristic>().unwrap_err(),
            ConfigErr::UnknownHeuristic("euclid".to_owned())
        );
        assert_eq!(Heuristic::Manhattan.to_string(), "manhattan");
    }
}
