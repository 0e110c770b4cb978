use std::collections::VecDeque;

use fnv::FnvHashMap;
use log::debug;
use typed_arena::Arena;

use crate::moves::{apply_move, legal_moves};
use crate::puzzle::Puzzle;

use super::{backtrack_moves, Node, Outcome, Stats};

/// Plain BFS - all paths of length k are dequeued before any of length k+1,
/// so the first time the goal comes off the queue its path is the shortest one.
///
/// `depths` remembers the shortest known distance of every seen state.
/// A state is queued again only when reached by a strictly shorter path.
pub(super) fn search(puzzle: &Puzzle, max_iterations: Option<usize>, stats: &mut Stats) -> Outcome {
    let arena = Arena::new();
    let mut to_visit = VecDeque::new();
    let mut depths = FnvHashMap::default();

    let start: &Node<'_> = arena.alloc(Node::root(puzzle.initial().clone()));
    stats.add_created(start.dist);
    depths.insert(&start.state, start.dist);
    to_visit.push_back(start);

    let mut iterations = 0;
    while let Some(cur) = to_visit.pop_front() {
        iterations += 1;
        if let Some(max) = max_iterations {
            if iterations > max {
                return Outcome::LimitReached(max);
            }
        }

        if stats.add_visited(cur.dist) {
            debug!("Visited new depth: {}", cur.dist);
        }

        if cur.state == *puzzle.goal() {
            debug!("Solved after {} iterations, backtracking path", iterations);
            return Outcome::Solved(backtrack_moves(cur));
        }

        let new_dist = cur.dist + 1;
        for mov in legal_moves(&cur.state, puzzle.size()) {
            let new_state = apply_move(&cur.state, mov);
            stats.add_created(new_dist);

            let shorter = depths.get(&new_state).map_or(true, |&dist| new_dist < dist);
            if !shorter {
                stats.add_duplicate(new_dist);
                continue;
            }

            let next: &Node<'_> = arena.alloc(Node::child(cur, new_state, mov));
            depths.insert(&next.state, new_dist);
            to_visit.push_back(next);
        }
    }

    Outcome::Exhausted
}
