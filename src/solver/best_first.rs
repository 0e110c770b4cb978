use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::heuristic::{Goal, Heuristic};
use crate::moves::{apply_move, legal_moves};
use crate::puzzle::Puzzle;

use super::{backtrack_moves, Node, Outcome, Stats};

/// Frontier entry. Ordered by cost and then by insertion so ties pop first-in first-out.
#[derive(Debug)]
struct SearchNode<'a> {
    node: &'a Node<'a>,
    cost: u32,
    id: u64,
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        (other.cost, other.id).cmp(&(self.cost, self.id))
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode<'_> {}

/// Greedy (`a_star == false`, cost = h) or A* (cost = dist + h).
///
/// A state is closed the first time it's taken off the frontier and never expanded again.
pub(super) fn search(
    puzzle: &Puzzle,
    heuristic: Heuristic,
    a_star: bool,
    max_iterations: Option<usize>,
    stats: &mut Stats,
) -> Outcome {
    let goal = Goal::new(puzzle.goal(), puzzle.size());
    let cost = |node: &Node<'_>| {
        let h = heuristic.estimate(&node.state, &goal);
        if a_star {
            node.dist + h
        } else {
            h
        }
    };

    let arena = Arena::new();
    let mut to_visit = BinaryHeap::new();
    let mut closed = FnvHashSet::default();
    let mut next_id = 0;

    let start: &Node<'_> = arena.alloc(Node::root(puzzle.initial().clone()));
    stats.add_created(start.dist);
    to_visit.push(SearchNode {
        node: start,
        cost: cost(start),
        id: next_id,
    });
    next_id += 1;

    let mut iterations = 0;
    while let Some(SearchNode { node: cur, .. }) = to_visit.pop() {
        iterations += 1;
        if let Some(max) = max_iterations {
            if iterations > max {
                return Outcome::LimitReached(max);
            }
        }

        // the same state can be queued several times before it's expanded
        if closed.contains(&cur.state) {
            stats.add_duplicate(cur.dist);
            continue;
        }
        closed.insert(&cur.state);
        if stats.add_visited(cur.dist) {
            debug!("Visited new depth: {}", cur.dist);
        }

        if cur.state == *goal.state() {
            debug!("Solved after {} iterations, backtracking path", iterations);
            return Outcome::Solved(backtrack_moves(cur));
        }

        for mov in legal_moves(&cur.state, puzzle.size()) {
            let new_state = apply_move(&cur.state, mov);
            stats.add_created(cur.dist + 1);
            if closed.contains(&new_state) {
                stats.add_duplicate(cur.dist + 1);
                continue;
            }

            let next: &Node<'_> = arena.alloc(Node::child(cur, new_state, mov));
            to_visit.push(SearchNode {
                node: next,
                cost: cost(next),
                id: next_id,
            });
            next_id += 1;
        }
    }

    Outcome::Exhausted
}
