use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, DIRECTIONS};
use crate::state::State;

/// Moving the blank to `dest`, the tile at `dest` slides into the blank's former position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    dest: usize,
    dir: Dir,
}

impl Move {
    pub(crate) fn new(dest: usize, dir: Dir) -> Self {
        Move { dest, dir }
    }

    /// The move taking the blank from `blank` to `dest` if the two cells are adjacent.
    pub fn between(blank: usize, dest: usize, size: usize) -> Option<Move> {
        DIRECTIONS
            .iter()
            .find(|dir| dir.step(blank, size) == Some(dest))
            .map(|&dir| Move::new(dest, dir))
    }

    pub fn dest(self) -> usize {
        self.dest
    }

    pub fn dir(self) -> Dir {
        self.dir
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dir, self.dest)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Destination indices of the blank, in order.
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|m| m.dest).collect()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Up, down, left, right - whichever stay on the board.
pub fn legal_moves(state: &State, size: usize) -> Vec<Move> {
    let blank = state.blank();
    DIRECTIONS
        .iter()
        .filter_map(|&dir| dir.step(blank, size).map(|dest| Move::new(dest, dir)))
        .collect()
}

/// `mov` must come from `legal_moves` for this state.
pub fn apply_move(state: &State, mov: Move) -> State {
    debug_assert_eq!(
        Some(mov),
        Move::between(state.blank(), mov.dest, state.size()),
        "Illegal move {:?} for {:?}",
        mov,
        state
    );
    state.swap_blank(mov.dest)
}

/// Applies `moves` one by one, `None` if any of them is not legal at that point.
pub fn replay(initial: &State, moves: &Moves, size: usize) -> Option<State> {
    let mut state = initial.clone();
    for &mov in moves {
        if Move::between(state.blank(), mov.dest, size) != Some(mov) {
            return None;
        }
        state = state.swap_blank(mov.dest);
    }
    Some(state)
}
