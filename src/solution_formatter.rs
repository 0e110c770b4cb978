use std::fmt::{self, Debug, Display, Formatter};

use crate::moves::Moves;
use crate::state::State;

/// Every board from the initial state to the end of `moves`, separated by empty lines.
pub struct SolutionFormatter<'a> {
    initial_state: &'a State,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(initial_state: &'a State, moves: &'a Moves) -> Self {
        Self {
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial_state)?;
        let mut last_state = self.initial_state.clone();
        for mov in self.moves {
            // moves come from the solver for this state so they're legal
            let new_state = last_state.swap_blank(mov.dest());
            writeln!(f, "{}", new_state)?;
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
