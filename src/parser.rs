use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::puzzle::{Puzzle, PuzzleErr};
use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    RowLength(usize),
    NotSquare,
    NoInitial,
    TooManyGrids,
    Invalid(PuzzleErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid tile at pos: [{}, {}]", r, c),
            ParserErr::RowLength(r) => write!(f, "Wrong number of tiles on row {}", r),
            ParserErr::NotSquare => write!(f, "Number of rows doesn't match number of columns"),
            ParserErr::NoInitial => write!(f, "No board"),
            ParserErr::TooManyGrids => write!(f, "More than two boards - expected initial and goal"),
            ParserErr::Invalid(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<PuzzleErr> for ParserErr {
    fn from(err: PuzzleErr) -> Self {
        ParserErr::Invalid(err)
    }
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Initial board, optionally followed by an empty line and the goal board.
///
/// ```text
/// ; comment
/// 1 2 3
/// 4 _ 6
/// 7 5 8
/// ```
pub(crate) fn parse(puzzle: &str) -> Result<Puzzle, ParserErr> {
    let mut grids: Vec<Vec<Vec<u32>>> = Vec::new();
    let mut in_grid = false;
    // row numbers in errors count from the start of the text like an editor would
    for (r, line) in puzzle.lines().enumerate() {
        let line = line.trim();
        if line.starts_with(';') {
            continue;
        }
        if line.is_empty() {
            in_grid = false;
            continue;
        }
        if !in_grid {
            grids.push(Vec::new());
            in_grid = true;
        }

        let row = parse_row(line, r)?;
        let grid = grids.last_mut().expect("Pushed above");
        if let Some(first) = grid.first() {
            if first.len() != row.len() {
                return Err(ParserErr::RowLength(r));
            }
        }
        grid.push(row);
    }

    let mut grids = grids.into_iter();
    let initial = grids.next().ok_or(ParserErr::NoInitial)?;
    let goal = grids.next();
    if grids.next().is_some() {
        return Err(ParserErr::TooManyGrids);
    }

    let size = initial.len();
    if initial[0].len() != size {
        return Err(ParserErr::NotSquare);
    }
    let initial: Vec<u32> = initial.into_iter().flatten().collect();

    let goal: Vec<u32> = match goal {
        Some(goal) => {
            if goal.len() != size || goal[0].len() != size {
                return Err(ParserErr::NotSquare);
            }
            goal.into_iter().flatten().collect()
        }
        None => State::goal(size).tiles().to_vec(),
    };

    Ok(Puzzle::from_tiles(size, &initial, &goal)?)
}

fn parse_row(line: &str, r: usize) -> Result<Vec<u32>, ParserErr> {
    line.split_whitespace()
        .enumerate()
        .map(|(c, token)| match token {
            "_" => Ok(0),
            _ => token.parse().map_err(|_| ParserErr::Pos(r, c)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_goal() {
        let puzzle: Puzzle = r"
1 2 3
4 _ 6
7 5 8
"
        .parse()
        .unwrap();
        assert_eq!(puzzle.size(), 3);
        assert_eq!(puzzle.initial().tiles(), &[1, 2, 3, 4, 0, 6, 7, 5, 8]);
        assert_eq!(*puzzle.goal(), State::goal(3));
    }

    #[test]
    fn explicit_goal_and_comments() {
        let puzzle: Puzzle = r"
; blank in the top left

 1  0
 2  3


 0  1
 2  3
"
        .parse()
        .unwrap();
        assert_eq!(puzzle.size(), 2);
        assert_eq!(puzzle.initial().tiles(), &[1, 0, 2, 3]);
        assert_eq!(puzzle.goal().tiles(), &[0, 1, 2, 3]);
    }

    #[test]
    fn formatting_round_trip() {
        let text = " 5  1  2  3\n 4  7 10  8\n 9  6  _ 12\n13 14 11 15\n";
        let puzzle: Puzzle = text.parse().unwrap();
        assert_eq!(puzzle.to_string(), text);
    }

    #[test]
    fn errors() {
        assert_eq!(parse("").unwrap_err(), ParserErr::NoInitial);
        assert_eq!(parse("; nothing\n").unwrap_err(), ParserErr::NoInitial);
        assert_eq!(parse("1 2\n3 x\n").unwrap_err(), ParserErr::Pos(1, 1));
        assert_eq!(parse("1 2\n3\n").unwrap_err(), ParserErr::RowLength(1));
        assert_eq!(parse("1 2 3\n4 5 0\n").unwrap_err(), ParserErr::NotSquare);
        assert_eq!(parse("1 2\n3 0\n\n1 2\n3 0\n\n1 2\n3 0\n").unwrap_err(), ParserErr::TooManyGrids);
        assert_eq!(
            parse("1 2\n3 0\n\n1 2 3\n4 5 6\n7 8 0\n").unwrap_err(),
            ParserErr::NotSquare
        );
        assert_eq!(
            parse("1 2\n3 3\n").unwrap_err(),
            ParserErr::Invalid(PuzzleErr::DuplicateTile(3))
        );
        assert_eq!(
            parse("5\n").unwrap_err(),
            ParserErr::Invalid(PuzzleErr::SizeTooSmall(1))
        );
        // negative numbers are not tiles
        assert_eq!(parse("1 -2\n3 0\n").unwrap_err(), ParserErr::Pos(0, 1));
    }
}
