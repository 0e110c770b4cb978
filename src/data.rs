use std::fmt::{self, Display, Formatter};

pub(crate) const MIN_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> usize {
        abs_diff(self.r, other.r) + abs_diff(self.c, other.c)
    }
}

fn abs_diff(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Converts a 1D board index into (row, column).
pub fn coordinates_of(index: usize, size: usize) -> Pos {
    debug_assert!(index < size * size);
    Pos::new(index / size, index % size)
}

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Index reached from `index` in this direction, `None` when it would leave the board.
    pub(crate) fn step(self, index: usize, size: usize) -> Option<usize> {
        match self {
            Dir::Up if index >= size => Some(index - size),
            Dir::Down if index + size < size * size => Some(index + size),
            Dir::Left if index % size != 0 => Some(index - 1),
            Dir::Right if (index + 1) % size != 0 => Some(index + 1),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates() {
        assert_eq!(coordinates_of(0, 3), Pos::new(0, 0));
        assert_eq!(coordinates_of(5, 3), Pos::new(1, 2));
        assert_eq!(coordinates_of(8, 3), Pos::new(2, 2));
        assert_eq!(coordinates_of(7, 4), Pos::new(1, 3));
    }

    #[test]
    fn steps_respect_edges() {
        // 3x3, top left corner
        assert_eq!(Dir::Up.step(0, 3), None);
        assert_eq!(Dir::Left.step(0, 3), None);
        assert_eq!(Dir::Down.step(0, 3), Some(3));
        assert_eq!(Dir::Right.step(0, 3), Some(1));

        // end of the first row must not wrap to the next one
        assert_eq!(Dir::Right.step(2, 3), None);
        assert_eq!(Dir::Left.step(3, 3), None);
        assert_eq!(Dir::Down.step(7, 3), None);
    }

    #[test]
    fn distances() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(2, 2)), 4);
        assert_eq!(Pos::new(3, 1).dist(Pos::new(1, 3)), 4);
        assert_eq!(Pos::new(1, 1).dist(Pos::new(1, 1)), 0);
    }
}
