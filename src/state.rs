use std::fmt::{self, Debug, Display, Formatter};

use crate::data::coordinates_of;

/// One board configuration. Tile labels in row-major order, 0 is the blank.
///
/// Equality and hashing only depend on the tiles (the cached blank index is derived from them)
/// so states can be used directly as keys in visited sets.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    tiles: Vec<u32>,
    blank: usize,
}

impl State {
    /// Caller guarantees `tiles` is a permutation of `0..tiles.len()`.
    pub(crate) fn new(tiles: Vec<u32>) -> State {
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .expect("Validated boards always contain the blank");
        State { tiles, blank }
    }

    /// `1, 2, ..., size²-1, 0`
    pub fn goal(size: usize) -> State {
        let len = size * size;
        let tiles = (1..len).chain(Some(0)).map(|t| t as u32).collect();
        State {
            tiles,
            blank: len - 1,
        }
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Side length derived from the number of tiles.
    pub fn size(&self) -> usize {
        let mut size = 0;
        while size * size < self.tiles.len() {
            size += 1;
        }
        size
    }

    /// Pairs of non-blank tiles that appear in descending order.
    pub fn inversion_count(&self) -> usize {
        let mut inversions = 0;
        for (i, &a) in self.tiles.iter().enumerate() {
            if a == 0 {
                continue;
            }
            inversions += self.tiles[i + 1..]
                .iter()
                .filter(|&&b| b != 0 && a > b)
                .count();
        }
        inversions
    }

    /// Whether the canonical goal (`State::goal`) is reachable from this state.
    ///
    /// Odd sizes: the inversion count must be even.
    /// Even sizes: the inversion count plus the blank's row must be odd.
    pub fn is_solvable(&self, size: usize) -> bool {
        let inversions = self.inversion_count();
        let blank_row = coordinates_of(self.blank, size).r;

        if size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + blank_row) % 2 == 1
        }
    }

    /// Swaps the blank with the tile at `dest`. Legality is checked by the caller.
    pub(crate) fn swap_blank(&self, dest: usize) -> State {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, dest);
        State { tiles, blank: dest }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(size) {
            let mut first = true;
            for &tile in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                if tile == 0 {
                    write!(f, "{:>width$}", "_", width = width)?;
                } else {
                    write!(f, "{:>width$}", tile, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.tiles)
    }
}
