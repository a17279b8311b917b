//! Sparse set of live cells.

use std::collections::HashSet;
use std::collections::hash_set;

use super::coord::{CellKey, Grid, Position, toroidal_neighbors};

/// The currently alive cells, keyed by [`CellKey`].
///
/// Population has no notion of grid bounds; its owner only inserts
/// positions it has validated against the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Population {
    cells: HashSet<CellKey>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(cap),
        }
    }

    #[inline]
    pub fn is_alive(&self, position: Position) -> bool {
        self.cells.contains(&position.key())
    }

    #[inline]
    pub fn contains_key(&self, key: CellKey) -> bool {
        self.cells.contains(&key)
    }

    /// Live cells among the 8 toroidal neighbor slots of `position`.
    /// Repeated slots on tiny grids are counted once per slot, so a lone
    /// live cell on a 1x1 grid sees 8 live neighbors. Always 0 on a
    /// degenerate grid.
    #[inline]
    pub fn count_alive_neighbors(&self, position: Position, grid: Grid) -> u8 {
        if grid.is_degenerate() {
            return 0;
        }
        toroidal_neighbors(position, grid)
            .into_iter()
            .filter(|&n| self.is_alive(n))
            .count() as u8
    }

    /// Returns `true` if the cell was dead before.
    #[inline]
    pub fn insert(&mut self, position: Position) -> bool {
        self.cells.insert(position.key())
    }

    /// Returns `true` if the cell was alive before.
    #[inline]
    pub fn remove(&mut self, position: Position) -> bool {
        self.cells.remove(&position.key())
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, position: Position) -> bool {
        if self.remove(position) {
            false
        } else {
            self.insert(position)
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.cells.iter(),
        }
    }

    /// Live positions ordered by `(x, y)`, for stable output.
    pub fn sorted(&self) -> Vec<Position> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_unstable();
        out
    }
}

pub struct Iter<'a> {
    inner: hash_set::Iter<'a, CellKey>,
}

impl Iterator for Iter<'_> {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        self.inner.next().map(|key| key.position())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Population {
    type Item = Position;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<Position> for Population {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Position::key).collect(),
        }
    }
}

impl Extend<Position> for Population {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.cells.extend(iter.into_iter().map(Position::key));
    }
}
