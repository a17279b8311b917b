//! Grid dimensions, cell positions and toroidal neighbor enumeration.
//!
//! Positions carry no dimensions of their own; every neighbor computation
//! takes the owning [`Grid`] alongside the position.

use crate::error::{LifeError, Result};

/// Immutable `(columns, rows)` pair. Either axis may be zero, in which case
/// the grid holds no cells and every operation over it is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    columns: u32,
    rows: u32,
}

impl Grid {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    #[inline]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    pub const fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    #[inline]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.columns && position.y < self.rows
    }

    /// Validate an externally supplied coordinate.
    pub fn position(&self, x: i64, y: i64) -> Result<Position> {
        if (0..self.columns as i64).contains(&x) && (0..self.rows as i64).contains(&y) {
            Ok(Position::new(x as u32, y as u32))
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    /// Fold an arbitrary coordinate onto the torus. `None` on a degenerate grid.
    pub fn wrap(&self, x: i64, y: i64) -> Option<Position> {
        if self.is_degenerate() {
            return None;
        }
        let x = x.rem_euclid(self.columns as i64) as u32;
        let y = y.rem_euclid(self.rows as i64) as u32;
        Some(Position::new(x, y))
    }

    #[inline]
    pub fn neighbors(&self, position: Position) -> [Position; 8] {
        toroidal_neighbors(position, *self)
    }

    /// Every position of the grid, column-major like the seeding pass.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let rows = self.rows;
        (0..self.columns).flat_map(move |x| (0..rows).map(move |y| Position::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub const fn key(self) -> CellKey {
        CellKey(((self.y as u64) << 32) | self.x as u64)
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

/// Canonical lookup key: `y` in the high word, `x` in the low word.
/// Injective over all `u32` pairs, so it is the only equality used by
/// [`Population`](super::Population).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(u64);

impl CellKey {
    #[inline(always)]
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn position(self) -> Position {
        Position::new(self.0 as u32, (self.0 >> 32) as u32)
    }
}

#[inline(always)]
fn wrap_prev(v: u32, len: u32) -> u32 {
    if v == 0 { len - 1 } else { v - 1 }
}

#[inline(always)]
fn wrap_next(v: u32, len: u32) -> u32 {
    if v + 1 >= len { 0 } else { v + 1 }
}

/// The 8 neighbors of `position` on a torus, in row-major order starting at
/// the north-west corner. Duplicates on 1-wide or 1-tall grids are kept.
///
/// A degenerate grid has no cells to wrap onto; every slot is then
/// `position` itself. Otherwise `position` must lie inside `grid`.
#[inline]
pub fn toroidal_neighbors(position: Position, grid: Grid) -> [Position; 8] {
    if grid.is_degenerate() {
        return [position; 8];
    }
    debug_assert!(grid.contains(position));
    let Position { x, y } = position;
    let px = wrap_prev(x, grid.columns);
    let nx = wrap_next(x, grid.columns);
    let py = wrap_prev(y, grid.rows);
    let ny = wrap_next(y, grid.rows);
    [
        Position::new(px, py),
        Position::new(x, py),
        Position::new(nx, py),
        Position::new(px, y),
        Position::new(nx, y),
        Position::new(px, ny),
        Position::new(x, ny),
        Position::new(nx, ny),
    ]
}
