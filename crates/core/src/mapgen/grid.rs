//! Bounded grid-lattice primitives used while growing the room tree.

use crate::types::{Direction, GridCell};

/// Grid extent in cell coordinates; both sides are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct GridBounds {
    pub(super) cols: i32,
    pub(super) rows: i32,
}

impl GridBounds {
    /// `None` if either side is zero or does not fit a cell coordinate.
    pub(super) fn new(cols: usize, rows: usize) -> Option<Self> {
        let cols = i32::try_from(cols).ok().filter(|&cols| cols > 0)?;
        let rows = i32::try_from(rows).ok().filter(|&rows| rows > 0)?;
        Some(Self { cols, rows })
    }

    pub(super) fn contains(self, cell: GridCell) -> bool {
        (0..self.cols).contains(&cell.col) && (0..self.rows).contains(&cell.row)
    }
}

/// Orthogonal neighbours of `cell` that are inside `bounds` and rejected by `is_occupied`,
/// in north, south, west, east order.
pub(super) fn empty_neighbors(
    bounds: GridBounds,
    cell: GridCell,
    is_occupied: impl Fn(GridCell) -> bool,
) -> Vec<GridCell> {
    Direction::ALL
        .into_iter()
        .map(|direction| cell.step(direction))
        .filter(|&next| bounds.contains(next) && !is_occupied(next))
        .collect()
}
