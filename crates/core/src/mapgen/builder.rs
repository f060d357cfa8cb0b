//! Randomized spanning-tree growth over grid cells.

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;

use crate::types::{GridCell, RoomId};

use super::error::AttemptFailure;
use super::grid::{GridBounds, empty_neighbors};
use super::seed::{choose, random_index};

/// Rooms laid out on the grid, connected by tree edges in creation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct SpanningTree {
    /// Indexed by `RoomId`.
    pub(super) cells: Vec<GridCell>,
    /// `(parent, child)` for every room after the first.
    pub(super) edges: Vec<(RoomId, RoomId)>,
}

impl SpanningTree {
    pub(super) fn room_count(&self) -> usize {
        self.cells.len()
    }

    pub(super) fn cell(&self, id: RoomId) -> GridCell {
        self.cells[id.index()]
    }
}

/// Self-avoiding walk with backtracking: a random frontier cell sprouts a room into a random
/// empty neighbour; cells with no empty neighbour leave the frontier for good.
pub(super) fn grow_spanning_tree(
    rng: &mut ChaCha8Rng,
    total_rooms: usize,
    bounds: GridBounds,
) -> Result<SpanningTree, AttemptFailure> {
    let mut occupied: BTreeMap<GridCell, RoomId> = BTreeMap::new();
    let mut cells = Vec::with_capacity(total_rooms);
    let mut edges = Vec::with_capacity(total_rooms.saturating_sub(1));

    let start = GridCell {
        col: random_coordinate(rng, bounds.cols),
        row: random_coordinate(rng, bounds.rows),
    };
    occupied.insert(start, RoomId(0));
    cells.push(start);

    let mut frontier = vec![start];

    while cells.len() < total_rooms {
        if frontier.is_empty() {
            return Err(AttemptFailure::WalkDeadEnd);
        }

        let slot = random_index(rng, frontier.len());
        let cell = frontier[slot];
        let neighbors = empty_neighbors(bounds, cell, |next| occupied.contains_key(&next));
        let Some(next) = choose(rng, &neighbors) else {
            frontier.remove(slot);
            continue;
        };

        let parent = *occupied.get(&cell).ok_or(AttemptFailure::Disconnected)?;
        let child = RoomId(cells.len() as u32);
        occupied.insert(next, child);
        cells.push(next);
        edges.push((parent, child));
        frontier.push(next);
    }

    Ok(SpanningTree { cells, edges })
}

/// Uniform coordinate in `0..extent`.
fn random_coordinate(rng: &mut ChaCha8Rng, extent: i32) -> i32 {
    let index = random_index(rng, extent.unsigned_abs() as usize);
    i32::try_from(index).unwrap_or(extent.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn grows_exactly_the_requested_number_of_distinct_cells() {
        let bounds = GridBounds::new(8, 8).expect("small grid");
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let tree = grow_spanning_tree(&mut rng, 11, bounds).expect("8x8 always fits 11 rooms");
            assert_eq!(tree.room_count(), 11);
            assert_eq!(tree.edges.len(), 10);
            let distinct: BTreeSet<GridCell> = tree.cells.iter().copied().collect();
            assert_eq!(distinct.len(), 11);
            assert!(tree.cells.iter().all(|&cell| bounds.contains(cell)));
        }
    }

    #[test]
    fn every_edge_joins_an_earlier_room_to_its_orthogonal_neighbor() {
        let mut rng = ChaCha8Rng::seed_from_u64(2_024);
        let tree = grow_spanning_tree(&mut rng, 20, GridBounds::new(6, 5).expect("small grid"))
            .expect("30 cells fit 20 rooms");
        for (index, &(parent, child)) in tree.edges.iter().enumerate() {
            assert_eq!(child.index(), index + 1, "children are numbered in creation order");
            assert!(parent < child);
            assert!(tree.cell(parent).direction_to(tree.cell(child)).is_some());
        }
    }

    #[test]
    fn fills_the_grid_at_exact_capacity() {
        let bounds = GridBounds::new(3, 3).expect("small grid");
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let tree = grow_spanning_tree(&mut rng, 9, bounds).expect("walk can always fill the grid");
        let distinct: BTreeSet<GridCell> = tree.cells.iter().copied().collect();
        assert_eq!(distinct.len(), 9);
    }

    #[test]
    fn single_cell_grid_yields_a_lone_room() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tree = grow_spanning_tree(&mut rng, 1, GridBounds::new(1, 1).expect("small grid"))
            .expect("one room fits one cell");
        assert_eq!(tree.cells, vec![GridCell { col: 0, row: 0 }]);
        assert!(tree.edges.is_empty());
    }

    #[test]
    fn cells_near_the_coordinate_limit_stay_in_bounds() {
        let side = i32::MAX as usize;
        let bounds = GridBounds::new(side, side).expect("largest supported grid");
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let tree = grow_spanning_tree(&mut rng, 11, bounds).expect("eleven rooms fit");
        assert!(tree.cells.iter().all(|&cell| bounds.contains(cell)));
    }
}
