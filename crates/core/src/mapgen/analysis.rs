//! Breadth-first analysis of the room graph: connectivity, degree, and diameter endpoints.

use std::collections::VecDeque;

use crate::types::RoomId;

use super::error::AttemptFailure;

/// Undirected adjacency lists indexed by `RoomId`, neighbours kept in edge order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RoomGraph {
    neighbors: Vec<Vec<RoomId>>,
    edge_count: usize,
}

/// Result of one breadth-first pass.
pub(crate) struct BfsTree {
    /// Distance per room; `None` when unreachable from the source.
    pub(crate) distance: Vec<Option<u32>>,
    /// Rooms in the order they were discovered.
    pub(crate) order: Vec<RoomId>,
}

impl RoomGraph {
    pub(crate) fn from_edges(room_count: usize, edges: &[(RoomId, RoomId)]) -> Self {
        let mut neighbors = vec![Vec::new(); room_count];
        for &(a, b) in edges {
            neighbors[a.index()].push(b);
            neighbors[b.index()].push(a);
        }
        Self { neighbors, edge_count: edges.len() }
    }

    pub(crate) fn room_count(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn neighbors(&self, id: RoomId) -> &[RoomId] {
        &self.neighbors[id.index()]
    }

    pub(crate) fn degree(&self, id: RoomId) -> usize {
        self.neighbors[id.index()].len()
    }

    pub(crate) fn is_leaf(&self, id: RoomId) -> bool {
        self.degree(id) == 1
    }

    pub(crate) fn are_adjacent(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub(crate) fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.neighbors.len()).map(|index| RoomId(index as u32))
    }

    pub(crate) fn leaves(&self) -> Vec<RoomId> {
        self.room_ids().filter(|&id| self.is_leaf(id)).collect()
    }

    pub(crate) fn bfs(&self, source: RoomId) -> BfsTree {
        let mut distance = vec![None; self.neighbors.len()];
        let mut order = Vec::with_capacity(self.neighbors.len());
        let mut open = VecDeque::from([source]);
        distance[source.index()] = Some(0_u32);

        while let Some(room) = open.pop_front() {
            order.push(room);
            let next_distance = distance[room.index()].map_or(0, |d| d + 1);
            for &next in self.neighbors(room) {
                if distance[next.index()].is_none() {
                    distance[next.index()] = Some(next_distance);
                    open.push_back(next);
                }
            }
        }

        BfsTree { distance, order }
    }

    pub(crate) fn is_connected(&self) -> bool {
        match self.room_ids().next() {
            Some(first) => self.bfs(first).order.len() == self.room_count(),
            None => false,
        }
    }

    /// Connected with exactly `n - 1` edges.
    pub(crate) fn is_tree(&self) -> bool {
        self.is_connected() && self.edge_count + 1 == self.room_count()
    }

    /// Two-pass BFS diameter endpoints, starting from room 0.
    ///
    /// Exact only on trees, so cyclic graphs are rejected instead of answered approximately.
    pub(crate) fn farthest_pair(&self) -> Result<(RoomId, RoomId), AttemptFailure> {
        let first = self.room_ids().next().ok_or(AttemptFailure::Disconnected)?;
        if !self.is_connected() {
            return Err(AttemptFailure::Disconnected);
        }
        if !self.is_tree() {
            return Err(AttemptFailure::NotATree);
        }

        let far1 = farthest_in_discovery_order(&self.bfs(first));
        let far2 = farthest_in_discovery_order(&self.bfs(far1));
        Ok((far1, far2))
    }
}

/// First-discovered room at the maximum distance.
fn farthest_in_discovery_order(tree: &BfsTree) -> RoomId {
    let mut best = tree.order[0];
    let mut best_distance = 0_u32;
    for &room in &tree.order {
        let distance = tree.distance[room.index()].unwrap_or(0);
        if distance > best_distance {
            best = room;
            best_distance = distance;
        }
    }
    best
}
