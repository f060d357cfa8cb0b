//! Turns the abstract tree and role assignment into rooms with doors and interior layouts.

use rand_chacha::ChaCha8Rng;

use crate::content::RoomLayout;
use crate::room::Room;
use crate::types::{RoomId, RoomType, ScreenSize};

use super::builder::SpanningTree;
use super::error::AttemptFailure;
use super::roles::RoleAssignment;
use super::seed::choose;

pub(super) fn materialize_rooms(
    rng: &mut ChaCha8Rng,
    tree: &SpanningTree,
    roles: &RoleAssignment,
    screen: ScreenSize,
    layouts: &[RoomLayout],
) -> Result<Vec<Room>, AttemptFailure> {
    let mut rooms: Vec<Room> = tree
        .cells
        .iter()
        .enumerate()
        .map(|(index, &cell)| {
            let id = RoomId(index as u32);
            Room::new(id, roles.room_type(id), cell, screen)
        })
        .collect();

    for room in rooms.iter_mut().filter(|room| room.room_type == RoomType::Normal) {
        if let Some(layout) = choose(rng, layouts) {
            room.apply_layout(&layout);
        }
    }

    for &(a, b) in &tree.edges {
        // Non-unit steps cannot come out of the builder; skip rather than guess a side.
        let Some(direction) = tree.cell(a).direction_to(tree.cell(b)) else {
            continue;
        };
        rooms[a.index()].add_door(direction, b);
        rooms[b.index()].add_door(direction.opposite(), a);
    }

    if rooms[roles.boss.index()].doors().len() != 1 {
        return Err(AttemptFailure::BossDoorCount);
    }

    Ok(rooms)
}
