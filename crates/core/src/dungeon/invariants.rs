//! Structural checks every generated dungeon must pass.

use thiserror::Error;

use crate::mapgen::RoomGraph;
use crate::types::{Direction, RoomId, RoomType};

use super::Dungeon;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("room at index {index} carries id {id}")]
    NonDenseIds { index: usize, id: RoomId },
    #[error("{} role names room {id}, which is missing or of another type", room_type.label())]
    MisplacedRole { room_type: RoomType, id: RoomId },
    #[error("expected exactly one {} room, found {count}", room_type.label())]
    RoleCount { room_type: RoomType, count: usize },
    #[error("boss room {boss} has {doors} doors")]
    BossDoors { boss: RoomId, doors: usize },
    #[error("door {} of room {from} targets missing room {to}", direction.label())]
    DanglingDoor { from: RoomId, to: RoomId, direction: Direction },
    #[error("door {} of room {from} to {to} has no mirrored door back", direction.label())]
    AsymmetricDoor { from: RoomId, to: RoomId, direction: Direction },
    #[error("rooms are not all reachable from each other")]
    Disconnected,
}

pub fn check_invariants(dungeon: &Dungeon) -> Result<(), InvariantViolation> {
    for (index, room) in dungeon.rooms().iter().enumerate() {
        if room.id.index() != index {
            return Err(InvariantViolation::NonDenseIds { index, id: room.id });
        }
    }

    for room_type in [RoomType::Start, RoomType::Boss, RoomType::MiniGame] {
        let count = dungeon.rooms_of_type(room_type).count();
        if count != 1 {
            return Err(InvariantViolation::RoleCount { room_type, count });
        }
    }

    let boss = dungeon.boss_id();
    let boss_doors = dungeon.room(boss).map_or(0, |room| room.doors().len());
    if boss_doors != 1 {
        return Err(InvariantViolation::BossDoors { boss, doors: boss_doors });
    }

    let mut edges = Vec::new();
    for room in dungeon.rooms() {
        for door in room.doors() {
            let Some(target) = dungeon.room(door.target) else {
                return Err(InvariantViolation::DanglingDoor {
                    from: room.id,
                    to: door.target,
                    direction: door.direction,
                });
            };
            let mirrored = target.door(door.direction.opposite());
            if mirrored.map(|back| back.target) != Some(room.id) {
                return Err(InvariantViolation::AsymmetricDoor {
                    from: room.id,
                    to: door.target,
                    direction: door.direction,
                });
            }
            if room.id < door.target {
                edges.push((room.id, door.target));
            }
        }
    }

    if !RoomGraph::from_edges(dungeon.len(), &edges).is_connected() {
        return Err(InvariantViolation::Disconnected);
    }

    Ok(())
}
