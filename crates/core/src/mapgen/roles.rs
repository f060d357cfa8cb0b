//! Special-room placement: start and boss at the diameter ends, boss on a leaf, mini-game
//! away from the boss antechamber.

use rand_chacha::ChaCha8Rng;

use crate::types::{RoomId, RoomType};

use super::analysis::RoomGraph;
use super::error::AttemptFailure;
use super::seed::choose;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RoleAssignment {
    pub(crate) start: RoomId,
    pub(crate) boss: RoomId,
    pub(crate) mini_game: RoomId,
}

impl RoleAssignment {
    pub(crate) fn room_type(&self, id: RoomId) -> RoomType {
        if id == self.start {
            RoomType::Start
        } else if id == self.boss {
            RoomType::Boss
        } else if id == self.mini_game {
            RoomType::MiniGame
        } else {
            RoomType::Normal
        }
    }
}

pub(crate) fn assign_roles(
    rng: &mut ChaCha8Rng,
    graph: &RoomGraph,
    (start_candidate, boss_candidate): (RoomId, RoomId),
) -> Result<RoleAssignment, AttemptFailure> {
    let (start, boss) = if graph.is_leaf(boss_candidate) {
        (start_candidate, boss_candidate)
    } else if graph.is_leaf(start_candidate) {
        (boss_candidate, start_candidate)
    } else {
        let boss = choose(rng, &graph.leaves()).ok_or(AttemptFailure::NoLeafForBoss)?;
        (start_candidate, boss)
    };

    let remaining: Vec<RoomId> =
        graph.room_ids().filter(|&id| id != start && id != boss).collect();
    let away_from_boss: Vec<RoomId> =
        remaining.iter().copied().filter(|&id| !graph.are_adjacent(id, boss)).collect();
    let candidates = if away_from_boss.is_empty() { &remaining } else { &away_from_boss };
    let mini_game = choose(rng, candidates).ok_or(AttemptFailure::NoMiniGameCandidate)?;

    Ok(RoleAssignment { start, boss, mini_game })
}
