//! The generated room set and the single live room the player is in.

mod invariants;

use std::fmt;

use xxhash_rust::xxh3::xxh3_64;

use crate::entities::ActorState;
use crate::room::Room;
use crate::types::{Direction, Rect, RoomId, RoomType, ScreenSize, Vec2};

pub use invariants::{InvariantViolation, check_invariants};

/// Distance from the wall edge at which the actor reappears after a transition.
pub const ENTRY_INSET: i32 = 80;

#[derive(Clone, Debug)]
pub struct Dungeon {
    seed: u64,
    screen: ScreenSize,
    rooms: Vec<Room>,
    start_id: RoomId,
    boss_id: RoomId,
    mini_game_id: RoomId,
    current_id: RoomId,
}

impl Dungeon {
    /// Assembles a dungeon from rooms indexed by their ids; the cursor starts on `start_id`.
    ///
    /// Ids must be dense and each role id must name a room of that type. Door structure is left
    /// to [`check_invariants`].
    pub fn new(
        seed: u64,
        screen: ScreenSize,
        rooms: Vec<Room>,
        start_id: RoomId,
        boss_id: RoomId,
        mini_game_id: RoomId,
    ) -> Result<Self, InvariantViolation> {
        if let Some((index, room)) =
            rooms.iter().enumerate().find(|(index, room)| room.id.index() != *index)
        {
            return Err(InvariantViolation::NonDenseIds { index, id: room.id });
        }
        for (room_type, id) in [
            (RoomType::Start, start_id),
            (RoomType::Boss, boss_id),
            (RoomType::MiniGame, mini_game_id),
        ] {
            if rooms.get(id.index()).map(|room| room.room_type) != Some(room_type) {
                return Err(InvariantViolation::MisplacedRole { room_type, id });
            }
        }

        Ok(Self { seed, screen, rooms, start_id, boss_id, mini_game_id, current_id: start_id })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    pub fn start_id(&self) -> RoomId {
        self.start_id
    }

    pub fn boss_id(&self) -> RoomId {
        self.boss_id
    }

    pub fn mini_game_id(&self) -> RoomId {
        self.mini_game_id
    }

    pub fn current_id(&self) -> RoomId {
        self.current_id
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current_id.index()]
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current_id.index()]
    }

    pub fn rooms_of_type(&self, room_type: RoomType) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |room| room.room_type == room_type)
    }

    pub fn check_transition(&self, actor_bounds: Rect) -> Option<(Direction, RoomId)> {
        self.current_room().check_transition(actor_bounds)
    }

    /// Ticks the current room, then follows a door if the actor stands in its loading zone.
    ///
    /// Returns whether the current room changed. Rooms other than the current one never tick.
    pub fn update(&mut self, actor: &mut ActorState, dt: f32) -> bool {
        self.current_room_mut().update(dt, actor);

        let Some((direction, target)) = self.check_transition(actor.bounds()) else {
            return false;
        };
        if self.room(target).is_none() {
            tracing::warn!(
                "door {} of room {} targets missing room {target}",
                direction.label(),
                self.current_id
            );
            return false;
        }

        tracing::debug!("transition {} -> {target} through {}", self.current_id, direction.label());
        self.current_id = target;
        actor.set_center(self.entry_position(direction.opposite()));
        true
    }

    /// Point just inside the `side` wall of a room, centred on the perpendicular axis.
    pub fn entry_position(&self, side: Direction) -> Vec2 {
        let ScreenSize { width, height } = self.screen;
        let cx = (width / 2) as f32;
        let cy = (height / 2) as f32;
        let inset = ENTRY_INSET as f32;
        match side {
            Direction::North => Vec2::new(cx, inset),
            Direction::South => Vec2::new(cx, height as f32 - inset),
            Direction::West => Vec2::new(inset, cy),
            Direction::East => Vec2::new(width as f32 - inset, cy),
        }
    }

    /// Moves the cursor back to the start room without regenerating anything.
    pub fn reset_to_start(&mut self) {
        self.current_id = self.start_id;
    }

    /// Stable encoding of ids, roles, cells, and doors; interior entities are summarised by count.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        bytes.extend(self.start_id.0.to_le_bytes());
        bytes.extend(self.boss_id.0.to_le_bytes());
        bytes.extend(self.mini_game_id.0.to_le_bytes());
        for room in &self.rooms {
            bytes.extend(room.id.0.to_le_bytes());
            bytes.push(match room.room_type {
                RoomType::Start => 0,
                RoomType::Boss => 1,
                RoomType::MiniGame => 2,
                RoomType::Normal => 3,
            });
            bytes.extend(room.grid_cell.col.to_le_bytes());
            bytes.extend(room.grid_cell.row.to_le_bytes());
            bytes.push(room.doors().len() as u8);
            for door in room.doors() {
                bytes.push(match door.direction {
                    Direction::North => 0,
                    Direction::South => 1,
                    Direction::East => 2,
                    Direction::West => 3,
                });
                bytes.extend(door.target.0.to_le_bytes());
            }
            bytes.extend((room.walls.len() as u32).to_le_bytes());
            bytes.extend((room.hazards.len() as u32).to_le_bytes());
            bytes.extend((room.enemies.len() as u32).to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dungeon(seed={}, rooms={}):", self.seed, self.rooms.len())?;
        for room in &self.rooms {
            writeln!(f, "  {room}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridCell;

    /// start(0) -north-> 1 -east-> boss(2); mini-game hangs west of the start.
    fn corridor() -> Dungeon {
        let screen = ScreenSize::default();
        let mut rooms = vec![
            Room::new(RoomId(0), RoomType::Start, GridCell { col: 1, row: 1 }, screen),
            Room::new(RoomId(1), RoomType::Normal, GridCell { col: 1, row: 0 }, screen),
            Room::new(RoomId(2), RoomType::Boss, GridCell { col: 2, row: 0 }, screen),
            Room::new(RoomId(3), RoomType::MiniGame, GridCell { col: 0, row: 1 }, screen),
        ];
        rooms[0].add_door(Direction::North, RoomId(1));
        rooms[1].add_door(Direction::South, RoomId(0));
        rooms[1].add_door(Direction::East, RoomId(2));
        rooms[2].add_door(Direction::West, RoomId(1));
        rooms[0].add_door(Direction::West, RoomId(3));
        rooms[3].add_door(Direction::East, RoomId(0));
        Dungeon::new(7, screen, rooms, RoomId(0), RoomId(2), RoomId(3)).expect("well-formed")
    }

    #[test]
    fn empty_room_list_is_rejected() {
        let result =
            Dungeon::new(7, ScreenSize::default(), Vec::new(), RoomId(0), RoomId(0), RoomId(0));
        assert_eq!(
            result.err(),
            Some(InvariantViolation::MisplacedRole { room_type: RoomType::Start, id: RoomId(0) })
        );
    }

    #[test]
    fn out_of_range_start_id_is_rejected() {
        let rooms = corridor().rooms().to_vec();
        let result =
            Dungeon::new(7, ScreenSize::default(), rooms, RoomId(9), RoomId(2), RoomId(3));
        assert_eq!(
            result.err(),
            Some(InvariantViolation::MisplacedRole { room_type: RoomType::Start, id: RoomId(9) })
        );
    }

    #[test]
    fn role_pointing_at_the_wrong_room_type_is_rejected() {
        let rooms = corridor().rooms().to_vec();
        let result =
            Dungeon::new(7, ScreenSize::default(), rooms, RoomId(0), RoomId(1), RoomId(3));
        assert_eq!(
            result.err(),
            Some(InvariantViolation::MisplacedRole { room_type: RoomType::Boss, id: RoomId(1) })
        );
    }

    #[test]
    fn rooms_out_of_id_order_are_rejected() {
        let mut rooms = corridor().rooms().to_vec();
        rooms.swap(1, 2);
        let result =
            Dungeon::new(7, ScreenSize::default(), rooms, RoomId(0), RoomId(1), RoomId(3));
        assert_eq!(
            result.err(),
            Some(InvariantViolation::NonDenseIds { index: 1, id: RoomId(2) })
        );
    }

    #[test]
    fn starts_in_the_start_room() {
        let dungeon = corridor();
        assert_eq!(dungeon.current_id(), RoomId(0));
        assert_eq!(dungeon.current_room().room_type, RoomType::Start);
    }

    #[test]
    fn update_without_touching_a_door_stays_put() {
        let mut dungeon = corridor();
        let mut actor = ActorState::new(Vec2::new(480.0, 270.0), 32, 48, 200);
        assert!(!dungeon.update(&mut actor, 0.016));
        assert_eq!(dungeon.current_id(), RoomId(0));
        assert_eq!(actor.pos, Vec2::new(480.0, 270.0));
    }

    #[test]
    fn north_door_places_actor_near_the_south_edge_of_the_target() {
        let mut dungeon = corridor();
        let mut actor = ActorState::new(Vec2::new(480.0, 30.0), 32, 48, 200);
        assert!(dungeon.update(&mut actor, 0.016));
        assert_eq!(dungeon.current_id(), RoomId(1));
        assert_eq!(actor.pos, Vec2::new(480.0, 460.0));
        // The entry point must not immediately re-trigger the door back.
        assert_eq!(dungeon.check_transition(actor.bounds()), None);
    }

    #[test]
    fn east_door_places_actor_near_the_west_edge_of_the_target() {
        let mut dungeon = corridor();
        let mut actor = ActorState::new(Vec2::new(480.0, 30.0), 32, 48, 200);
        dungeon.update(&mut actor, 0.016);
        actor.set_center(Vec2::new(940.0, 270.0));
        assert!(dungeon.update(&mut actor, 0.016));
        assert_eq!(dungeon.current_id(), RoomId(2));
        assert_eq!(actor.pos, Vec2::new(80.0, 270.0));
    }

    #[test]
    fn reset_returns_to_start() {
        let mut dungeon = corridor();
        let mut actor = ActorState::new(Vec2::new(480.0, 30.0), 32, 48, 200);
        dungeon.update(&mut actor, 0.016);
        dungeon.reset_to_start();
        assert_eq!(dungeon.current_id(), dungeon.start_id());
    }

    #[test]
    fn fingerprint_tracks_structure() {
        let a = corridor();
        let mut b = corridor();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.rooms[1].add_door(Direction::North, RoomId(3));
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn display_lists_every_room() {
        let text = corridor().to_string();
        assert!(text.starts_with("Dungeon(seed=7, rooms=4):"));
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("type=BOSS"));
    }
}
