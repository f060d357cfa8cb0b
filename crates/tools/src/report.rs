//! Serializable and ASCII views of a generated dungeon.

use dungeon_core::{Direction, Dungeon, Enemy, EnemyKind, GridCell, RoomId, RoomType};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct DungeonReport {
    pub seed: u64,
    pub fingerprint: String,
    pub start: RoomId,
    pub boss: RoomId,
    pub mini_game: RoomId,
    pub rooms: Vec<RoomReport>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct RoomReport {
    pub id: RoomId,
    pub room_type: RoomType,
    pub grid_cell: GridCell,
    pub doors: Vec<DoorReport>,
    pub walls: usize,
    pub hazards: usize,
    pub enemies: Vec<EnemyReport>,
}

/// A spawned enemy with its kind's stat block, rounded to whole pixels.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct EnemyReport {
    pub kind: EnemyKind,
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub speed: i32,
    pub contact_damage: i32,
}

impl EnemyReport {
    fn new(enemy: &Enemy) -> Self {
        let stats = enemy.stats();
        Self {
            kind: enemy.kind,
            x: enemy.pos.x.round() as i32,
            y: enemy.pos.y.round() as i32,
            health: enemy.health,
            speed: stats.speed.round() as i32,
            contact_damage: stats.contact_damage,
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct DoorReport {
    pub direction: Direction,
    pub target: RoomId,
}

impl DungeonReport {
    pub fn new(dungeon: &Dungeon) -> Self {
        let rooms = dungeon
            .rooms()
            .iter()
            .map(|room| RoomReport {
                id: room.id,
                room_type: room.room_type,
                grid_cell: room.grid_cell,
                doors: room
                    .doors()
                    .iter()
                    .map(|door| DoorReport { direction: door.direction, target: door.target })
                    .collect(),
                walls: room.walls.len(),
                hazards: room.hazards.len(),
                enemies: room.enemies.values().map(EnemyReport::new).collect(),
            })
            .collect();
        Self {
            seed: dungeon.seed(),
            fingerprint: format!("0x{:016x}", dungeon.fingerprint()),
            start: dungeon.start_id(),
            boss: dungeon.boss_id(),
            mini_game: dungeon.mini_game_id(),
            rooms,
        }
    }
}

fn room_glyph(room_type: RoomType) -> char {
    match room_type {
        RoomType::Start => 'S',
        RoomType::Boss => 'B',
        RoomType::MiniGame => 'M',
        RoomType::Normal => '#',
    }
}

/// Draws the occupied part of the grid: one glyph per room, `-` and `|` for doors.
pub fn ascii_map(dungeon: &Dungeon) -> String {
    let cells = dungeon.rooms().iter().map(|room| room.grid_cell);
    let (Some(min_col), Some(max_col)) =
        (cells.clone().map(|c| c.col).min(), cells.clone().map(|c| c.col).max())
    else {
        return String::new();
    };
    let (Some(min_row), Some(max_row)) =
        (cells.clone().map(|c| c.row).min(), cells.map(|c| c.row).max())
    else {
        return String::new();
    };

    let width = ((max_col - min_col) * 2 + 1) as usize;
    let height = ((max_row - min_row) * 2 + 1) as usize;
    let mut canvas = vec![vec![' '; width]; height];

    for room in dungeon.rooms() {
        let x = ((room.grid_cell.col - min_col) * 2) as usize;
        let y = ((room.grid_cell.row - min_row) * 2) as usize;
        canvas[y][x] = room_glyph(room.room_type);
        // Each link is drawn from its east or south end only.
        if room.door(Direction::East).is_some() {
            canvas[y][x + 1] = '-';
        }
        if room.door(Direction::South).is_some() {
            canvas[y + 1][x] = '|';
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use dungeon_core::{NORMAL_ROOM_LAYOUTS, Room, ScreenSize};

    use super::*;

    fn l_shape() -> Dungeon {
        let screen = ScreenSize::default();
        let mut rooms = vec![
            Room::new(RoomId(0), RoomType::Start, GridCell { col: 3, row: 3 }, screen),
            Room::new(RoomId(1), RoomType::Normal, GridCell { col: 4, row: 3 }, screen),
            Room::new(RoomId(2), RoomType::Boss, GridCell { col: 4, row: 4 }, screen),
            Room::new(RoomId(3), RoomType::MiniGame, GridCell { col: 3, row: 2 }, screen),
        ];
        rooms[0].add_door(Direction::East, RoomId(1));
        rooms[1].add_door(Direction::West, RoomId(0));
        rooms[1].add_door(Direction::South, RoomId(2));
        rooms[2].add_door(Direction::North, RoomId(1));
        rooms[0].add_door(Direction::North, RoomId(3));
        rooms[3].add_door(Direction::South, RoomId(0));
        Dungeon::new(11, screen, rooms, RoomId(0), RoomId(2), RoomId(3)).expect("well-formed")
    }

    #[test]
    fn ascii_map_crops_to_the_occupied_cells() {
        assert_eq!(ascii_map(&l_shape()), "M\n|\nS-#\n  |\n  B");
    }

    #[test]
    fn report_lists_doors_in_insertion_order() {
        let report = DungeonReport::new(&l_shape());
        assert_eq!(report.seed, 11);
        assert_eq!(report.rooms.len(), 4);
        let start_doors: Vec<Direction> =
            report.rooms[0].doors.iter().map(|door| door.direction).collect();
        assert_eq!(start_doors, vec![Direction::East, Direction::North]);
        assert_eq!(report.fingerprint.len(), 18);
    }

    #[test]
    fn report_carries_each_enemy_stat_block() {
        let mut dungeon = l_shape();
        dungeon.current_room_mut().apply_layout(&NORMAL_ROOM_LAYOUTS[2]);

        let report = DungeonReport::new(&dungeon);
        assert_eq!(
            report.rooms[0].enemies,
            vec![EnemyReport {
                kind: EnemyKind::Heavy,
                x: 480,
                y: 420,
                health: 120,
                speed: 40,
                contact_damage: 25,
            }]
        );
    }

    #[test]
    fn report_serializes_enums_in_snake_case() {
        let json = serde_json::to_string(&DungeonReport::new(&l_shape())).expect("serialize");
        assert!(json.contains(r#""room_type":"mini_game""#), "{json}");
        assert!(json.contains(r#""direction":"north""#), "{json}");
    }
}
