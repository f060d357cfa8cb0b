use std::collections::{BTreeSet, VecDeque};

use dungeon_core::{
    Direction, Dungeon, DungeonGenerator, GenerationError, GeneratorConfig, RoomId, RoomType,
    check_invariants,
};
use proptest::prelude::*;

fn config(seed: u64, normals: usize, cols: usize, rows: usize) -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(seed),
        num_normal_rooms: normals,
        grid_cols: cols,
        grid_rows: rows,
        ..GeneratorConfig::default()
    }
}

fn distances_from(dungeon: &Dungeon, source: RoomId) -> Vec<Option<u32>> {
    let mut distance = vec![None; dungeon.len()];
    distance[source.index()] = Some(0_u32);
    let mut open = VecDeque::from([source]);
    while let Some(id) = open.pop_front() {
        let Some(room) = dungeon.room(id) else { continue };
        let next_distance = distance[id.index()].unwrap_or(0) + 1;
        for door in room.doors() {
            if distance[door.target.index()].is_none() {
                distance[door.target.index()] = Some(next_distance);
                open.push_back(door.target);
            }
        }
    }
    distance
}

fn diameter(dungeon: &Dungeon) -> u32 {
    dungeon
        .rooms()
        .iter()
        .flat_map(|room| distances_from(dungeon, room.id))
        .map(|distance| distance.unwrap_or(0))
        .max()
        .unwrap_or(0)
}

fn assert_structurally_valid(dungeon: &Dungeon, config: &GeneratorConfig) {
    assert_eq!(dungeon.len(), config.total_rooms());
    assert_eq!(check_invariants(dungeon), Ok(()));

    let ids: Vec<u32> = dungeon.rooms().iter().map(|room| room.id.0).collect();
    assert_eq!(ids, (0..config.total_rooms() as u32).collect::<Vec<_>>());

    let cells: BTreeSet<_> = dungeon.rooms().iter().map(|room| room.grid_cell).collect();
    assert_eq!(cells.len(), dungeon.len(), "rooms must occupy distinct grid cells");
    for cell in cells {
        assert!(cell.col >= 0 && (cell.col as usize) < config.grid_cols, "{cell:?}");
        assert!(cell.row >= 0 && (cell.row as usize) < config.grid_rows, "{cell:?}");
    }

    let door_count: usize = dungeon.rooms().iter().map(|room| room.doors().len()).sum();
    assert_eq!(door_count, 2 * (dungeon.len() - 1), "room graph must be a tree");
}

#[test]
fn default_configuration_produces_eleven_valid_rooms() {
    let config = GeneratorConfig::with_seed(12_345);
    let dungeon = DungeonGenerator::new(config).generate().expect("default config fits");
    assert_structurally_valid(&dungeon, &config);
}

#[test]
fn six_normal_rooms_on_eight_by_eight_yield_nine_rooms_or_exhaustion() {
    for seed in 0..64 {
        let config = config(seed, 6, 8, 8);
        match DungeonGenerator::new(config).generate() {
            Ok(dungeon) => assert_structurally_valid(&dungeon, &config),
            Err(GenerationError::Exhausted { attempts, .. }) => assert_eq!(attempts, 200),
            Err(other) => panic!("unexpected error for seed {seed}: {other}"),
        }
    }
}

#[test]
fn exact_capacity_grids_fill_cleanly() {
    for (normals, cols, rows) in [(1, 2, 2), (6, 3, 3), (13, 4, 4), (2, 5, 1)] {
        for seed in 0..16 {
            let config = config(seed, normals, cols, rows);
            assert_eq!(config.total_rooms(), config.grid_capacity());
            match DungeonGenerator::new(config).generate() {
                Ok(dungeon) => assert_structurally_valid(&dungeon, &config),
                Err(GenerationError::Exhausted { .. }) => {}
                Err(other) => panic!("unexpected error for {cols}x{rows} seed {seed}: {other}"),
            }
        }
    }
}

#[test]
fn one_room_over_capacity_is_reported_before_generating() {
    let result = DungeonGenerator::new(config(5, 2, 2, 2)).generate();
    assert!(matches!(result, Err(GenerationError::TooManyRooms { capacity: 4, .. })));
}

#[test]
fn start_and_boss_sit_at_the_ends_of_a_diameter() {
    for seed in [1_u64, 2, 3, 40, 99, 321, 1_024, 999_999] {
        let dungeon = DungeonGenerator::new(GeneratorConfig::with_seed(seed))
            .generate()
            .expect("default config fits");
        let from_start = distances_from(&dungeon, dungeon.start_id());
        assert_eq!(
            from_start[dungeon.boss_id().index()],
            Some(diameter(&dungeon)),
            "seed {seed}: start and boss should be maximally distant"
        );
    }
}

#[test]
fn mini_game_avoids_the_boss_antechamber_when_it_can() {
    for seed in 0..40 {
        let dungeon = DungeonGenerator::new(GeneratorConfig::with_seed(seed))
            .generate()
            .expect("default config fits");
        let Some(boss) = dungeon.room(dungeon.boss_id()) else {
            panic!("boss room must exist");
        };
        let antechamber = boss.doors()[0].target;
        let alternatives = dungeon
            .rooms()
            .iter()
            .filter(|room| room.id != dungeon.start_id() && room.id != dungeon.boss_id())
            .any(|room| room.id != antechamber);
        if alternatives {
            assert_ne!(dungeon.mini_game_id(), antechamber, "seed {seed}");
        }
    }
}

#[test]
fn only_normal_rooms_carry_interior_layouts() {
    let dungeon = DungeonGenerator::new(GeneratorConfig::with_seed(8_080))
        .generate()
        .expect("default config fits");
    for room in dungeon.rooms() {
        let populated =
            !room.walls.is_empty() || !room.hazards.is_empty() || !room.enemies.is_empty();
        assert_eq!(populated, room.room_type == RoomType::Normal, "{room}");
    }
}

#[test]
fn empty_layout_catalog_keeps_every_room_bare() {
    let dungeon = DungeonGenerator::new(GeneratorConfig::with_seed(8_080))
        .with_layouts(&[])
        .generate()
        .expect("default config fits");
    assert!(dungeon.rooms().iter().all(|room| room.enemies.is_empty() && room.walls.is_empty()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn generated_dungeons_hold_every_structural_invariant(
        seed in any::<u64>(),
        normals in 0_usize..=20,
        cols in 1_usize..=8,
        rows in 1_usize..=8,
    ) {
        let config = config(seed, normals, cols, rows);
        match DungeonGenerator::new(config).generate() {
            Ok(dungeon) => {
                prop_assert_eq!(check_invariants(&dungeon), Ok(()));
                prop_assert_eq!(dungeon.len(), config.total_rooms());
                let boss_doors = dungeon.room(dungeon.boss_id()).map(|room| room.doors().len());
                prop_assert_eq!(boss_doors, Some(1));
            }
            Err(GenerationError::TooManyRooms { .. }) => {
                prop_assert!(config.total_rooms() > config.grid_capacity());
            }
            Err(GenerationError::Exhausted { seed: reported, .. }) => {
                prop_assert_eq!(reported, seed);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn opposite_is_an_involution(index in 0_usize..4) {
        let direction = Direction::ALL[index];
        prop_assert_eq!(direction.opposite().opposite(), direction);
    }
}
