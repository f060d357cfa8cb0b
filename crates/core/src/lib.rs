pub mod content;
pub mod dungeon;
pub mod entities;
pub mod mapgen;
pub mod room;
pub mod types;

pub use content::{EnemyKind, HazardKind, NORMAL_ROOM_LAYOUTS, RoomLayout};
pub use dungeon::{Dungeon, ENTRY_INSET, InvariantViolation, check_invariants};
pub use entities::{ActorState, Enemy, EnemyId, Hazard, Wall};
pub use mapgen::{DungeonGenerator, GenerationError, GeneratorConfig, generate_dungeon};
pub use room::{Door, Room};
pub use types::*;
