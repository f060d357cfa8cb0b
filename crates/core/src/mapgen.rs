//! Room-graph generation: spanning-tree growth, graph analysis, role assignment, and room
//! materialization, wrapped in a bounded retry loop.

pub mod config;
pub mod error;

mod analysis;
mod builder;
mod generator;
mod grid;
mod materialize;
mod roles;
mod seed;

pub(crate) use analysis::RoomGraph;
pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use generator::{DungeonGenerator, MAX_GENERATION_ATTEMPTS};
pub use seed::runtime_seed;

use crate::dungeon::Dungeon;

pub fn generate_dungeon(config: GeneratorConfig) -> Result<Dungeon, GenerationError> {
    DungeonGenerator::new(config).generate()
}
