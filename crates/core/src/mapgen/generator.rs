//! Bounded retry loop over the builder, analyzer, role assigner, and materializer.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::content::{NORMAL_ROOM_LAYOUTS, RoomLayout};
use crate::dungeon::{Dungeon, ENTRY_INSET};

use super::analysis::RoomGraph;
use super::builder::grow_spanning_tree;
use super::config::{GeneratorConfig, MAX_GRID_SIDE, MAX_TOTAL_ROOMS, SPECIAL_ROOM_COUNT};
use super::error::{AttemptFailure, GenerationError};
use super::grid::GridBounds;
use super::materialize::materialize_rooms;
use super::roles::assign_roles;
use super::seed::runtime_seed;

pub const MAX_GENERATION_ATTEMPTS: u32 = 200;

/// Owns the random stream for a dungeon seed.
///
/// Attempts share one stream, so the whole retry sequence for a seed is reproducible.
pub struct DungeonGenerator {
    config: GeneratorConfig,
    seed: u64,
    rng: ChaCha8Rng,
    layouts: &'static [RoomLayout],
}

impl DungeonGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(runtime_seed);
        Self {
            config: GeneratorConfig { seed: Some(seed), ..config },
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            layouts: &NORMAL_ROOM_LAYOUTS,
        }
    }

    /// Replaces the normal-room layout catalog; an empty slice keeps normal rooms bare.
    pub fn with_layouts(mut self, layouts: &'static [RoomLayout]) -> Self {
        self.layouts = layouts;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configuration in use, with the seed resolved.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&mut self) -> Result<Dungeon, GenerationError> {
        let bounds = self.validate()?;
        self.run_attempts(|generator| generator.try_generate(bounds))
    }

    /// Runs `attempt` until it succeeds or [`MAX_GENERATION_ATTEMPTS`] have been discarded.
    fn run_attempts(
        &mut self,
        mut attempt: impl FnMut(&mut Self) -> Result<Dungeon, AttemptFailure>,
    ) -> Result<Dungeon, GenerationError> {
        let total_rooms = self.config.total_rooms();

        for number in 1..=MAX_GENERATION_ATTEMPTS {
            match attempt(self) {
                Ok(dungeon) => {
                    tracing::info!(
                        "generated dungeon seed={} rooms={} attempts={} start={} boss={} mini={}",
                        self.seed,
                        total_rooms,
                        number,
                        dungeon.start_id(),
                        dungeon.boss_id(),
                        dungeon.mini_game_id()
                    );
                    return Ok(dungeon);
                }
                Err(failure) => {
                    tracing::debug!("discarded generation attempt {number}: {failure}");
                }
            }
        }

        tracing::warn!(
            "dungeon generation exhausted {MAX_GENERATION_ATTEMPTS} attempts for seed {}",
            self.seed
        );
        Err(GenerationError::Exhausted {
            seed: self.seed,
            total_rooms,
            grid_cols: self.config.grid_cols,
            grid_rows: self.config.grid_rows,
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    fn validate(&self) -> Result<GridBounds, GenerationError> {
        let GeneratorConfig { num_normal_rooms, grid_cols, grid_rows, screen_size, .. } =
            self.config;
        if grid_cols == 0 || grid_rows == 0 {
            return Err(GenerationError::EmptyGrid { grid_cols, grid_rows });
        }
        let Some(bounds) = GridBounds::new(grid_cols, grid_rows) else {
            return Err(GenerationError::GridTooLarge {
                grid_cols,
                grid_rows,
                max_side: MAX_GRID_SIDE,
            });
        };

        let Some(total_rooms) = num_normal_rooms
            .checked_add(SPECIAL_ROOM_COUNT)
            .filter(|&total| total <= MAX_TOTAL_ROOMS)
        else {
            return Err(GenerationError::RoomCountTooLarge {
                num_normal_rooms,
                max: MAX_TOTAL_ROOMS,
            });
        };

        // Saturates only on 32-bit targets.
        let capacity = grid_cols.checked_mul(grid_rows).unwrap_or(usize::MAX);
        if total_rooms > capacity {
            return Err(GenerationError::TooManyRooms {
                total_rooms,
                grid_cols,
                grid_rows,
                capacity,
            });
        }

        let minimum = 2 * ENTRY_INSET;
        if screen_size.width < minimum || screen_size.height < minimum {
            return Err(GenerationError::ScreenTooSmall {
                width: screen_size.width,
                height: screen_size.height,
                minimum,
            });
        }
        Ok(bounds)
    }

    fn try_generate(&mut self, bounds: GridBounds) -> Result<Dungeon, AttemptFailure> {
        let tree = grow_spanning_tree(&mut self.rng, self.config.total_rooms(), bounds)?;

        let graph = RoomGraph::from_edges(tree.room_count(), &tree.edges);
        if !graph.is_connected() {
            return Err(AttemptFailure::Disconnected);
        }
        let farthest = graph.farthest_pair()?;
        let roles = assign_roles(&mut self.rng, &graph, farthest)?;

        let rooms = materialize_rooms(
            &mut self.rng,
            &tree,
            &roles,
            self.config.screen_size,
            self.layouts,
        )?;

        Dungeon::new(
            self.seed,
            self.config.screen_size,
            rooms,
            roles.start,
            roles.boss,
            roles.mini_game,
        )
        .map_err(AttemptFailure::Inconsistent)
    }
}
