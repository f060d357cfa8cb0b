//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::types::ScreenSize;

pub const DEFAULT_GRID_COLS: usize = 8;
pub const DEFAULT_GRID_ROWS: usize = 8;
pub const DEFAULT_NORMAL_ROOMS: usize = 8;
/// START, BOSS, and MINI_GAME.
pub const SPECIAL_ROOM_COUNT: usize = 3;
/// Grid coordinates are `i32`, so neither axis may exceed `i32::MAX` cells.
pub const MAX_GRID_SIDE: usize = i32::MAX as usize;
/// Room ids are `u32`.
pub const MAX_TOTAL_ROOMS: usize = u32::MAX as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Unset means "draw one from runtime entropy".
    pub seed: Option<u64>,
    pub num_normal_rooms: usize,
    pub screen_size: ScreenSize,
    pub grid_cols: usize,
    pub grid_rows: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            num_normal_rooms: DEFAULT_NORMAL_ROOMS,
            screen_size: ScreenSize::default(),
            grid_cols: DEFAULT_GRID_COLS,
            grid_rows: DEFAULT_GRID_ROWS,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Saturates at `usize::MAX`; the generator rejects counts above [`MAX_TOTAL_ROOMS`].
    pub fn total_rooms(&self) -> usize {
        self.num_normal_rooms.saturating_add(SPECIAL_ROOM_COUNT)
    }

    /// Saturates at `usize::MAX`.
    pub fn grid_capacity(&self) -> usize {
        self.grid_cols.saturating_mul(self.grid_rows)
    }
}
