//! Failures surfaced by the generator and the retryable reasons behind discarded attempts.

use thiserror::Error;

use crate::dungeon::InvariantViolation;

/// Errors returned to the caller of [`super::DungeonGenerator::generate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(
        "too many rooms ({total_rooms}) for grid size {grid_cols}x{grid_rows} (capacity {capacity})"
    )]
    TooManyRooms { total_rooms: usize, grid_cols: usize, grid_rows: usize, capacity: usize },

    #[error("grid size {grid_cols}x{grid_rows} exceeds {max_side} cells on at least one axis")]
    GridTooLarge { grid_cols: usize, grid_rows: usize, max_side: usize },

    #[error("{num_normal_rooms} normal rooms plus the special rooms exceed the {max} room limit")]
    RoomCountTooLarge { num_normal_rooms: usize, max: usize },

    #[error("grid must have at least one column and one row, got {grid_cols}x{grid_rows}")]
    EmptyGrid { grid_cols: usize, grid_rows: usize },

    #[error("screen size {width}x{height} is below the {minimum}px minimum on at least one axis")]
    ScreenTooSmall { width: i32, height: i32, minimum: i32 },

    #[error(
        "dungeon generation failed after {attempts} attempts (seed={seed}, rooms={total_rooms}, \
         grid={grid_cols}x{grid_rows}); try a larger grid or fewer rooms"
    )]
    Exhausted { seed: u64, total_rooms: usize, grid_cols: usize, grid_rows: usize, attempts: u32 },
}

/// Why a single generation attempt was thrown away. Never leaves the crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum AttemptFailure {
    #[error("random walk ran out of frontier cells")]
    WalkDeadEnd,
    #[error("room graph is not connected")]
    Disconnected,
    #[error("room graph contains a cycle")]
    NotATree,
    #[error("no leaf room available for the boss")]
    NoLeafForBoss,
    #[error("no room left for the mini-game")]
    NoMiniGameCandidate,
    #[error("boss room does not have exactly one door")]
    BossDoorCount,
    #[error("assembled rooms are inconsistent: {0}")]
    Inconsistent(InvariantViolation),
}
