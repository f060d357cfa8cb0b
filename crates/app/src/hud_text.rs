//! Text lines for the heads-up display and the F1 debug overlay.

use dungeon_core::Room;

use crate::app_loop::AppState;
use crate::{format_fingerprint, format_seed};

pub fn hud_lines(app: &AppState) -> Vec<String> {
    let room = app.dungeon.current_room();
    vec![
        format!("Seed: {}", format_seed(app.seed())),
        format!("Room {} ({})", room.id, room.room_type.label()),
        format!("Health: {}/{}", app.player.health, app.player.max_health),
    ]
}

pub fn debug_lines(app: &AppState) -> Vec<String> {
    let dungeon = &app.dungeon;
    let room = dungeon.current_room();
    let mut lines = vec![
        format!("Grid: ({}, {})", room.grid_cell.col, room.grid_cell.row),
        format!("Doors: {}", door_summary(room)),
        format!(
            "Walls: {}  Hazards: {}  Enemies: {}",
            room.walls.len(),
            room.hazards.len(),
            room.enemies.len()
        ),
        format!(
            "Start: {}  Boss: {}  Mini-game: {}  Rooms: {}",
            dungeon.start_id(),
            dungeon.boss_id(),
            dungeon.mini_game_id(),
            dungeon.len()
        ),
        format!("Fingerprint: {}", format_fingerprint(dungeon.fingerprint())),
    ];
    if app.deaths > 0 {
        lines.push(format!("Deaths: {}", app.deaths));
    }
    lines
}

/// `NORTH->3, WEST->0`, or `none`.
pub fn door_summary(room: &Room) -> String {
    if room.doors().is_empty() {
        return "none".to_string();
    }
    room.doors()
        .iter()
        .map(|door| format!("{}->{}", door.direction.label(), door.target))
        .collect::<Vec<_>>()
        .join(", ")
}

pub const CONTROLS_HINT: &str = "WASD/arrows move  F1 debug  R new dungeon  K rebuild seed";
