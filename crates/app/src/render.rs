//! Drawing for the current room, the player, and the HUD.

use app::app_loop::AppState;
use app::hud_text::{CONTROLS_HINT, debug_lines, hud_lines};
use dungeon_core::content::{DOOR_FRAME_COLOR, WALL_COLOR, hazard_color};
use dungeon_core::{HazardKind, Rect, Rgb, Room, ScreenSize, Vec2};
use macroquad::prelude::*;

const PLAYER_COLOR: Rgb = Rgb(0x4f, 0xc3, 0xf7);
const LOADING_ZONE_TINT: Color = Color { r: 1.0, g: 0.9, b: 0.2, a: 0.25 };
const HUD_FONT_SIZE: f32 = 20.0;
const HUD_LINE_STEP: f32 = 20.0;
const HUD_PAD: f32 = 24.0;

/// Maps room pixels onto the window, which may be a different size than the room.
#[derive(Clone, Copy)]
struct View {
    sx: f32,
    sy: f32,
}

impl View {
    fn fit(room: ScreenSize) -> Self {
        Self { sx: screen_width() / room.width as f32, sy: screen_height() / room.height as f32 }
    }

    fn fill(self, rect: Rect, color: Color) {
        draw_rectangle(
            rect.x as f32 * self.sx,
            rect.y as f32 * self.sy,
            rect.width as f32 * self.sx,
            rect.height as f32 * self.sy,
            color,
        );
    }

    fn outline(self, rect: Rect, thickness: f32, color: Color) {
        draw_rectangle_lines(
            rect.x as f32 * self.sx,
            rect.y as f32 * self.sy,
            rect.width as f32 * self.sx,
            rect.height as f32 * self.sy,
            thickness,
            color,
        );
    }

    fn point(self, point: Vec2) -> (f32, f32) {
        (point.x * self.sx, point.y * self.sy)
    }
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

pub fn draw_frame(app: &AppState) {
    let room = app.dungeon.current_room();
    draw_room(room, app.debug_overlay);

    let view = View::fit(room.screen);
    view.fill(app.player.bounds(), color(PLAYER_COLOR));

    draw_hud(app);
}

/// Floor, boundary walls with door gaps, interior walls, hazards, and enemies.
///
/// With `debug` set, loading zones are tinted and entity bounds outlined.
pub fn draw_room(room: &Room, debug: bool) {
    let view = View::fit(room.screen);
    let floor = color(room.floor_color());
    clear_background(floor);

    for wall in room.boundary_walls() {
        view.fill(wall, color(WALL_COLOR));
    }
    for door in room.doors() {
        view.fill(door.opening, floor);
        view.outline(door.opening, 2.0, color(DOOR_FRAME_COLOR));
        if debug {
            view.fill(door.loading_zone, LOADING_ZONE_TINT);
        }
    }

    for wall in &room.walls {
        view.fill(wall.rect, color(WALL_COLOR));
    }

    for hazard in &room.hazards {
        let tint = color(hazard_color(hazard.kind));
        view.fill(hazard.rect, Color { a: 0.6, ..tint });
        if hazard.kind == HazardKind::Spike {
            let (x1, y1) = view.point(Vec2::new(hazard.rect.x as f32, hazard.rect.y as f32));
            let (x2, y2) =
                view.point(Vec2::new(hazard.rect.right() as f32, hazard.rect.bottom() as f32));
            draw_line(x1, y1, x2, y2, 2.0, tint);
            draw_line(x1, y2, x2, y1, 2.0, tint);
        }
    }

    for enemy in room.enemies.values() {
        view.fill(enemy.bounds(), color(enemy.stats().color));
        if debug {
            view.outline(enemy.bounds(), 1.0, WHITE);
        }
    }
}

fn draw_hud(app: &AppState) {
    let mut y = HUD_PAD + 8.0;
    let mut lines = hud_lines(app);
    if app.debug_overlay {
        lines.extend(debug_lines(app));
    }
    for line in lines {
        draw_text(&line, HUD_PAD, y, HUD_FONT_SIZE, WHITE);
        y += HUD_LINE_STEP;
    }
    draw_text(CONTROLS_HINT, HUD_PAD, screen_height() - HUD_PAD, 16.0, LIGHTGRAY);
}
