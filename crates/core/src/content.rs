//! Compiled-in content: enemy stat blocks, hazard kinds, palette, and normal-room layouts.

use serde::{Deserialize, Serialize};

use crate::types::{Rect, RoomType, Rgb, ScreenSize};

/// Resolution the layout catalog coordinates are written for.
pub const LAYOUT_REFERENCE_SIZE: ScreenSize = ScreenSize { width: 960, height: 540 };
pub const DEFAULT_HAZARD_DAMAGE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Basic,
    Fast,
    Heavy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Spike,
    Lava,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyStats {
    pub health: i32,
    /// Pixels per second.
    pub speed: f32,
    pub contact_damage: i32,
    pub width: i32,
    pub height: i32,
    pub color: Rgb,
}

pub fn enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Basic => EnemyStats {
            health: 40,
            speed: 80.0,
            contact_damage: 10,
            width: 24,
            height: 24,
            color: Rgb(0xe7, 0x4c, 0x3c),
        },
        EnemyKind::Fast => EnemyStats {
            health: 20,
            speed: 160.0,
            contact_damage: 5,
            width: 18,
            height: 18,
            color: Rgb(0xe6, 0x7e, 0x22),
        },
        EnemyKind::Heavy => EnemyStats {
            health: 120,
            speed: 40.0,
            contact_damage: 25,
            width: 36,
            height: 36,
            color: Rgb(0x8e, 0x44, 0xad),
        },
    }
}

pub fn hazard_color(kind: HazardKind) -> Rgb {
    match kind {
        HazardKind::Spike => Rgb(0xb0, 0xb0, 0xb0),
        HazardKind::Lava => Rgb(0xff, 0x45, 0x00),
    }
}

pub fn floor_color(room_type: RoomType) -> Rgb {
    match room_type {
        RoomType::Normal => Rgb(0x1a, 0x1a, 0x2e),
        RoomType::Start => Rgb(0x16, 0x21, 0x3e),
        RoomType::Boss => Rgb(0x2e, 0x0a, 0x0a),
        RoomType::MiniGame => Rgb(0x0a, 0x2e, 0x1a),
    }
}

pub const WALL_COLOR: Rgb = Rgb(0x3a, 0x3a, 0x5c);
pub const DOOR_FRAME_COLOR: Rgb = Rgb(0x7a, 0x5c, 0x2e);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardPlacement {
    pub rect: Rect,
    pub kind: HazardKind,
}

/// Enemy spawn point given as the enemy's center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyPlacement {
    pub x: i32,
    pub y: i32,
    pub kind: EnemyKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomLayout {
    pub walls: &'static [Rect],
    pub hazards: &'static [HazardPlacement],
    pub enemies: &'static [EnemyPlacement],
}

const fn spike(x: i32, y: i32, width: i32, height: i32) -> HazardPlacement {
    HazardPlacement { rect: Rect::new(x, y, width, height), kind: HazardKind::Spike }
}

const fn lava(x: i32, y: i32, width: i32, height: i32) -> HazardPlacement {
    HazardPlacement { rect: Rect::new(x, y, width, height), kind: HazardKind::Lava }
}

const fn enemy(x: i32, y: i32, kind: EnemyKind) -> EnemyPlacement {
    EnemyPlacement { x, y, kind }
}

pub static NORMAL_ROOM_LAYOUTS: [RoomLayout; 6] = [
    // Pillars around a central lane.
    RoomLayout {
        walls: &[
            Rect::new(680, 160, 80, 80),
            Rect::new(200, 300, 80, 80),
            Rect::new(680, 300, 80, 80),
        ],
        hazards: &[],
        enemies: &[enemy(480, 200, EnemyKind::Basic), enemy(480, 340, EnemyKind::Basic)],
    },
    // Spike corridor.
    RoomLayout {
        walls: &[Rect::new(16, 140, 680, 40), Rect::new(16, 360, 680, 40)],
        hazards: &[spike(340, 190, 40, 160), spike(480, 190, 40, 160)],
        enemies: &[
            enemy(820, 270, EnemyKind::Basic),
            enemy(820, 200, EnemyKind::Fast),
            enemy(820, 340, EnemyKind::Fast),
        ],
    },
    // Lava pit between two walls.
    RoomLayout {
        walls: &[Rect::new(300, 160, 40, 220), Rect::new(620, 160, 40, 220)],
        hazards: &[lava(340, 200, 280, 140)],
        enemies: &[enemy(480, 420, EnemyKind::Heavy)],
    },
    // Open arena.
    RoomLayout {
        walls: &[],
        hazards: &[],
        enemies: &[
            enemy(100, 100, EnemyKind::Fast),
            enemy(860, 100, EnemyKind::Fast),
            enemy(100, 440, EnemyKind::Fast),
            enemy(860, 440, EnemyKind::Fast),
            enemy(480, 270, EnemyKind::Basic),
        ],
    },
    // Staggered baffles.
    RoomLayout {
        walls: &[
            Rect::new(160, 100, 40, 200),
            Rect::new(320, 240, 40, 200),
            Rect::new(500, 100, 40, 180),
            Rect::new(660, 220, 40, 200),
            Rect::new(820, 100, 40, 160),
        ],
        hazards: &[spike(160, 420, 120, 32), spike(580, 380, 120, 32)],
        enemies: &[
            enemy(240, 270, EnemyKind::Basic),
            enemy(600, 160, EnemyKind::Basic),
            enemy(750, 400, EnemyKind::Heavy),
        ],
    },
    // Spike gauntlet.
    RoomLayout {
        walls: &[Rect::new(16, 200, 300, 30), Rect::new(16, 310, 300, 30)],
        hazards: &[
            spike(330, 160, 32, 220),
            spike(400, 160, 32, 220),
            spike(470, 160, 32, 220),
            spike(540, 160, 32, 220),
        ],
        enemies: &[
            enemy(750, 180, EnemyKind::Fast),
            enemy(750, 270, EnemyKind::Fast),
            enemy(750, 360, EnemyKind::Fast),
        ],
    },
];

/// Per-axis integer scaling from the layout reference resolution to a room's size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutScale {
    target: ScreenSize,
}

impl LayoutScale {
    pub fn new(target: ScreenSize) -> Self {
        Self { target }
    }

    pub fn x(self, value: i32) -> i32 {
        scale_axis(value, self.target.width, LAYOUT_REFERENCE_SIZE.width)
    }

    pub fn y(self, value: i32) -> i32 {
        scale_axis(value, self.target.height, LAYOUT_REFERENCE_SIZE.height)
    }

    pub fn rect(self, rect: Rect) -> Rect {
        let x = self.x(rect.x);
        let y = self.y(rect.y);
        Rect::new(x, y, self.x(rect.right()) - x, self.y(rect.bottom()) - y)
    }
}

/// `value * target / reference` in `i64`, clamped back into `i32`.
fn scale_axis(value: i32, target: i32, reference: i32) -> i32 {
    let scaled = i64::from(value) * i64::from(target) / i64::from(reference);
    i32::try_from(scaled).unwrap_or(if scaled < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_fits_inside_the_reference_room() {
        let room = Rect::new(0, 0, LAYOUT_REFERENCE_SIZE.width, LAYOUT_REFERENCE_SIZE.height);
        for (index, layout) in NORMAL_ROOM_LAYOUTS.iter().enumerate() {
            for wall in layout.walls {
                assert!(room.contains_rect(*wall), "layout {index} wall {wall:?} leaves the room");
            }
            for hazard in layout.hazards {
                assert!(room.contains_rect(hazard.rect), "layout {index} hazard leaves the room");
            }
            for spawn in layout.enemies {
                let inside = spawn.x > 0 && spawn.x < room.width;
                assert!(inside && spawn.y > 0 && spawn.y < room.height, "layout {index} spawn");
            }
        }
    }

    #[test]
    fn heavier_enemies_are_slower_and_hit_harder() {
        let fast = enemy_stats(EnemyKind::Fast);
        let basic = enemy_stats(EnemyKind::Basic);
        let heavy = enemy_stats(EnemyKind::Heavy);
        assert!(fast.speed > basic.speed && basic.speed > heavy.speed);
        assert!(fast.contact_damage < basic.contact_damage);
        assert!(basic.contact_damage < heavy.contact_damage);
        assert!(heavy.health > basic.health && basic.health > fast.health);
    }

    #[test]
    fn layout_scale_is_identity_at_reference_size() {
        let scale = LayoutScale::new(LAYOUT_REFERENCE_SIZE);
        let rect = Rect::new(340, 200, 280, 140);
        assert_eq!(scale.rect(rect), rect);
    }

    #[test]
    fn layout_scale_halves_coordinates_at_half_size() {
        let scale = LayoutScale::new(ScreenSize { width: 480, height: 270 });
        assert_eq!(scale.rect(Rect::new(340, 200, 280, 140)), Rect::new(170, 100, 140, 70));
        assert_eq!((scale.x(480), scale.y(270)), (240, 135));
    }

    #[test]
    fn layout_scale_handles_screens_far_wider_than_the_reference() {
        let scale = LayoutScale::new(ScreenSize { width: 3_000_000, height: 540 });
        assert_eq!(scale.x(LAYOUT_REFERENCE_SIZE.width), 3_000_000);
        assert_eq!(scale.x(480), 1_500_000);

        let extreme = LayoutScale::new(ScreenSize { width: i32::MAX, height: i32::MAX });
        assert_eq!(extreme.x(LAYOUT_REFERENCE_SIZE.width), i32::MAX);
        assert_eq!(extreme.y(i32::MAX), i32::MAX);
    }
}
