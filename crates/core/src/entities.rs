//! Interior entities of a room and the actor view the room simulates against.

use slotmap::new_key_type;

use crate::content::{EnemyKind, EnemyStats, HazardKind, enemy_stats};
use crate::types::{Rect, Vec2};

new_key_type! {
    pub struct EnemyId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    pub rect: Rect,
}

impl Wall {
    pub fn collides(&self, rect: Rect) -> bool {
        self.rect.intersects(rect)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hazard {
    pub rect: Rect,
    pub kind: HazardKind,
    pub damage: i32,
}

impl Hazard {
    pub fn collides(&self, rect: Rect) -> bool {
        self.rect.intersects(rect)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub health: i32,
}

impl Enemy {
    pub fn spawn(kind: EnemyKind, center: Vec2) -> Self {
        Self { kind, pos: center, health: enemy_stats(kind).health }
    }

    pub fn stats(&self) -> EnemyStats {
        enemy_stats(self.kind)
    }

    pub fn bounds(&self) -> Rect {
        let stats = self.stats();
        Rect::centered_at(self.pos, stats.width, stats.height)
    }

    /// Chase `target` at the kind's speed.
    pub fn update(&mut self, dt: f32, target: Vec2) {
        let heading = (target - self.pos).normalized();
        self.pos = self.pos + heading * (self.stats().speed * dt);
    }
}

/// The slice of player state the dungeon needs: where it is, how big, and its health.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    pub pos: Vec2,
    pub width: i32,
    pub height: i32,
    pub health: i32,
    pub max_health: i32,
}

impl ActorState {
    pub fn new(center: Vec2, width: i32, height: i32, max_health: i32) -> Self {
        Self { pos: center, width, height, health: max_health, max_health }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered_at(self.pos, self.width, self.height)
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
