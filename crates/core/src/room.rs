//! Rooms, their doors, and the loading zones that trigger room switches.

use std::fmt;

use slotmap::SlotMap;

use crate::content::{self, HazardPlacement, LayoutScale, RoomLayout};
use crate::entities::{ActorState, Enemy, EnemyId, Hazard, Wall};
use crate::types::{Direction, GridCell, Rect, RoomId, RoomType, Rgb, ScreenSize, Vec2};

pub const DOOR_SIZE: i32 = 64;
pub const LOADING_ZONE_DEPTH: i32 = 48;
pub const WALL_THICKNESS: i32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Door {
    pub direction: Direction,
    pub target: RoomId,
    /// Visual gap cut into the boundary wall.
    pub opening: Rect,
    /// Trigger region; deeper than the opening so the actor switches rooms before reaching the
    /// edge.
    pub loading_zone: Rect,
}

impl Door {
    pub fn new(direction: Direction, target: RoomId, screen: ScreenSize) -> Self {
        let (opening, loading_zone) = door_rects(direction, screen);
        Self { direction, target, opening, loading_zone }
    }
}

fn door_rects(direction: Direction, screen: ScreenSize) -> (Rect, Rect) {
    let cx = screen.width / 2;
    let cy = screen.height / 2;
    let half = DOOR_SIZE / 2;
    match direction {
        Direction::North => (
            Rect::new(cx - half, 0, DOOR_SIZE, WALL_THICKNESS),
            Rect::new(cx - half, 0, DOOR_SIZE, LOADING_ZONE_DEPTH),
        ),
        Direction::South => (
            Rect::new(cx - half, screen.height - WALL_THICKNESS, DOOR_SIZE, WALL_THICKNESS),
            Rect::new(cx - half, screen.height - LOADING_ZONE_DEPTH, DOOR_SIZE, LOADING_ZONE_DEPTH),
        ),
        Direction::West => (
            Rect::new(0, cy - half, WALL_THICKNESS, DOOR_SIZE),
            Rect::new(0, cy - half, LOADING_ZONE_DEPTH, DOOR_SIZE),
        ),
        Direction::East => (
            Rect::new(screen.width - WALL_THICKNESS, cy - half, WALL_THICKNESS, DOOR_SIZE),
            Rect::new(screen.width - LOADING_ZONE_DEPTH, cy - half, LOADING_ZONE_DEPTH, DOOR_SIZE),
        ),
    }
}

#[derive(Clone, Debug)]
pub struct Room {
    pub id: RoomId,
    pub room_type: RoomType,
    pub grid_cell: GridCell,
    pub screen: ScreenSize,
    // Insertion order is the transition scan order.
    doors: Vec<Door>,
    pub walls: Vec<Wall>,
    pub hazards: Vec<Hazard>,
    pub enemies: SlotMap<EnemyId, Enemy>,
}

impl Room {
    pub fn new(id: RoomId, room_type: RoomType, grid_cell: GridCell, screen: ScreenSize) -> Self {
        Self {
            id,
            room_type,
            grid_cell,
            screen,
            doors: Vec::new(),
            walls: Vec::new(),
            hazards: Vec::new(),
            enemies: SlotMap::with_key(),
        }
    }

    /// Adds a door, replacing any existing door in the same direction in place.
    pub fn add_door(&mut self, direction: Direction, target: RoomId) {
        let door = Door::new(direction, target, self.screen);
        match self.doors.iter_mut().find(|existing| existing.direction == direction) {
            Some(existing) => *existing = door,
            None => self.doors.push(door),
        }
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn door(&self, direction: Direction) -> Option<&Door> {
        self.doors.iter().find(|door| door.direction == direction)
    }

    pub fn apply_layout(&mut self, layout: &RoomLayout) {
        let scale = LayoutScale::new(self.screen);
        self.walls = layout.walls.iter().map(|&rect| Wall { rect: scale.rect(rect) }).collect();
        self.hazards = layout
            .hazards
            .iter()
            .map(|&HazardPlacement { rect, kind }| Hazard {
                rect: scale.rect(rect),
                kind,
                damage: content::DEFAULT_HAZARD_DAMAGE,
            })
            .collect();
        self.enemies.clear();
        for spawn in layout.enemies {
            let center = Vec2::new(scale.x(spawn.x) as f32, scale.y(spawn.y) as f32);
            self.enemies.insert(Enemy::spawn(spawn.kind, center));
        }
    }

    /// First door, in insertion order, whose loading zone overlaps `actor_bounds`.
    pub fn check_transition(&self, actor_bounds: Rect) -> Option<(Direction, RoomId)> {
        self.doors
            .iter()
            .find(|door| door.loading_zone.intersects(actor_bounds))
            .map(|door| (door.direction, door.target))
    }

    /// One simulation tick: enemies chase the actor, hazards under the actor deal damage.
    pub fn update(&mut self, dt: f32, actor: &mut ActorState) {
        let target = actor.bounds().center();
        for enemy in self.enemies.values_mut() {
            enemy.update(dt, target);
        }

        let bounds = actor.bounds();
        for hazard in &self.hazards {
            if hazard.collides(bounds) {
                actor.take_damage(hazard.damage);
            }
        }
    }

    pub fn floor_color(&self) -> Rgb {
        content::floor_color(self.room_type)
    }

    /// Boundary wall segments along the four screen edges, door gaps not subtracted.
    pub fn boundary_walls(&self) -> [Rect; 4] {
        let ScreenSize { width, height } = self.screen;
        [
            Rect::new(0, 0, width, WALL_THICKNESS),
            Rect::new(0, height - WALL_THICKNESS, width, WALL_THICKNESS),
            Rect::new(0, 0, WALL_THICKNESS, height),
            Rect::new(width - WALL_THICKNESS, 0, WALL_THICKNESS, height),
        ]
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doors: Vec<&str> = self.doors.iter().map(|door| door.direction.label()).collect();
        write!(
            f,
            "Room(id={}, type={}, grid=({}, {}), doors=[{}], walls={}, hazards={}, enemies={})",
            self.id,
            self.room_type.label(),
            self.grid_cell.col,
            self.grid_cell.row,
            doors.join(", "),
            self.walls.len(),
            self.hazards.len(),
            self.enemies.len()
        )
    }
}
