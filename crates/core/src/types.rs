use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Dense room identifier, assigned in spanning-tree discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl RoomId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
}

impl GridCell {
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.grid_delta();
        Self { col: self.col + dc, row: self.row + dr }
    }

    /// Direction of the unit step from `self` to `other`, if they are orthogonal neighbours.
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        let delta = (other.col - self.col, other.row - self.row);
        Direction::ALL.into_iter().find(|direction| direction.grid_delta() == delta)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Start,
    Boss,
    MiniGame,
    Normal,
}

impl RoomType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Boss => "BOSS",
            Self::MiniGame => "MINI_GAME",
            Self::Normal => "NORMAL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Neighbour enumeration order used by the spanning-tree walk.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// `(column, row)` delta of one grid step; rows grow southward.
    pub fn grid_delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::East => "EAST",
            Self::West => "WEST",
        }
    }
}

/// Pixel-space point or offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn normalized(self) -> Self {
        let length = self.length_squared().sqrt();
        if length == 0.0 {
            return self;
        }
        Self { x: self.x / length, y: self.y / length }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Integer pixel rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn centered_at(center: Vec2, width: i32, height: i32) -> Self {
        Self {
            x: center.x.round() as i32 - width / 2,
            y: center.y.round() as i32 - height / 2,
            width,
            height,
        }
    }

    pub fn right(self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(self) -> i32 {
        self.y + self.height
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.x as f32 + self.width as f32 / 2.0, self.y as f32 + self.height as f32 / 2.0)
    }

    /// Strict overlap; rectangles that only share an edge do not intersect.
    pub fn intersects(self, other: Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains_rect(self, other: Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self { width: 960, height: 540 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution_and_never_a_fixed_point() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn direction_to_only_matches_unit_steps() {
        let origin = GridCell { col: 3, row: 3 };
        for direction in Direction::ALL {
            assert_eq!(origin.direction_to(origin.step(direction)), Some(direction));
        }
        assert_eq!(origin.direction_to(GridCell { col: 4, row: 4 }), None);
        assert_eq!(origin.direction_to(GridCell { col: 5, row: 3 }), None);
        assert_eq!(origin.direction_to(origin), None);
    }

    #[test]
    fn rects_sharing_an_edge_do_not_intersect() {
        let left = Rect::new(0, 0, 10, 10);
        assert!(!left.intersects(Rect::new(10, 0, 10, 10)));
        assert!(!left.intersects(Rect::new(0, 10, 10, 10)));
        assert!(left.intersects(Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn centered_rect_round_trips_its_center() {
        let rect = Rect::centered_at(Vec2::new(480.0, 460.0), 32, 48);
        assert_eq!(rect, Rect::new(464, 436, 32, 48));
        assert_eq!(rect.center(), Vec2::new(480.0, 460.0));
    }
}
