//! Axis-aligned bounding box collision
//!
//! Every entity pair interaction (bullet/enemy, enemy/player, bullet/player,
//! power-up/player) goes through [`overlaps`]. All pairs are tested each tick;
//! entity counts stay small enough that no spatial partitioning is needed.

use glam::Vec2;

/// Axis-aligned box given by its top-left corner and size (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Box of the given half extents around `center`
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            size: half_extents * 2.0,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

/// Anything with a collision box
pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

/// Strict overlap test: touching edges do not collide
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.min.x < b_max.x && a_max.x > b.min.x && a.min.y < b_max.y && a_max.y > b.min.y
}

/// Overlap test between two bounded entities
#[inline]
pub fn collides(a: &impl Bounded, b: &impl Bounded) -> bool {
    overlaps(&a.bounds(), &b.bounds())
}
