//! Axis-aligned bounding boxes
//!
//! Every entity in the playfield exposes its extents as an [`Aabb`], and all
//! collision tests reduce to box overlap. Overlap is inclusive: touching
//! edges count as contact, and a zero-size box degrades to a point test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rectangle described by its four edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Box from its top-left corner and size
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            right: left + width,
            top,
            bottom: top + height,
        }
    }

    /// Box from its center and half extents
    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            left: center.x - half_extent.x,
            right: center.x + half_extent.x,
            top: center.y - half_extent.y,
            bottom: center.y + half_extent.y,
        }
    }

    /// Inclusive overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right >= other.left
            && self.left <= other.right
            && self.bottom >= other.top
            && self.top <= other.bottom
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}
