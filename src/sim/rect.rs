//! Axis-aligned rectangles in field space
//!
//! Origin is the top-left corner of the field, y grows downward (canvas
//! convention), and `x`/`y` name a rectangle's top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` with its top-left corner at `pos`
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.bottom() > other.y
            && self.y < other.bottom()
    }

    /// Half-open containment: left/top edges inside, right/bottom edges outside
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
