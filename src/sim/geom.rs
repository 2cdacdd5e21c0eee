//! Axis-aligned boxes and overlap tests
//!
//! Every entity in the arena is a `Rect`; collision is plain AABB overlap.
//! Touching edges do not count as overlapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_H, ARENA_W};

/// An axis-aligned box: top-left position plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            pos: center - Vec2::new(w, h) / 2.0,
            size: Vec2::new(w, h),
        }
    }

    /// The whole play field
    pub fn arena() -> Self {
        Self::new(0.0, 0.0, ARENA_W, ARENA_H)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict AABB overlap; shared edges are not a hit
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Move the box the minimal amount so it lies inside `bounds`
    pub fn clamp_to(&mut self, bounds: &Rect) {
        if self.left() < bounds.left() {
            self.pos.x = bounds.left();
        } else if self.right() > bounds.right() {
            self.pos.x = bounds.right() - self.size.x;
        }
        if self.top() < bounds.top() {
            self.pos.y = bounds.top();
        } else if self.bottom() > bounds.bottom() {
            self.pos.y = bounds.bottom() - self.size.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_detects_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn overlap_rejects_separation() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn clamp_pulls_box_back_inside() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut r = Rect::new(-5.0, 95.0, 10.0, 10.0);
        r.clamp_to(&bounds);
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.bottom(), 100.0);
    }

    #[test]
    fn from_center_round_trips() {
        let c = Vec2::new(40.0, 60.0);
        let r = Rect::from_center(c, 20.0, 10.0);
        assert_eq!(r.center(), c);
        assert_eq!(r.left(), 30.0);
        assert_eq!(r.top(), 55.0);
    }
}
