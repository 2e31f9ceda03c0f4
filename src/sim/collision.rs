//! Collision detection and boundary response
//!
//! Everything is axis-aligned: the player is a square, obstacles are
//! rectangles, and the keg is picked up by a centre-distance test.

use glam::Vec2;

use super::rect::Rect;
use crate::clamp_axis;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Does a square of `size` at `pos` overlap `rect`?
#[inline]
pub fn square_hits_rect(pos: Vec2, size: f32, rect: &Rect) -> bool {
    Rect::square(pos, size).overlaps(rect)
}

/// Is `a` strictly closer than `radius` to `b`?
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Which axes a mover bounced on during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

/// Keep `rect` inside the field on one axis, pointing `vel` back inward.
///
/// The velocity is set toward the interior rather than negated, so applying
/// this twice to the same contact cannot flip it back out.
fn reflect_axis(pos: &mut f32, extent: f32, limit: f32, vel: &mut f32) -> bool {
    if *pos < 0.0 {
        *vel = vel.abs();
    } else if *pos + extent > limit {
        *vel = -vel.abs();
    } else {
        return false;
    }
    *pos = clamp_axis(*pos, 0.0, limit - extent);
    true
}

/// Bounce `rect` off the field edges on the requested axes
pub fn reflect_in_field(rect: &mut Rect, vel: &mut Vec2, reflect_x: bool, reflect_y: bool) -> Bounce {
    let mut bounce = Bounce::default();
    if reflect_x {
        bounce.x = reflect_axis(&mut rect.x, rect.w, FIELD_WIDTH, &mut vel.x);
    }
    if reflect_y {
        bounce.y = reflect_axis(&mut rect.y, rect.h, FIELD_HEIGHT, &mut vel.y);
    }
    bounce
}
