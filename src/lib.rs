//! Super Poach Bros - a top-down keg-poaching arcade game
//!
//! Core modules:
//! - `sim`: Simulation (movement, collisions, game state)
//! - `game`: Frame controller tying clock, input and simulation together
//! - `renderer`: Canvas 2D draw lists
//! - `platform`: Browser input and frame timing
//! - `settings`: Mode selection from the page URL

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{GameMode, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 720.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Largest frame delta the simulation will accept (seconds).
    /// Keeps a backgrounded tab from teleporting everything on return.
    pub const MAX_FRAME_DT: f32 = 0.04;

    /// Player sprite is a square of this size
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Player movement speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 240.0;
    pub const SURVIVAL_PLAYER_START: Vec2 = Vec2::new(80.0, FIELD_HEIGHT / 2.0);
    pub const GOAL_PLAYER_START: Vec2 = Vec2::new(345.0, 430.0);

    /// Keg sprite size; also the inset used when placing kegs
    pub const ITEM_SIZE: f32 = 24.0;
    /// Player centre must be closer than this to the keg to collect it
    pub const PICKUP_RADIUS: f32 = 22.0;
    /// New kegs spawn at least this far from the player
    pub const ITEM_MIN_PLAYER_DISTANCE: f32 = 72.0;
    /// Rejection-sampling budget before the fallback placement kicks in
    pub const MAX_ITEM_ATTEMPTS: u32 = 256;

    /// Round length (seconds)
    pub const ROUND_TIME_SECONDS: f32 = 45.0;

    /// Scoring
    pub const ITEM_POINTS: u64 = 10;
    pub const GOAL_BONUS: u64 = 50;

    /// Goal zone (goal mode only)
    pub const GOAL_ZONE_X: f32 = 300.0;
    pub const GOAL_ZONE_Y: f32 = 12.0;
    pub const GOAL_ZONE_WIDTH: f32 = 120.0;
    pub const GOAL_ZONE_HEIGHT: f32 = 48.0;
    /// Kegs never spawn above this line in goal mode
    pub const GOAL_BAND_HEIGHT: f32 = 80.0;
}

/// Clamp without panicking when `min > max` (min wins)
#[inline]
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Clamp a square of `size` at `pos` so it stays inside the field
#[inline]
pub fn clamp_to_field(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        clamp_axis(pos.x, 0.0, consts::FIELD_WIDTH - size.x),
        clamp_axis(pos.y, 0.0, consts::FIELD_HEIGHT - size.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_axis(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp_axis(4.5, 0.0, 10.0), 4.5);
        // Inverted range resolves to min instead of panicking
        assert_eq!(clamp_axis(4.5, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_clamp_to_field() {
        let size = Vec2::splat(consts::PLAYER_SIZE);
        let clamped = clamp_to_field(Vec2::new(-20.0, 900.0), size);
        assert_eq!(clamped, Vec2::new(0.0, consts::FIELD_HEIGHT - consts::PLAYER_SIZE));
    }
}
