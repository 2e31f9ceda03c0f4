//! Entity factories: obstacle layouts and keg placement

use glam::Vec2;
use rand::Rng;

use super::state::Obstacle;
use crate::GameMode;
use crate::consts::*;

/// Fixed obstacle layout for `mode`. Never randomized, so every round of a
/// mode plays out the same hazards.
pub fn create_obstacles(mode: GameMode) -> Vec<Obstacle> {
    match mode {
        GameMode::Survival => vec![
            Obstacle::new(80.0, 70.0, 90.0, 26.0, 54.0, 0.0),
            Obstacle::new(480.0, 110.0, 26.0, 110.0, 0.0, 74.0),
            Obstacle::new(320.0, 330.0, 120.0, 26.0, -62.0, 0.0),
            Obstacle::new(620.0, 260.0, 26.0, 100.0, 0.0, -65.0),
        ],
        // Horizontal lanes between the start line and the goal
        GameMode::Goal => vec![
            Obstacle::new(60.0, 110.0, 110.0, 26.0, 120.0, 0.0),
            Obstacle::new(420.0, 190.0, 130.0, 26.0, -150.0, 0.0),
            Obstacle::new(200.0, 270.0, 100.0, 26.0, 170.0, 0.0),
            Obstacle::new(520.0, 350.0, 120.0, 26.0, -110.0, 0.0),
        ],
    }
}

/// Is `pos` an acceptable keg position for a player standing at `player`?
pub fn is_valid_item_position(pos: Vec2, player: Vec2, mode: GameMode) -> bool {
    if pos.distance(player) < ITEM_MIN_PLAYER_DISTANCE {
        return false;
    }
    !(mode.has_goal() && pos.y < GOAL_BAND_HEIGHT)
}

/// Pick a keg position by rejection sampling.
///
/// Gives up after `MAX_ITEM_ATTEMPTS` samples and returns the inset field
/// corner farthest from the player instead.
pub fn random_item<R: Rng + ?Sized>(rng: &mut R, player: Vec2, mode: GameMode) -> Vec2 {
    let (min_x, max_x) = (ITEM_SIZE, (FIELD_WIDTH - ITEM_SIZE).max(ITEM_SIZE));
    let (min_y, max_y) = (ITEM_SIZE, (FIELD_HEIGHT - ITEM_SIZE).max(ITEM_SIZE));

    for _ in 0..MAX_ITEM_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(min_x..=max_x),
            rng.random_range(min_y..=max_y),
        );
        if is_valid_item_position(candidate, player, mode) {
            return candidate;
        }
    }

    let fallback = fallback_item(player, mode);
    log::warn!(
        "No keg position found in {} attempts, falling back to {:?}",
        MAX_ITEM_ATTEMPTS,
        fallback
    );
    fallback
}

/// Deterministic placement: the allowed inset corner farthest from the player
fn fallback_item(player: Vec2, mode: GameMode) -> Vec2 {
    let (min_x, max_x) = (ITEM_SIZE, FIELD_WIDTH - ITEM_SIZE);
    let (min_y, max_y) = (ITEM_SIZE, FIELD_HEIGHT - ITEM_SIZE);
    [
        Vec2::new(min_x, min_y),
        Vec2::new(max_x, min_y),
        Vec2::new(min_x, max_y),
        Vec2::new(max_x, max_y),
    ]
    .into_iter()
    .filter(|corner| !(mode.has_goal() && corner.y < GOAL_BAND_HEIGHT))
    .max_by(|a, b| {
        a.distance_squared(player)
            .partial_cmp(&b.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
    .unwrap_or(Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0))
}
