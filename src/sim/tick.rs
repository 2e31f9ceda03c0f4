//! Per-frame simulation tick
//!
//! `tick` is the whole game rule set: a pure transition over `GameState`
//! driven by an elapsed time and an input snapshot.

use glam::Vec2;

use super::collision::{square_hits_rect, within_radius};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Movement direction, each axis in {-1, 0, 1}
    pub direction: Vec2,
}

impl TickInput {
    pub fn new(direction: Vec2) -> Self {
        Self { direction }
    }
}

/// Advance the game state by `dt` seconds.
///
/// Does nothing once the round has ended; the caller keeps redrawing the
/// frozen frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if !state.is_running() {
        return;
    }
    let dt = dt.max(0.0);

    state.player.step(input.direction, dt);

    let reflect_y = state.mode.reflects_vertically();
    for obstacle in &mut state.obstacles {
        obstacle.advance(dt, reflect_y);
    }

    let hit = state
        .obstacles
        .iter()
        .position(|o| square_hits_rect(state.player.pos, PLAYER_SIZE, &o.rect));
    if let Some(index) = hit {
        state.lose(GameEvent::ObstacleHit { index });
        return;
    }

    if within_radius(state.player.center(), state.item, PICKUP_RADIUS) {
        state.score += ITEM_POINTS;
        state.events.push(GameEvent::ItemCollected { score: state.score });
        state.respawn_item();
    }

    if let Some(goal) = state.goal_zone() {
        if state.player.rect().overlaps(&goal) {
            state.win();
            return;
        }
    }

    state.time_left = (state.time_left - dt).max(0.0);
    if state.time_left <= 0.0 {
        state.lose(GameEvent::TimeUp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;
    use crate::sim::state::{GameStatus, Obstacle};
    use proptest::prelude::{ProptestConfig, any};
    use proptest::{prop_assert, prop_assert_eq, proptest};

    const DT: f32 = 1.0 / 60.0;

    /// Fresh round with a single parked obstacle far from the player
    fn quiet_state(mode: GameMode) -> GameState {
        let mut state = GameState::new(mode, 12345);
        state.obstacles = vec![Obstacle::new(600.0, 400.0, 20.0, 20.0, 0.0, 0.0)];
        state
    }

    #[test]
    fn test_player_moves_with_input() {
        let mut state = quiet_state(GameMode::Survival);
        let start = state.player.pos;
        tick(&mut state, &TickInput::new(Vec2::new(1.0, -1.0)), 0.02);
        let moved = state.player.pos - start;
        assert!((moved.x - PLAYER_SPEED * 0.02).abs() < 1e-3);
        assert!((moved.y + PLAYER_SPEED * 0.02).abs() < 1e-3);
    }

    #[test]
    fn test_pickup_scores_and_respawns() {
        let mut state = quiet_state(GameMode::Survival);
        state.item = state.player.center() + Vec2::new(5.0, 0.0);
        let before = state.item;

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.score, ITEM_POINTS);
        assert_ne!(state.item, before);
        assert!(state.item.distance(state.player.pos) >= ITEM_MIN_PLAYER_DISTANCE);
        assert_eq!(state.drain_events(), vec![GameEvent::ItemCollected { score: 10 }]);
    }

    #[test]
    fn test_timer_floors_at_zero_and_loses() {
        let mut state = quiet_state(GameMode::Survival);
        state.time_left = 0.01;
        tick(&mut state, &TickInput::default(), 0.03);
        assert_eq!(state.time_left, 0.0);
        assert_eq!(state.status, GameStatus::Lost);
        assert_eq!(state.drain_events(), vec![GameEvent::TimeUp]);
    }

    #[test]
    fn test_obstacle_collision_loses() {
        let mut state = quiet_state(GameMode::Survival);
        let pos = state.player.pos;
        state.obstacles.push(Obstacle::new(pos.x + 10.0, pos.y + 10.0, 20.0, 20.0, 0.0, 0.0));
        let time_before = state.time_left;

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.status, GameStatus::Lost);
        assert_eq!(state.drain_events(), vec![GameEvent::ObstacleHit { index: 1 }]);
        // The losing frame stops before the timer runs
        assert_eq!(state.time_left, time_before);
    }

    #[test]
    fn test_goal_awards_bonus_once() {
        let mut state = quiet_state(GameMode::Goal);
        let goal = state.goal_zone().unwrap();
        state.player.pos = goal.pos() + Vec2::new(10.0, 5.0);
        state.item = Vec2::new(600.0, 300.0);
        state.score = 20;

        tick(&mut state, &TickInput::default(), DT);
        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.score, 20 + GOAL_BONUS);
        assert_eq!(state.drain_events(), vec![GameEvent::GoalReached { score: 70 }]);
    }

    #[test]
    fn test_survival_has_no_goal() {
        let mut state = quiet_state(GameMode::Survival);
        state.player.pos = Vec2::new(GOAL_ZONE_X + 10.0, GOAL_ZONE_Y + 5.0);
        state.item = Vec2::new(600.0, 300.0);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn test_terminal_state_is_frozen() {
        let mut state = GameState::new(GameMode::Survival, 9);
        state.status = GameStatus::Lost;
        state.score = 40;
        state.time_left = 12.0;
        let player = state.player;
        let obstacles = state.obstacles.clone();
        let item = state.item;

        for _ in 0..120 {
            tick(&mut state, &TickInput::new(Vec2::new(1.0, 1.0)), DT);
        }

        assert_eq!(state.score, 40);
        assert_eq!(state.time_left, 12.0);
        assert_eq!(state.player, player);
        assert_eq!(state.obstacles, obstacles);
        assert_eq!(state.item, item);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut state = quiet_state(GameMode::Survival);
        let pos = state.player.pos;
        tick(&mut state, &TickInput::new(Vec2::new(1.0, 0.0)), -1.0);
        assert_eq!(state.player.pos, pos);
        assert_eq!(state.time_left, ROUND_TIME_SECONDS);
    }

    #[test]
    fn test_goal_obstacles_do_not_reflect_vertically() {
        let mut state = quiet_state(GameMode::Goal);
        state.obstacles = vec![Obstacle::new(100.0, FIELD_HEIGHT - 20.0, 40.0, 10.0, 0.0, 50.0)];
        tick(&mut state, &TickInput::default(), 0.4);
        assert_eq!(state.obstacles[0].vel.y, 50.0);
        assert!(state.obstacles[0].rect.bottom() > FIELD_HEIGHT);
    }

    #[test]
    fn test_obstacle_bounces_once_per_contact() {
        let mut state = quiet_state(GameMode::Survival);
        state.player.pos = Vec2::new(40.0, 40.0);
        state.item = Vec2::new(400.0, 300.0);
        state.obstacles = vec![Obstacle::new(FIELD_WIDTH - 21.0, 400.0, 20.0, 20.0, 100.0, 0.0)];

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.obstacles[0].vel.x, -100.0);
        assert_eq!(state.obstacles[0].rect.right(), FIELD_WIDTH);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.obstacles[0].vel.x, -100.0);
        assert!(state.obstacles[0].rect.right() < FIELD_WIDTH);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(GameMode::Survival, 99999);
        let mut state2 = GameState::new(GameMode::Survival, 99999);

        let inputs = [
            TickInput::new(Vec2::new(1.0, 0.0)),
            TickInput::new(Vec2::new(1.0, 1.0)),
            TickInput::new(Vec2::new(0.0, -1.0)),
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(400) {
            tick(&mut state1, input, DT);
            tick(&mut state2, input, DT);
        }

        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.item, state2.item);
        assert_eq!(state1.status, state2.status);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_player_stays_in_field(
            steps in proptest::collection::vec((-1i8..=1, -1i8..=1, 0.0f32..5.0), 1..40),
            seed in any::<u64>(),
        ) {
            let mut state = GameState::new(GameMode::Survival, seed);
            state.obstacles.clear();
            for (dx, dy, dt) in steps {
                state.time_left = ROUND_TIME_SECONDS;
                tick(&mut state, &TickInput::new(Vec2::new(dx as f32, dy as f32)), dt);
                let pos = state.player.pos;
                prop_assert!(pos.x >= 0.0 && pos.x <= FIELD_WIDTH - PLAYER_SIZE);
                prop_assert!(pos.y >= 0.0 && pos.y <= FIELD_HEIGHT - PLAYER_SIZE);
            }
        }

        #[test]
        fn prop_obstacles_stay_in_field(frames in 1usize..600, dt in 0.0f32..MAX_FRAME_DT) {
            let mut state = GameState::new(GameMode::Survival, 5);
            // Park the player somewhere no survival obstacle ever reaches
            state.player.pos = Vec2::new(0.0, FIELD_HEIGHT - PLAYER_SIZE);
            for _ in 0..frames {
                state.time_left = ROUND_TIME_SECONDS;
                tick(&mut state, &TickInput::default(), dt);
                for o in &state.obstacles {
                    prop_assert!(o.rect.x >= 0.0 && o.rect.right() <= FIELD_WIDTH);
                    prop_assert!(o.rect.y >= 0.0 && o.rect.bottom() <= FIELD_HEIGHT);
                }
            }
        }

        #[test]
        fn prop_bounce_flips_sign_once(x_offset in 0.01f32..20.0, speed in 1.0f32..300.0) {
            let mut o = Obstacle::new(-x_offset, 100.0, 30.0, 20.0, -speed, 0.0);
            o.advance(0.0, true);
            prop_assert_eq!(o.vel.x, speed);
            prop_assert_eq!(o.rect.x, 0.0);
            // Re-applying the same contact leaves the inward velocity intact
            o.rect.x = -x_offset;
            o.advance(0.0, true);
            prop_assert_eq!(o.vel.x, speed);
        }
    }
}
