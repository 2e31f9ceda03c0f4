//! Game state and core simulation types
//!
//! One `GameState` holds everything a round needs. It is rebuilt in place by
//! `reset`, which is also how a new round starts.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Bounce, reflect_in_field};
use super::rect::Rect;
use super::spawn::{create_obstacles, random_item};
use crate::GameMode;
use crate::consts::*;

/// Current status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Active gameplay
    #[default]
    Running,
    /// Hit an obstacle or ran out of time
    Lost,
    /// Reached the goal zone (goal mode only)
    Won,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Things that happened during a tick, drained by the frame controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A keg was collected; `score` is the new total
    ItemCollected { score: u64 },
    /// The player touched obstacle `index`
    ObstacleHit { index: usize },
    /// The round timer reached zero
    TimeUp,
    /// The player entered the goal zone; `score` includes the bonus
    GoalReached { score: u64 },
}

/// The player sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, PLAYER_SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_SIZE / 2.0)
    }

    /// Move by `direction * speed * dt`, staying inside the field
    pub fn step(&mut self, direction: Vec2, dt: f32) {
        let next = self.pos + direction * PLAYER_SPEED * dt;
        self.pos = crate::clamp_to_field(next, Vec2::splat(PLAYER_SIZE));
    }
}

/// A moving rectangular hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Obstacle {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, vx: f32, vy: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            vel: Vec2::new(vx, vy),
        }
    }

    /// Integrate velocity and bounce off the field edges
    pub fn advance(&mut self, dt: f32, reflect_y: bool) -> Bounce {
        self.rect.x += self.vel.x * dt;
        self.rect.y += self.vel.y * dt;
        reflect_in_field(&mut self.rect, &mut self.vel, true, reflect_y)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Ruleset for this round
    pub mode: GameMode,
    /// Seed the RNG was created from
    pub seed: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    /// Centre of the single keg on the field
    pub item: Vec2,
    pub score: u64,
    /// Seconds left on the round timer
    pub time_left: f32,
    pub status: GameStatus,
    /// Events since the controller last drained them
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a running round with the given mode and seed
    pub fn new(mode: GameMode, seed: u64) -> Self {
        let player = Player::new(Self::player_start(mode));
        let mut state = Self {
            mode,
            seed,
            player,
            obstacles: Vec::new(),
            item: Vec2::ZERO,
            score: 0,
            time_left: ROUND_TIME_SECONDS,
            status: GameStatus::Running,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Where the player spawns in `mode`
    pub fn player_start(mode: GameMode) -> Vec2 {
        match mode {
            GameMode::Survival => SURVIVAL_PLAYER_START,
            GameMode::Goal => GOAL_PLAYER_START,
        }
    }

    /// Goal zone rectangle, if the mode has one
    pub fn goal_zone(&self) -> Option<Rect> {
        self.mode.has_goal().then_some(Rect::new(
            GOAL_ZONE_X,
            GOAL_ZONE_Y,
            GOAL_ZONE_WIDTH,
            GOAL_ZONE_HEIGHT,
        ))
    }

    /// Reinitialize every entity and return to `Running`.
    ///
    /// The RNG keeps its stream, so consecutive rounds get different kegs.
    pub fn reset(&mut self) {
        self.player = Player::new(Self::player_start(self.mode));
        self.obstacles = create_obstacles(self.mode);
        self.score = 0;
        self.time_left = ROUND_TIME_SECONDS;
        self.status = GameStatus::Running;
        self.events.clear();
        self.respawn_item();
    }

    /// Place the keg somewhere new, away from the player
    pub fn respawn_item(&mut self) {
        self.item = random_item(&mut self.rng, self.player.pos, self.mode);
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Running → Lost. No-op once the round is over.
    pub fn lose(&mut self, event: GameEvent) {
        if self.is_running() {
            self.status = GameStatus::Lost;
            self.events.push(event);
        }
    }

    /// Running → Won with the goal bonus. No-op once the round is over.
    pub fn win(&mut self) {
        if self.is_running() {
            self.status = GameStatus::Won;
            self.score += GOAL_BONUS;
            self.events.push(GameEvent::GoalReached { score: self.score });
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
