//! Frame controller
//!
//! `Game` owns the simulation state, the held-key set and the frame clock.
//! The browser shell calls `frame` once per animation frame and paints
//! `scene()`; nothing else touches the state.

use crate::GameMode;
use crate::platform::{FrameClock, HeldKeys};
use crate::renderer::{DrawCmd, build_scene};
use crate::sim::{GameEvent, GameState, TickInput, tick};

#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub keys: HeldKeys,
    clock: FrameClock,
}

impl Game {
    pub fn new(mode: GameMode, seed: u64) -> Self {
        log::info!("New {} round with seed {}", mode.as_str(), seed);
        Self {
            state: GameState::new(mode, seed),
            keys: HeldKeys::new(),
            clock: FrameClock::new(),
        }
    }

    /// Advance the simulation to `timestamp_ms` and return what happened
    pub fn frame(&mut self, timestamp_ms: f64) -> Vec<GameEvent> {
        let dt = self.clock.advance(timestamp_ms);
        let input = TickInput::new(self.keys.direction());
        tick(&mut self.state, &input, dt);

        let events = self.state.drain_events();
        for event in &events {
            log_event(event);
        }
        events
    }

    /// Start a fresh round in the current mode
    pub fn restart(&mut self) {
        self.state.reset();
        self.clock.reset();
        log::info!("Round restarted ({})", self.state.mode.as_str());
    }

    /// Draw list for the current frame
    pub fn scene(&self) -> Vec<DrawCmd> {
        build_scene(&self.state)
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::ItemCollected { score } => log::debug!("Keg collected, score {}", score),
        GameEvent::ObstacleHit { index } => log::info!("Hit obstacle {}, round lost", index),
        GameEvent::TimeUp => log::info!("Time up, round lost"),
        GameEvent::GoalReached { score } => log::info!("Goal reached with score {}", score),
    }
}
