//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep, supplied by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Bounce, reflect_in_field, square_hits_rect, within_radius};
pub use rect::Rect;
pub use spawn::{create_obstacles, random_item};
pub use state::{GameEvent, GameState, GameStatus, Obstacle, Player};
pub use tick::{TickInput, tick};
