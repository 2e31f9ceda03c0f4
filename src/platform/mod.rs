//! Platform abstraction layer
//!
//! Browser-facing pieces that still compile natively:
//! - Held-key tracking for keyboard input
//! - Frame timing from animation-frame timestamps

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{HeldKeys, suppresses_default};
