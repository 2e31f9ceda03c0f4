//! Canvas 2D rendering module
//!
//! `scene::build` produces a backend-neutral draw list from the game state;
//! on wasm32 `canvas::paint` replays it on a `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod colors;
pub mod scene;
pub mod sprites;

use glam::Vec2;

use crate::sim::Rect;
use colors::Color;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// A single 2D draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear to transparent
    Clear { rect: Rect },
    /// Fill with a solid color
    FillRect { rect: Rect, color: Color },
    /// Fill with a linear gradient from the top-left to the bottom-right corner
    FillGradient { rect: Rect, from: Color, to: Color },
    /// Text anchored at `pos` on its baseline
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: Color,
        align: TextAlign,
    },
}

/// Something a draw list can be replayed on
pub trait Surface {
    fn draw(&self, cmd: &DrawCmd);
}

/// Replay `cmds` in order and return how many were drawn. Without a surface
/// nothing is drawn.
pub fn replay<S: Surface + ?Sized>(surface: Option<&S>, cmds: &[DrawCmd]) -> usize {
    let Some(surface) = surface else {
        return 0;
    };
    for cmd in cmds {
        surface.draw(cmd);
    }
    cmds.len()
}

pub use scene::{build as build_scene, status_line};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;
    use crate::sim::GameState;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        drawn: RefCell<Vec<DrawCmd>>,
    }

    impl Surface for Recorder {
        fn draw(&self, cmd: &DrawCmd) {
            self.drawn.borrow_mut().push(cmd.clone());
        }
    }

    #[test]
    fn test_replay_without_surface_is_noop() {
        let cmds = build_scene(&GameState::new(GameMode::Survival, 3));
        assert!(!cmds.is_empty());
        assert_eq!(replay::<Recorder>(None, &cmds), 0);
    }

    #[test]
    fn test_replay_keeps_order() {
        let cmds = build_scene(&GameState::new(GameMode::Goal, 3));
        let recorder = Recorder::default();
        assert_eq!(replay(Some(&recorder), &cmds), cmds.len());
        assert_eq!(*recorder.drawn.borrow(), cmds);
    }
}
