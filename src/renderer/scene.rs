//! Frame composition
//!
//! Turns a read-only `GameState` into the ordered draw list for one frame.

use glam::Vec2;

use super::colors;
use super::sprites::{keg_sprite, player_sprite};
use super::{DrawCmd, TextAlign};
use crate::consts::*;
use crate::sim::{GameState, GameStatus, Rect};

const FLOOR_STRIPES: u32 = 9;
const FLOOR_STRIPE_SPACING: f32 = 56.0;
const FLOOR_STRIPE_OFFSET: f32 = 16.0;

const HUD_FONT: &str = "bold 16px sans-serif";
const LABEL_FONT: &str = "bold 14px sans-serif";
const BANNER_FONT: &str = "bold 36px sans-serif";

/// HUD score text
pub fn score_text(state: &GameState) -> String {
    format!("Score: {}", state.score)
}

/// HUD timer text, rounded up to whole seconds
pub fn time_text(state: &GameState) -> String {
    format!("Time: {}s", state.time_left.max(0.0).ceil() as u32)
}

/// One-line status for the page below the canvas
pub fn status_line(state: &GameState) -> String {
    match state.status {
        GameStatus::Running => format!("Kegs secured: {}. Keep poaching and dodging!", state.score),
        GameStatus::Lost => format!("Game over! Final score: {}.", state.score),
        GameStatus::Won => format!("Goal reached! Final score: {}.", state.score),
    }
}

/// Build the full draw list for the current state
pub fn build(state: &GameState) -> Vec<DrawCmd> {
    let field = Rect::new(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);
    let mut cmds = vec![
        DrawCmd::Clear { rect: field },
        DrawCmd::FillGradient {
            rect: field,
            from: colors::BACKGROUND_TOP,
            to: colors::BACKGROUND_BOTTOM,
        },
    ];

    for i in 0..FLOOR_STRIPES {
        cmds.push(DrawCmd::FillRect {
            rect: Rect::new(0.0, i as f32 * FLOOR_STRIPE_SPACING + FLOOR_STRIPE_OFFSET, FIELD_WIDTH, 2.0),
            color: colors::FLOOR_STRIPE,
        });
    }

    if let Some(goal) = state.goal_zone() {
        cmds.push(DrawCmd::FillRect {
            rect: goal,
            color: colors::GOAL_FILL,
        });
        let center = goal.center();
        cmds.push(DrawCmd::Text {
            text: "GOAL".to_string(),
            pos: Vec2::new(center.x, center.y + 5.0),
            font: LABEL_FONT,
            color: colors::GOAL_LABEL,
            align: TextAlign::Center,
        });
    }

    cmds.extend(keg_sprite(state.item, ITEM_SIZE));

    for obstacle in &state.obstacles {
        cmds.push(DrawCmd::FillRect {
            rect: obstacle.rect,
            color: colors::OBSTACLE,
        });
    }

    cmds.extend(player_sprite(state.player.pos, PLAYER_SIZE));

    cmds.push(DrawCmd::Text {
        text: score_text(state),
        pos: Vec2::new(14.0, 24.0),
        font: HUD_FONT,
        color: colors::HUD_TEXT,
        align: TextAlign::Left,
    });
    cmds.push(DrawCmd::Text {
        text: time_text(state),
        pos: Vec2::new(FIELD_WIDTH - 105.0, 24.0),
        font: HUD_FONT,
        color: colors::HUD_TEXT,
        align: TextAlign::Left,
    });

    if state.status.is_terminal() {
        push_banner(&mut cmds, state);
    }

    cmds
}

/// Shade the field and announce how the round ended
fn push_banner(cmds: &mut Vec<DrawCmd>, state: &GameState) {
    let (title, color) = match state.status {
        GameStatus::Won => ("GOAL REACHED!", colors::BANNER_WON),
        _ => ("GAME OVER", colors::BANNER_LOST),
    };
    let mid = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);

    cmds.push(DrawCmd::FillRect {
        rect: Rect::new(0.0, mid.y - 60.0, FIELD_WIDTH, 120.0),
        color: colors::BANNER_SHADE,
    });
    cmds.push(DrawCmd::Text {
        text: title.to_string(),
        pos: mid - Vec2::new(0.0, 8.0),
        font: BANNER_FONT,
        color,
        align: TextAlign::Center,
    });
    cmds.push(DrawCmd::Text {
        text: format!("Final score: {}. Press Restart to play again.", state.score),
        pos: mid + Vec2::new(0.0, 28.0),
        font: HUD_FONT,
        color: colors::HUD_TEXT,
        align: TextAlign::Center,
    });
}
