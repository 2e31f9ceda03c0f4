//! Pixel-art sprites built from filled rectangles

use glam::Vec2;

use super::DrawCmd;
use super::colors::{Color, keg, player};
use crate::sim::Rect;

/// One cell run of the player sprite on a 10×10 grid: (col, row, color, w, h)
type Cell = (f32, f32, Color, f32, f32);

const PLAYER_CELLS: [Cell; 16] = [
    // Cap
    (3.0, 0.0, player::CAP, 4.0, 1.0),
    (2.0, 1.0, player::CAP, 6.0, 1.0),
    (3.0, 2.0, player::CAP_BAND, 4.0, 1.0),
    // Face
    (3.0, 3.0, player::SKIN, 4.0, 2.0),
    (3.0, 4.0, player::EYE, 1.0, 1.0),
    (6.0, 4.0, player::EYE, 1.0, 1.0),
    (4.0, 5.0, player::MOUTH, 2.0, 1.0),
    (2.0, 5.0, player::SKIN, 1.0, 1.0),
    (7.0, 5.0, player::SKIN, 1.0, 1.0),
    // Body and hands
    (2.0, 6.0, player::SHIRT, 6.0, 2.0),
    (2.0, 8.0, player::SKIN, 1.0, 1.0),
    (7.0, 8.0, player::SKIN, 1.0, 1.0),
    // Legs and shoes
    (3.0, 8.0, player::TROUSERS, 1.0, 2.0),
    (6.0, 8.0, player::TROUSERS, 1.0, 2.0),
    (2.0, 9.0, player::SHOES, 2.0, 1.0),
    (6.0, 9.0, player::SHOES, 2.0, 1.0),
];

/// Player sprite with its top-left corner at `pos`
pub fn player_sprite(pos: Vec2, size: f32) -> Vec<DrawCmd> {
    let pixel = size / 10.0;
    PLAYER_CELLS
        .iter()
        .map(|&(col, row, color, w, h)| DrawCmd::FillRect {
            rect: Rect::new(pos.x + col * pixel, pos.y + row * pixel, w * pixel, h * pixel),
            color,
        })
        .collect()
}

/// Keg sprite centred on `center`
pub fn keg_sprite(center: Vec2, size: f32) -> Vec<DrawCmd> {
    let w = size;
    let h = size * 0.78;
    let x = center.x - w / 2.0;
    let y = center.y - h / 2.0;

    let rect = |rx: f32, ry: f32, rw: f32, rh: f32, color: Color| DrawCmd::FillRect {
        rect: Rect::new(rx, ry, rw, rh),
        color,
    };

    vec![
        rect(x, y, w, h, keg::BODY),
        rect(x, y + 2.0, w, 3.0, keg::HOOP),
        rect(x, y + h - 5.0, w, 3.0, keg::HOOP),
        rect(x + 3.0, y + 6.0, w - 6.0, h - 12.0, keg::PANEL),
        rect(x + w * 0.32, y + h * 0.3, w * 0.36, h * 0.22, keg::LABEL),
        rect(x + w * 0.46, y + h * 0.36, w * 0.08, h * 0.1, keg::TAP),
    ]
}
