//! Replays draw lists on an HTML canvas

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Node};

use super::{DrawCmd, Surface, replay};

/// The canvas' 2D context, or `None` if the canvas is detached or the
/// context cannot be created
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let node: &Node = canvas.as_ref();
    if !node.is_connected() {
        return None;
    }
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Execute `cmds` in order. Without a context this is a no-op.
pub fn paint(ctx: Option<&CanvasRenderingContext2d>, cmds: &[DrawCmd]) {
    replay(ctx, cmds);
}

impl Surface for CanvasRenderingContext2d {
    fn draw(&self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Clear { rect } => {
                self.clear_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::FillRect { rect, color } => {
                self.set_fill_style_str(color);
                self.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::FillGradient { rect, from, to } => {
                let gradient = self.create_linear_gradient(
                    rect.x as f64,
                    rect.y as f64,
                    rect.right() as f64,
                    rect.bottom() as f64,
                );
                if gradient.add_color_stop(0.0, from).is_err() || gradient.add_color_stop(1.0, to).is_err() {
                    log::warn!("Invalid gradient colors {} -> {}", from, to);
                    self.set_fill_style_str(from);
                } else {
                    self.set_fill_style_canvas_gradient(&gradient);
                }
                self.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::Text {
                text,
                pos,
                font,
                color,
                align,
            } => {
                self.set_font(font);
                self.set_text_align(align.as_str());
                self.set_fill_style_str(color);
                let _ = self.fill_text(text, pos.x as f64, pos.y as f64);
            }
        }
    }
}
