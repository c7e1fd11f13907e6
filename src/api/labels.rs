use crate::core::types::to_i32;
use crate::error::PlotResult;
use crate::render::font::{GLYPH_HEIGHT, text_width};
use crate::render::{Canvas, CanvasRenderer, Color, LinePrimitive, RenderFrame, Renderer, TextPrimitive};

/// Distance of the title from the top edge and of the x label from the bottom edge.
pub const LABEL_EDGE_OFFSET: i32 = 20;
/// Distance of the y label from the left edge.
pub const YLABEL_LEFT_OFFSET: i32 = 20;
/// Length of the line sample drawn by [`legend_label`], minus one.
pub const LEGEND_SAMPLE_LEN: i32 = 15;

fn centered_x(canvas_width: u32, text: &str) -> i32 {
    (to_i32(canvas_width) - text_width(text)) / 2
}

#[must_use]
pub fn title_frame(canvas_width: u32, text: &str, color: Color) -> RenderFrame {
    if text.is_empty() {
        return RenderFrame::new();
    }
    RenderFrame::new().with_text(TextPrimitive::new(
        text,
        centered_x(canvas_width, text),
        LABEL_EDGE_OFFSET,
        color,
    ))
}

#[must_use]
pub fn xlabel_frame(canvas_width: u32, canvas_height: u32, text: &str, color: Color) -> RenderFrame {
    if text.is_empty() {
        return RenderFrame::new();
    }
    RenderFrame::new().with_text(TextPrimitive::new(
        text,
        centered_x(canvas_width, text),
        to_i32(canvas_height) - LABEL_EDGE_OFFSET,
        color,
    ))
}

/// Rotated label near the left edge, vertically centered.
///
/// The text is reversed before drawing so the rotated glyphs read top to bottom.
#[must_use]
pub fn ylabel_frame(canvas_height: u32, text: &str, color: Color) -> RenderFrame {
    if text.is_empty() {
        return RenderFrame::new();
    }
    let reversed: String = text.chars().rev().collect();
    let text_height = text_width(&reversed);
    let y = (to_i32(canvas_height) - text_height) / 2 + GLYPH_HEIGHT;
    RenderFrame::new().with_text(TextPrimitive::new(reversed, YLABEL_LEFT_OFFSET, y, color).vertical())
}

/// Short line sample at `(x, y)` followed by `text`.
#[must_use]
pub fn legend_label_frame(text: &str, x: i32, y: i32, color: Color) -> RenderFrame {
    let frame = RenderFrame::new().with_line(LinePrimitive::new(
        x,
        y,
        x.saturating_add(LEGEND_SAMPLE_LEN),
        y,
        color,
    ));
    if text.is_empty() {
        return frame;
    }
    frame.with_text(TextPrimitive::new(
        text,
        x.saturating_add(20),
        y.saturating_sub(5),
        color,
    ))
}

/// Horizontally centered title near the top edge.
pub fn title(canvas: &mut Canvas, text: &str, color: Color) -> PlotResult<()> {
    let frame = title_frame(canvas.width(), text, color);
    CanvasRenderer::new(canvas).render(&frame)
}

/// Horizontally centered label near the bottom edge.
pub fn xlabel(canvas: &mut Canvas, text: &str, color: Color) -> PlotResult<()> {
    let frame = xlabel_frame(canvas.width(), canvas.height(), text, color);
    CanvasRenderer::new(canvas).render(&frame)
}

pub fn ylabel(canvas: &mut Canvas, text: &str, color: Color) -> PlotResult<()> {
    let frame = ylabel_frame(canvas.height(), text, color);
    CanvasRenderer::new(canvas).render(&frame)
}

pub fn legend_label(canvas: &mut Canvas, text: &str, x: i32, y: i32, color: Color) -> PlotResult<()> {
    let frame = legend_label_frame(text, x, y, color);
    CanvasRenderer::new(canvas).render(&frame)
}
