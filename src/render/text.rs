use crate::render::font::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph, glyph};
use crate::render::{Canvas, Color};

/// Draws `text` left to right with its first glyph's top-left corner at `(x, y)`.
///
/// Characters without a glyph paint nothing but still advance the cursor.
pub fn draw_text(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Color) {
    let mut cursor = x;
    for ch in text.chars() {
        if let Some(bitmap) = glyph(ch) {
            draw_glyph(canvas, cursor, y, bitmap, color);
        }
        cursor = cursor.saturating_add(GLYPH_WIDTH);
    }
}

/// Draws `text` with each glyph rotated a quarter turn, advancing downward.
///
/// Glyph row `r` becomes pixel column `x + r`, and glyph column `c` becomes
/// pixel row `cursor - c`, so each glyph's baseline faces right and it reads
/// bottom to top. To make the label read top to bottom in the intended order
/// the caller passes the text already reversed.
pub fn draw_text_vertical(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Color) {
    let mut cursor = y;
    for ch in text.chars() {
        if let Some(bitmap) = glyph(ch) {
            for (row, &bits) in (0..GLYPH_HEIGHT).zip(bitmap.iter()) {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << col) != 0 {
                        canvas.set_pixel(x.saturating_add(row), cursor.saturating_sub(col), color);
                    }
                }
            }
        }
        cursor = cursor.saturating_add(GLYPH_HEIGHT);
    }
}

fn draw_glyph(canvas: &mut Canvas, x: i32, y: i32, bitmap: &Glyph, color: Color) {
    for (row, &bits) in (0..GLYPH_HEIGHT).zip(bitmap.iter()) {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << col) != 0 {
                canvas.set_pixel(x.saturating_add(col), y.saturating_add(row), color);
            }
        }
    }
}
