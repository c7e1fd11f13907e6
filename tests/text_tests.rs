use pixplot::render::font::{GLYPH_WIDTH, glyph, text_width};
use pixplot::render::text::{draw_text, draw_text_vertical};
use pixplot::render::{Canvas, Color};

fn painted_in(canvas: &Canvas) -> Vec<(i32, i32)> {
    let mut pixels = Vec::new();
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if canvas.pixel(x, y) != Some(Color::WHITE) {
                pixels.push((x, y));
            }
        }
    }
    pixels
}

#[test]
fn glyph_pixels_stay_inside_their_cell() {
    let mut canvas = Canvas::new(32, 32).expect("canvas");
    draw_text(&mut canvas, 4, 6, "A", Color::BLACK);

    let pixels = painted_in(&canvas);
    assert!(!pixels.is_empty());
    assert!(
        pixels
            .iter()
            .all(|&(x, y)| (4..12).contains(&x) && (6..14).contains(&y))
    );
}

#[test]
fn glyph_bits_map_least_significant_bit_to_leftmost_pixel() {
    let mut canvas = Canvas::new(16, 16).expect("canvas");
    draw_text(&mut canvas, 0, 0, "L", Color::BLACK);

    let bitmap = glyph('L').expect("glyph");
    for (row, bits) in bitmap.iter().enumerate() {
        for col in 0..8 {
            let expected = bits & (1 << col) != 0;
            let actual = canvas.pixel(col, row as i32) == Some(Color::BLACK);
            assert_eq!(actual, expected, "row={row} col={col}");
        }
    }
}

#[test]
fn cursor_advances_by_glyph_width() {
    let mut pair = Canvas::new(32, 16).expect("canvas");
    draw_text(&mut pair, 0, 0, "AB", Color::BLACK);

    let mut separate = Canvas::new(32, 16).expect("canvas");
    draw_text(&mut separate, 0, 0, "A", Color::BLACK);
    draw_text(&mut separate, GLYPH_WIDTH, 0, "B", Color::BLACK);

    assert_eq!(pair, separate);
    assert_eq!(text_width("AB"), 16);
}

#[test]
fn unsupported_characters_are_skipped_but_still_advance() {
    let mut accented = Canvas::new(32, 16).expect("canvas");
    draw_text(&mut accented, 0, 0, "\u{e9}A", Color::BLACK);

    let mut spaced = Canvas::new(32, 16).expect("canvas");
    draw_text(&mut spaced, 0, 0, " A", Color::BLACK);

    assert_eq!(accented, spaced);
    assert!(glyph('\u{e9}').is_none());
    assert!(glyph('\n').is_none());
}

#[test]
fn empty_text_and_offscreen_text_draw_nothing() {
    let mut canvas = Canvas::new(16, 16).expect("canvas");
    let before = canvas.clone();

    draw_text(&mut canvas, 0, 0, "", Color::BLACK);
    draw_text(&mut canvas, 100, 100, "hidden", Color::BLACK);
    draw_text(&mut canvas, i32::MAX - 4, 0, "edge", Color::BLACK);

    assert_eq!(canvas, before);
}

#[test]
fn vertical_text_is_a_quarter_turn_of_horizontal_text() {
    let mut horizontal = Canvas::new(32, 32).expect("canvas");
    draw_text(&mut horizontal, 0, 0, "F", Color::BLACK);

    let mut vertical = Canvas::new(32, 32).expect("canvas");
    draw_text_vertical(&mut vertical, 0, 16, "F", Color::BLACK);

    let upright = painted_in(&horizontal);
    let rotated = painted_in(&vertical);
    assert_eq!(upright.len(), rotated.len());
    for (x, y) in upright {
        assert_eq!(vertical.pixel(y, 16 - x), Some(Color::BLACK), "x={x} y={y}");
    }
}

#[test]
fn vertical_text_advances_downward() {
    let mut canvas = Canvas::new(32, 64).expect("canvas");
    draw_text_vertical(&mut canvas, 4, 20, "AB", Color::BLACK);

    let pixels = painted_in(&canvas);
    // First glyph occupies rows 13..=20, the second rows 21..=28.
    assert!(pixels.iter().any(|&(_, y)| y <= 20));
    assert!(pixels.iter().any(|&(_, y)| y > 20));
    assert!(
        pixels
            .iter()
            .all(|&(x, y)| (4..12).contains(&x) && (13..=28).contains(&y))
    );
}
