//! Integer rasterization of points, lines, rectangles and circles.
//!
//! Everything here clips against the canvas, so callers may pass geometry that
//! lies partly or wholly outside it.

use crate::render::{Canvas, Color};

pub fn draw_point(canvas: &mut Canvas, x: i32, y: i32, color: Color) {
    canvas.set_pixel(x, y, color);
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
///
/// Works in every octant. The doubled error term is tested against `dy` and
/// `dx` independently on each step, so a diagonal step moves both axes.
///
/// Steps whose major-axis coordinate lies before the canvas are skipped in
/// closed form, so the cost is bounded by the canvas size rather than by the
/// segment length.
pub fn draw_line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    // i64 keeps `2 * err` from overflowing on extreme coordinates.
    let (x0, y0) = (i64::from(x0), i64::from(y0));
    let (x1, y1) = (i64::from(x1), i64::from(y1));

    if !segment_may_touch(canvas, x0, y0, x1, y1) {
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let max_x = i64::from(canvas.width()) - 1;
    let max_y = i64::from(canvas.height()) - 1;
    let start = if dx >= -dy {
        LineStart::skip_major(x0, sx, max_x, dx, -dy)
    } else {
        LineStart::skip_major(y0, sy, max_y, -dy, dx).transposed()
    };
    let mut x = x0 + sx * start.x_steps;
    let mut y = y0 + sy * start.y_steps;
    let mut err = dx * (start.y_steps + 1) + dy * (start.x_steps + 1);

    loop {
        set_pixel_i64(canvas, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        // Coordinates move monotonically, so once past an edge nothing else lands.
        if (sx > 0 && x > max_x) || (sx < 0 && x < 0) || (sy > 0 && y > max_y) || (sy < 0 && y < 0)
        {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Step counts along each axis at which a line walk resumes.
///
/// After `i` steps in x and `j` steps in y the error term is
/// `|dx| * (j + 1) - |dy| * (i + 1)`, so a position reached by the walk fully
/// determines its state.
#[derive(Debug, Clone, Copy)]
struct LineStart {
    x_steps: i64,
    y_steps: i64,
}

impl LineStart {
    /// Skips major-axis steps that lie before `[0, max]`.
    ///
    /// The major axis advances on every step, and after `k` of them the minor
    /// axis has advanced `floor((2 * minor * k + major) / (2 * major))` times.
    fn skip_major(start: i64, step: i64, max: i64, major: i64, minor: i64) -> Self {
        let skip = if step > 0 && start < 0 {
            -start
        } else if step < 0 && start > max {
            start - max
        } else {
            0
        };
        let skip = skip.min(major);
        if skip == 0 {
            return Self {
                x_steps: 0,
                y_steps: 0,
            };
        }
        let (major_w, minor_w, skip_w) = (i128::from(major), i128::from(minor), i128::from(skip));
        let minor_steps = (2 * minor_w * skip_w + major_w) / (2 * major_w);
        Self {
            x_steps: skip,
            // Bounded by `minor`, which fits in i64.
            y_steps: i64::try_from(minor_steps).unwrap_or(minor),
        }
    }

    fn transposed(self) -> Self {
        Self {
            x_steps: self.y_steps,
            y_steps: self.x_steps,
        }
    }
}

/// Fills the `width x height` rectangle anchored at `(x, y)`.
///
/// A negative extent grows from the anchor toward smaller coordinates, so a
/// rectangle can be given from any corner. Zero extents draw nothing.
pub fn fill_rect(canvas: &mut Canvas, x: i32, y: i32, width: i32, height: i32, color: Color) {
    if width == 0 || height == 0 {
        return;
    }
    let (left, right) = normalize_extent(x, width);
    let (top, bottom) = normalize_extent(y, height);

    let max_x = i64::from(canvas.width()) - 1;
    let max_y = i64::from(canvas.height()) - 1;
    let left = left.max(0);
    let top = top.max(0);
    let right = right.min(max_x);
    let bottom = bottom.min(max_y);
    if left > right || top > bottom {
        return;
    }

    // Clipped bounds fit in i32 because the canvas dimensions do.
    for row in top..=bottom {
        canvas.fill_span(row as i32, left as i32, right as i32, color);
    }
}

/// Fills every pixel `(cx + dx, cy + dy)` with `dx^2 + dy^2 <= radius^2`.
///
/// A zero radius paints the center pixel; a negative radius paints nothing.
pub fn fill_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let r = i64::from(radius);
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let max_x = i64::from(canvas.width()) - 1;
    let max_y = i64::from(canvas.height()) - 1;

    // Only offsets landing on the canvas are visited.
    let (dx_min, dx_max) = ((-r).max(-cx), r.min(max_x - cx));
    let (dy_min, dy_max) = ((-r).max(-cy), r.min(max_y - cy));
    for dy in dy_min..=dy_max {
        for dx in dx_min..=dx_max {
            if dx * dx + dy * dy <= r * r {
                set_pixel_i64(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Inclusive `(start, end)` covered by `extent` pixels from `origin`.
fn normalize_extent(origin: i32, extent: i32) -> (i64, i64) {
    let origin = i64::from(origin);
    let extent = i64::from(extent);
    if extent > 0 {
        (origin, origin + extent - 1)
    } else {
        (origin + extent + 1, origin)
    }
}

/// Cheap reject for segments whose bounding box misses the canvas entirely.
fn segment_may_touch(canvas: &Canvas, x0: i64, y0: i64, x1: i64, y1: i64) -> bool {
    let width = i64::from(canvas.width());
    let height = i64::from(canvas.height());
    x0.max(x1) >= 0 && x0.min(x1) < width && y0.max(y1) >= 0 && y0.min(y1) < height
}

fn set_pixel_i64(canvas: &mut Canvas, x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        canvas.set_pixel(x, y, color);
    }
}
