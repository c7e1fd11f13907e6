use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CoordinateMapper, PlotArea, TickPolicy};
use crate::error::PlotResult;
use crate::render::font::GLYPH_HEIGHT;
use crate::render::{Canvas, CanvasRenderer, Color, LinePrimitive, RenderFrame, Renderer, TextPrimitive};

/// Colors and tick behavior for axes and grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default)]
    pub tick_policy: TickPolicy,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    /// Half-length of count-policy tick marks, in pixels.
    #[serde(default = "default_tick_mark_len")]
    pub tick_mark_len: i32,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            axis_color: default_axis_color(),
            grid_color: default_grid_color(),
            label_color: default_label_color(),
            tick_policy: TickPolicy::default(),
            show_grid: default_show_grid(),
            tick_mark_len: default_tick_mark_len(),
        }
    }
}

impl AxisStyle {
    #[must_use]
    pub fn with_tick_policy(mut self, tick_policy: TickPolicy) -> Self {
        self.tick_policy = tick_policy;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.axis_color = color;
        self
    }

    #[must_use]
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_grid_color() -> Color {
    Color::GRID_GRAY
}

fn default_label_color() -> Color {
    Color::BLACK
}

fn default_show_grid() -> bool {
    true
}

fn default_tick_mark_len() -> i32 {
    5
}

/// Grid lines at every tick position inside the plot area.
#[must_use]
pub fn grid_frame(mapper: &CoordinateMapper, style: &AxisStyle) -> RenderFrame {
    let area = mapper.area();
    let limits = mapper.limits();
    let mut frame = RenderFrame::new();

    for px in style
        .tick_policy
        .ticks(limits.xmin, limits.xmax)
        .into_iter()
        .filter_map(|tick| mapper.map_x(tick))
        .filter(|&px| area.contains_x(px))
    {
        frame
            .lines
            .push(LinePrimitive::new(px, area.y0, px, area.y1, style.grid_color));
    }
    for py in style
        .tick_policy
        .ticks(limits.ymin, limits.ymax)
        .into_iter()
        .filter_map(|tick| mapper.map_y(tick))
        .filter(|&py| area.contains_y(py))
    {
        frame
            .lines
            .push(LinePrimitive::new(area.x0, py, area.x1, py, style.grid_color));
    }
    frame
}

/// Axis lines, grid and tick labels for the style's tick policy.
#[must_use]
pub fn axes_frame(mapper: &CoordinateMapper, style: &AxisStyle) -> RenderFrame {
    let mut frame = if style.show_grid {
        grid_frame(mapper, style)
    } else {
        RenderFrame::new()
    };
    match style.tick_policy {
        TickPolicy::FixedStride { .. } => append_origin_axes(&mut frame, mapper, style),
        TickPolicy::Count { .. } => append_marked_axes(&mut frame, mapper, style),
    }
    frame
}

/// Fixed-stride layout: axes sit on the data origin and are omitted when it
/// is outside the plot area; labels hang off the origin lines.
fn append_origin_axes(frame: &mut RenderFrame, mapper: &CoordinateMapper, style: &AxisStyle) {
    let area = mapper.area();
    let limits = mapper.limits();
    let origin_x = mapper.map_x(0.0);
    let origin_y = mapper.map_y(0.0);

    if let Some(oy) = origin_y.filter(|&oy| area.contains_y(oy)) {
        frame
            .lines
            .push(LinePrimitive::new(area.x0, oy, area.x1, oy, style.axis_color));
    }
    if let Some(ox) = origin_x.filter(|&ox| area.contains_x(ox)) {
        frame
            .lines
            .push(LinePrimitive::new(ox, area.y0, ox, area.y1, style.axis_color));
    }

    let label_row = clamp_anchor(origin_y.unwrap_or(area.y1), area.y0, area.y1);
    let label_col = clamp_anchor(origin_x.unwrap_or(area.x0), area.x0, area.x1);

    for tick in style.tick_policy.ticks(limits.xmin, limits.xmax) {
        let Some(px) = mapper.map_x(tick).filter(|&px| area.contains_x(px)) else {
            continue;
        };
        frame.texts.push(TextPrimitive::new(
            style.tick_policy.format(tick),
            px - 10,
            label_text_row(label_row + 8, area),
            style.label_color,
        ));
    }
    for tick in style.tick_policy.ticks(limits.ymin, limits.ymax) {
        let Some(py) = mapper.map_y(tick).filter(|&py| area.contains_y(py)) else {
            continue;
        };
        frame.texts.push(TextPrimitive::new(
            style.tick_policy.format(tick),
            label_col + 6,
            py - 4,
            style.label_color,
        ));
    }
}

/// Count layout: both axes are always drawn, pinned inside the plot area,
/// with short tick marks and labels in the axis color.
fn append_marked_axes(frame: &mut RenderFrame, mapper: &CoordinateMapper, style: &AxisStyle) {
    let area = mapper.area();
    let limits = mapper.limits();
    let oy = clamp_anchor(mapper.map_y(0.0).unwrap_or(area.y1), area.y0, area.y1);
    let ox = clamp_anchor(mapper.map_x(0.0).unwrap_or(area.x0), area.x0, area.x1);
    let mark = style.tick_mark_len;

    frame
        .lines
        .push(LinePrimitive::new(area.x0, oy, area.x1, oy, style.axis_color));
    frame
        .lines
        .push(LinePrimitive::new(ox, area.y0, ox, area.y1, style.axis_color));

    for tick in style.tick_policy.ticks(limits.xmin, limits.xmax) {
        let Some(px) = mapper.map_x(tick) else {
            continue;
        };
        frame.lines.push(LinePrimitive::new(
            px,
            oy.saturating_sub(mark),
            px,
            oy.saturating_add(mark),
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            style.tick_policy.format(tick),
            px,
            label_text_row(oy + 8, area),
            style.axis_color,
        ));
    }
    for tick in style.tick_policy.ticks(limits.ymin, limits.ymax) {
        let Some(py) = mapper.map_y(tick) else {
            continue;
        };
        frame.lines.push(LinePrimitive::new(
            ox.saturating_sub(mark),
            py,
            ox.saturating_add(mark),
            py,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            style.tick_policy.format(tick),
            (ox - 30).max(area.x0),
            py,
            style.axis_color,
        ));
    }
}

fn clamp_anchor(value: i32, low: i32, high: i32) -> i32 {
    value.clamp(low, high.max(low))
}

/// Keeps a label row low enough for a full glyph to fit in the area.
fn label_text_row(row: i32, area: PlotArea) -> i32 {
    row.min(area.y1 - GLYPH_HEIGHT + 1).max(area.y0)
}

/// Draws axes, grid and tick labels.
pub fn draw_axes(canvas: &mut Canvas, mapper: &CoordinateMapper, style: &AxisStyle) -> PlotResult<()> {
    let frame = axes_frame(mapper, style);
    debug!(
        policy = ?style.tick_policy,
        lines = frame.lines.len(),
        labels = frame.texts.len(),
        "axes"
    );
    CanvasRenderer::new(canvas).render(&frame)
}

/// Draws grid lines alone.
pub fn draw_grid(canvas: &mut Canvas, mapper: &CoordinateMapper, style: &AxisStyle) -> PlotResult<()> {
    let frame = grid_frame(mapper, style);
    debug!(lines = frame.lines.len(), "grid");
    CanvasRenderer::new(canvas).render(&frame)
}
