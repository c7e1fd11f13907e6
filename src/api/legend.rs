use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::types::to_i32;
use crate::error::PlotResult;
use crate::render::{Canvas, CanvasRenderer, Color, RectPrimitive, RenderFrame, Renderer, TextPrimitive};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Append-only list of legend rows with a fixed capacity.
///
/// Rows are displayed in insertion order. Entries pushed past the capacity
/// are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: SmallVec<[LegendEntry; 8]>,
    capacity: usize,
}

impl Legend {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::new(),
            capacity,
        }
    }

    /// Appends a row; returns `false` and keeps the legend unchanged when full.
    pub fn push(&mut self, label: impl Into<String>, color: Color) -> bool {
        let label = label.into();
        if self.entries.len() >= self.capacity {
            warn!(capacity = self.capacity, %label, "legend full, entry dropped");
            return false;
        }
        self.entries.push(LegendEntry { label, color });
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}

/// Placement of the legend block, anchored to the top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendLayout {
    /// Distance of the swatch column from the right canvas edge.
    #[serde(default = "default_right_offset")]
    pub right_offset: i32,
    #[serde(default = "default_top")]
    pub top: i32,
    #[serde(default = "default_row_height")]
    pub row_height: i32,
    #[serde(default = "default_swatch_size")]
    pub swatch_size: i32,
    /// Horizontal distance from the swatch's left edge to the label.
    #[serde(default = "default_text_offset")]
    pub text_offset: i32,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            right_offset: default_right_offset(),
            top: default_top(),
            row_height: default_row_height(),
            swatch_size: default_swatch_size(),
            text_offset: default_text_offset(),
            text_color: default_text_color(),
        }
    }
}

fn default_right_offset() -> i32 {
    150
}

fn default_top() -> i32 {
    20
}

fn default_row_height() -> i32 {
    20
}

fn default_swatch_size() -> i32 {
    15
}

fn default_text_offset() -> i32 {
    20
}

fn default_text_color() -> Color {
    Color::BLACK
}

/// One swatch and label per entry, stacked downward from the top-right corner.
#[must_use]
pub fn legend_frame(canvas_width: u32, legend: &Legend, layout: &LegendLayout) -> RenderFrame {
    let start_x = to_i32(canvas_width).saturating_sub(layout.right_offset);
    let mut frame = RenderFrame::new();

    let mut y = layout.top;
    for entry in legend.entries() {
        frame.rects.push(RectPrimitive::new(
            start_x,
            y,
            layout.swatch_size,
            layout.swatch_size,
            entry.color,
        ));
        if !entry.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                entry.label.clone(),
                start_x.saturating_add(layout.text_offset),
                y,
                layout.text_color,
            ));
        }
        y = y.saturating_add(layout.row_height);
    }
    frame
}

/// Draws the legend; an empty legend draws nothing.
pub fn draw_legend(canvas: &mut Canvas, legend: &Legend, layout: &LegendLayout) -> PlotResult<()> {
    if legend.is_empty() {
        return Ok(());
    }
    let frame = legend_frame(canvas.width(), legend, layout);
    debug!(entries = legend.len(), "legend");
    CanvasRenderer::new(canvas).render(&frame)
}
