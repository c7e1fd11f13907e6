use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Integer pixel coordinate. Row 0 is the top of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Data-space rectangle mapped onto the plot area.
///
/// `xmax > xmin` and `ymax > ymin` are expected. Equal bounds are tolerated:
/// every division by a span goes through [`crate::core::LinearScale`], which
/// substitutes a unit span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl AxisLimits {
    #[must_use]
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        for (name, value) in [
            ("xmin", self.xmin),
            ("xmax", self.xmax),
            ("ymin", self.ymin),
            ("ymax", self.ymax),
        ] {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "axis limit `{name}` must be finite"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.ymax - self.ymin
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.x_span() == 0.0 || self.y_span() == 0.0
    }
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// Inclusive pixel box `(x0, y0)-(x1, y1)` that data space is mapped onto.
///
/// The full-canvas area is `(0, 0)-(W-1, H-1)`; a margin insets it on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PlotArea {
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[must_use]
    pub fn full(width: u32, height: u32) -> Self {
        Self::with_margin(width, height, 0)
    }

    /// Insets the full-canvas box by `margin` pixels, collapsing to the
    /// canvas center when the margin would leave no room.
    #[must_use]
    pub fn with_margin(width: u32, height: u32, margin: u32) -> Self {
        let right = to_i32(width).saturating_sub(1);
        let bottom = to_i32(height).saturating_sub(1);
        let margin = to_i32(margin);

        let (x0, x1) = inset(0, right, margin);
        let (y0, y1) = inset(0, bottom, margin);
        Self { x0, y0, x1, y1 }
    }

    /// Number of pixel columns covered.
    #[must_use]
    pub fn width(self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Number of pixel rows covered.
    #[must_use]
    pub fn height(self) -> i32 {
        self.y1 - self.y0 + 1
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }

    #[must_use]
    pub fn contains_x(self, x: i32) -> bool {
        (self.x0..=self.x1).contains(&x)
    }

    #[must_use]
    pub fn contains_y(self, y: i32) -> bool {
        (self.y0..=self.y1).contains(&y)
    }
}

fn inset(start: i32, end: i32, margin: i32) -> (i32, i32) {
    if end - start < 2 * margin {
        let mid = start + (end - start) / 2;
        return (mid, mid);
    }
    (start + margin, end - margin)
}

pub(crate) fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
