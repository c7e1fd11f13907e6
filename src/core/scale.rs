use crate::core::types::{AxisLimits, DataPoint, PixelPoint, PlotArea};
use crate::error::{PlotError, PlotResult};

/// Span substituted for a zero-width domain before anything divides by it.
pub const MIN_DOMAIN_SPAN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(PlotError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Domain span, with [`MIN_DOMAIN_SPAN`] standing in for a zero span.
    #[must_use]
    pub fn span(self) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 { MIN_DOMAIN_SPAN } else { span }
    }

    /// Position of `value` inside the domain: 0 at the start, 1 at the end.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value - self.domain_start) / self.span()
    }

    /// Maps `value` onto the pixel interval `[pixel_start, pixel_end]`,
    /// rounding down. Returns `None` for non-finite input.
    #[must_use]
    pub fn to_pixel(self, value: f64, pixel_start: i32, pixel_end: i32) -> Option<i32> {
        let normalized = self.normalize(value);
        project(normalized, pixel_start, pixel_end)
    }
}

/// Converts data-space points into pixel coordinates inside a [`PlotArea`].
///
/// For the full-canvas area this is
/// `px = floor((x - xmin) / (xmax - xmin) * (W - 1))` and
/// `py = floor((1 - (y - ymin) / (ymax - ymin)) * (H - 1))`;
/// the y axis is inverted because pixel row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
}

impl CoordinateMapper {
    pub fn new(limits: AxisLimits, area: PlotArea) -> PlotResult<Self> {
        Ok(Self {
            x_scale: LinearScale::new(limits.xmin, limits.xmax)?,
            y_scale: LinearScale::new(limits.ymin, limits.ymax)?,
            area,
        })
    }

    /// Mapper spanning the whole `width x height` canvas.
    pub fn for_canvas(limits: AxisLimits, width: u32, height: u32) -> PlotResult<Self> {
        Self::new(limits, PlotArea::full(width, height))
    }

    #[must_use]
    pub fn area(&self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn limits(&self) -> AxisLimits {
        let (xmin, xmax) = self.x_scale.domain();
        let (ymin, ymax) = self.y_scale.domain();
        AxisLimits::new(xmin, xmax, ymin, ymax)
    }

    #[must_use]
    pub fn map_x(&self, x: f64) -> Option<i32> {
        self.x_scale.to_pixel(x, self.area.x0, self.area.x1)
    }

    #[must_use]
    pub fn map_y(&self, y: f64) -> Option<i32> {
        project(1.0 - self.y_scale.normalize(y), self.area.y0, self.area.y1)
    }

    /// Pixel for `point`, or `None` when either coordinate is not finite.
    #[must_use]
    pub fn map(&self, point: DataPoint) -> Option<PixelPoint> {
        Some(PixelPoint::new(self.map_x(point.x)?, self.map_y(point.y)?))
    }
}

fn project(normalized: f64, pixel_start: i32, pixel_end: i32) -> Option<i32> {
    if !normalized.is_finite() {
        return None;
    }
    let extent = f64::from(pixel_end) - f64::from(pixel_start);
    let offset = (normalized * extent).floor();
    // `as` saturates, so far off-canvas data stays far off-canvas.
    Some((f64::from(pixel_start) + offset) as i32)
}
