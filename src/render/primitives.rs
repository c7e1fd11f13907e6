use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRID_GRAY: Self = Self::rgb(220, 220, 220);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(81, 225, 90);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const ORANGE: Self = Self::rgb(255, 172, 28);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> PlotResult<Self> {
        let digits = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
            (6, Some(r), Some(g), Some(b)) => Ok(Self::rgb(r, g, b)),
            _ => Err(PlotError::InvalidData(format!(
                "`{hex}` is not a #RRGGBB color"
            ))),
        }
    }

    /// Linear blend: `t = 0` gives `self`, `t = 1` gives `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        };
        Self::rgb(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Draw command for one Bresenham line in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePrimitive {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            color,
        }
    }
}

/// Draw command for a filled rectangle anchored at `(x, y)`.
///
/// Negative `width`/`height` extend left/up from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectPrimitive {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }
}

/// Draw command for a filled circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CirclePrimitive {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: i32, cy: i32, radius: i32, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if self.radius < 0 {
            return Err(PlotError::InvalidData(
                "circle radius must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Direction in which text advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOrientation {
    /// Upright glyphs, cursor advancing right.
    #[default]
    Horizontal,
    /// Glyphs rotated 90 degrees, cursor advancing down.
    Vertical,
}

/// Draw command for one bitmap-font label; `(x, y)` is the first glyph's anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub orientation: TextOrientation,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: i32, y: i32, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
            orientation: TextOrientation::Horizontal,
        }
    }

    #[must_use]
    pub fn vertical(mut self) -> Self {
        self.orientation = TextOrientation::Vertical;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
