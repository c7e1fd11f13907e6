use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Value-to-color scale for heatmaps, as piecewise-linear color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    /// Black to white.
    Grayscale,
    /// Dark purple through teal and green to yellow.
    #[default]
    Viridis,
    /// Black through red and yellow to white.
    Heat,
}

const GRAYSCALE_STOPS: [Color; 2] = [Color::BLACK, Color::WHITE];

const VIRIDIS_STOPS: [Color; 5] = [
    Color::rgb(68, 1, 84),
    Color::rgb(59, 82, 139),
    Color::rgb(33, 145, 140),
    Color::rgb(94, 201, 98),
    Color::rgb(253, 231, 37),
];

const HEAT_STOPS: [Color; 4] = [
    Color::BLACK,
    Color::rgb(230, 0, 0),
    Color::rgb(255, 210, 0),
    Color::WHITE,
];

impl Colormap {
    fn stops(self) -> &'static [Color] {
        match self {
            Self::Grayscale => &GRAYSCALE_STOPS,
            Self::Viridis => &VIRIDIS_STOPS,
            Self::Heat => &HEAT_STOPS,
        }
    }

    /// Color for `level` in `[0, 1]`; out-of-range levels clamp, NaN maps to 0.
    #[must_use]
    pub fn color_at(self, level: f64) -> Color {
        let stops = self.stops();
        let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };

        let segments = stops.len() - 1;
        let position = level * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        stops[index].lerp(stops[index + 1], position - index as f64)
    }
}
