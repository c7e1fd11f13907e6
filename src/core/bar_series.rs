use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, Series, SeriesSource};

/// Share of a category slot covered by an auto-sized bar.
pub const AUTO_BAR_FILL_RATIO: f64 = 0.8;

/// How wide each bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "px", rename_all = "snake_case")]
pub enum BarWidth {
    /// 80% of the per-bar slot: `trunc(trunc(area_width / n) * 0.8)`.
    #[default]
    Auto,
    Fixed(u32),
}

impl BarWidth {
    #[must_use]
    pub fn resolve(self, area_width: i32, bar_count: usize) -> i32 {
        match self {
            Self::Fixed(px) => i32::try_from(px).unwrap_or(i32::MAX),
            Self::Auto => {
                if bar_count == 0 || area_width <= 0 {
                    return 0;
                }
                let count = i32::try_from(bar_count).unwrap_or(i32::MAX);
                (f64::from(area_width / count) * AUTO_BAR_FILL_RATIO) as i32
            }
        }
    }
}

/// Filled bar column in pixel coordinates; `y` is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarColumn {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Projects `(x, height)` samples into columns rising from the `y = 0` baseline.
///
/// Each column is centered on the mapped `x`. Columns whose pixel height is
/// not positive (zero or below the baseline) are skipped.
#[must_use]
pub fn project_bars<X, Y>(
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
    width: BarWidth,
) -> Vec<BarColumn>
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    if series.is_empty() {
        return Vec::new();
    }
    let Some(base_y) = mapper.map_y(0.0) else {
        return Vec::new();
    };
    let bar_width = width.resolve(mapper.area().width(), series.len());

    let mut columns = Vec::with_capacity(series.len());
    for point in series.points() {
        let Some(top) = mapper.map(point) else {
            continue;
        };
        let height = base_y.saturating_sub(top.y);
        if height <= 0 {
            continue;
        }
        columns.push(BarColumn {
            x: top.x.saturating_sub(bar_width / 2),
            y: top.y,
            width: bar_width,
            height,
        });
    }
    columns
}
