use serde::{Deserialize, Serialize};

use crate::core::{Histogram, PlotArea};

/// Histogram bin column in pixel coordinates.
///
/// Covers columns `x_left..x_right` (exclusive) and rows `y_top..=y_bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramColumn {
    pub x_left: i32,
    pub x_right: i32,
    pub y_top: i32,
    pub y_bottom: i32,
    pub count: usize,
}

/// Projects bins across the full width of `area`.
///
/// Bin `i` spans `[i / bins, (i + 1) / bins)` of the area width; its top row
/// sits at `1 - count / max_count` of the area height, so the fullest bin
/// reaches the top. Every column extends down to the bottom row.
#[must_use]
pub fn project_histogram_columns(histogram: &Histogram, area: PlotArea) -> Vec<HistogramColumn> {
    let bins = histogram.bins();
    if bins == 0 {
        return Vec::new();
    }

    let width = f64::from(area.width());
    let rows = f64::from(area.y1 - area.y0);
    let max_count = histogram.scale_max() as f64;

    histogram
        .counts()
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let start = i as f64 / bins as f64;
            let end = (i + 1) as f64 / bins as f64;
            let fill = count as f64 / max_count;
            HistogramColumn {
                x_left: area.x0 + (start * width) as i32,
                x_right: area.x0 + (end * width) as i32,
                y_top: area.y0 + ((1.0 - fill) * rows) as i32,
                y_bottom: area.y1,
                count,
            }
        })
        .collect()
}
