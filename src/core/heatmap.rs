use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{GridSource, LinearScale, PlotArea};
use crate::error::PlotResult;

/// One heatmap cell: a pixel rectangle and its value normalized into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub level: f64,
}

/// Smallest and largest finite value in the grid, or `None` when it has none.
#[must_use]
pub fn grid_value_range<G: GridSource + ?Sized>(grid: &G) -> Option<(f64, f64)> {
    let (rows, cols) = grid.shape();
    let finite = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter_map(|(row, col)| grid.value(row, col))
        .filter(|value| value.is_finite())
        .map(OrderedFloat);

    let mut range: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
    for value in finite {
        range = Some(match range {
            None => (value, value),
            Some((min, max)) => (min.min(value), max.max(value)),
        });
    }
    range.map(|(min, max)| (min.into_inner(), max.into_inner()))
}

/// Splits `area` into a `rows x cols` lattice and normalizes each finite cell
/// against `value_range` (the grid's own range when `None`).
///
/// Row 0 is drawn at the top. Missing and non-finite cells produce no entry.
pub fn project_heatmap_cells<G: GridSource + ?Sized>(
    grid: &G,
    area: PlotArea,
    value_range: Option<(f64, f64)>,
) -> PlotResult<Vec<HeatmapCell>> {
    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return Ok(Vec::new());
    }
    let Some((min, max)) = value_range.or_else(|| grid_value_range(grid)) else {
        return Ok(Vec::new());
    };
    let scale = LinearScale::new(min, max)?;

    let width = i64::from(area.width());
    let height = i64::from(area.height());
    let edge = |index: usize, count: usize, extent: i64, origin: i32| -> i32 {
        let offset = index as i64 * extent / count as i64;
        origin.saturating_add(i32::try_from(offset).unwrap_or(i32::MAX))
    };

    let mut cells = Vec::new();
    for row in 0..rows {
        let top = edge(row, rows, height, area.y0);
        let bottom = edge(row + 1, rows, height, area.y0);
        for col in 0..cols {
            let Some(value) = grid.value(row, col).filter(|value| value.is_finite()) else {
                continue;
            };
            let left = edge(col, cols, width, area.x0);
            let right = edge(col + 1, cols, width, area.x0);
            cells.push(HeatmapCell {
                x: left,
                y: top,
                width: right - left,
                height: bottom - top,
                level: scale.normalize(value).clamp(0.0, 1.0),
            });
        }
    }
    Ok(cells)
}
