use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, PixelPoint, Series, SeriesSource};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    #[must_use]
    pub fn between(start: PixelPoint, end: PixelPoint) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }
}

/// Projects consecutive samples `(i, i + 1)` into connecting segments.
///
/// Fewer than two samples yield no segments. A sample with a non-finite
/// coordinate breaks the line: both segments touching it are omitted.
#[must_use]
pub fn project_line_segments<X, Y>(
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
) -> Vec<LineSegment>
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    if series.len() < 2 {
        return Vec::new();
    }

    let mapped: Vec<Option<PixelPoint>> = (0..series.len())
        .map(|index| series.point(index).and_then(|point| mapper.map(point)))
        .collect();

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        if let (Some(start), Some(end)) = (pair[0], pair[1]) {
            segments.push(LineSegment::between(start, end));
        }
    }
    segments
}
