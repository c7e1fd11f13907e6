use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, PixelPoint, Series, SeriesSource};

/// Marker drawn at each scatter sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MarkerShape {
    /// Filled `size x size` square centered on the sample.
    Square { size: u32 },
    /// Filled circle of `radius` pixels centered on the sample.
    Circle { radius: u32 },
}

impl Default for MarkerShape {
    fn default() -> Self {
        Self::Square { size: 3 }
    }
}

/// Projects each finite sample to its marker center; samples are independent.
#[must_use]
pub fn project_scatter_points<X, Y>(
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
) -> Vec<PixelPoint>
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    series
        .points()
        .filter_map(|point| mapper.map(point))
        .collect()
}
