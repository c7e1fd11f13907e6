pub mod autoscale;
pub mod bar_series;
pub mod heatmap;
pub mod histogram;
pub mod histogram_series;
pub mod line_series;
pub mod scale;
pub mod scatter_series;
pub mod series;
pub mod ticks;
pub mod types;

pub use autoscale::{AutoScaleTuning, auto_range, auto_scale, auto_scale_multi, auto_scale_multi_tuned};
pub use bar_series::{BarColumn, BarWidth, project_bars};
pub use heatmap::{HeatmapCell, grid_value_range, project_heatmap_cells};
pub use histogram::Histogram;
pub use histogram_series::{HistogramColumn, project_histogram_columns};
pub use line_series::{LineSegment, project_line_segments};
pub use scale::{CoordinateMapper, LinearScale, MIN_DOMAIN_SPAN};
pub use scatter_series::{MarkerShape, project_scatter_points};
pub use series::{ArrayView, GridSource, Series, SeriesSource};
pub use ticks::TickPolicy;
pub use types::{AxisLimits, DataPoint, PixelPoint, PlotArea};
