pub mod axes;
pub mod charts;
mod figure;
mod figure_config;
pub mod labels;
pub mod legend;

pub use axes::{AxisStyle, axes_frame, draw_axes, draw_grid, grid_frame};
pub use charts::{bar, hist, imshow, plot_line, scatter};
pub use figure::{Figure, HIST_FULL_TICKS};
pub use figure_config::{FIGURE_CONFIG_JSON_SCHEMA_V1, FigureConfig};
pub use labels::{legend_label, title, xlabel, ylabel};
pub use legend::{Legend, LegendEntry, LegendLayout, draw_legend};
