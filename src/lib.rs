//! pixplot: a small raster plotting library.
//!
//! Charts (line, scatter, bar, histogram, heatmap) are rasterized onto an
//! in-memory RGB [`render::Canvas`] and handed to an [`render::ImageSink`]
//! such as the PNG file sink.
//!
//! The crate is split the same way the drawing pipeline is:
//! - [`core`] holds pixel-free math: data access, coordinate mapping,
//!   autoscaling, ticks, binning and per-chart projections.
//! - [`render`] owns the canvas, the primitive rasterizer, the bitmap font and
//!   the [`render::RenderFrame`] draw lists consumed by a [`render::Renderer`].
//! - [`api`] composes both into chart, axis and label operations and the
//!   [`api::Figure`] plot context.
//!
//! ```
//! use pixplot::api::{Figure, FigureConfig};
//! use pixplot::core::{AxisLimits, Series};
//! use pixplot::render::Color;
//!
//! # fn main() -> pixplot::PlotResult<()> {
//! let x: Vec<f64> = (0..100).map(|i| f64::from(i) / 10.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
//!
//! let mut figure = Figure::new(FigureConfig::new(800, 600))?;
//! figure.set_limits(AxisLimits::new(0.0, 10.0, -1.2, 1.2))?;
//! figure.draw_axes()?;
//! figure.plot(Series::new(&x, &y), Color::BLUE)?;
//! let rgb = figure.into_canvas().into_bytes();
//! assert_eq!(rgb.len(), 800 * 600 * 3);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Figure, FigureConfig};
pub use error::{PlotError, PlotResult};
