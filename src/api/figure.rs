use std::path::Path;

use tracing::debug;

use crate::core::{
    AxisLimits, BarWidth, CoordinateMapper, GridSource, Histogram, MarkerShape, PlotArea, Series,
    SeriesSource, TickPolicy, auto_range, auto_scale_multi_tuned,
};
use crate::error::PlotResult;
use crate::render::{Canvas, Color, Colormap, ImageSink};

use super::{FigureConfig, Legend, axes, charts, labels, legend};

/// Tick count used by [`Figure::hist_full`].
pub const HIST_FULL_TICKS: usize = 5;

/// Plot context: one canvas plus the limits, plot area and legend every
/// chart call on it shares.
///
/// The plot area is the canvas inset by the configured margin; all charts,
/// axes and grid lines are laid out inside it. Titles and labels are placed
/// relative to the whole canvas.
#[derive(Debug, Clone)]
pub struct Figure {
    canvas: Canvas,
    config: FigureConfig,
    limits: AxisLimits,
    area: PlotArea,
    legend: Legend,
}

impl Figure {
    pub fn new(config: FigureConfig) -> PlotResult<Self> {
        config.validate()?;
        let canvas = Canvas::with_background(config.width, config.height, config.background)?;
        let area = PlotArea::with_margin(config.width, config.height, config.margin);
        debug!(
            width = config.width,
            height = config.height,
            margin = config.margin,
            "created figure"
        );
        Ok(Self {
            canvas,
            config,
            limits: AxisLimits::default(),
            area,
            legend: Legend::with_capacity(config.legend_capacity),
        })
    }

    /// Figure with default styling on a `width x height` white canvas.
    pub fn with_size(width: u32, height: u32) -> PlotResult<Self> {
        Self::new(FigureConfig::new(width, height))
    }

    #[must_use]
    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    #[must_use]
    pub fn limits(&self) -> AxisLimits {
        self.limits
    }

    #[must_use]
    pub fn area(&self) -> PlotArea {
        self.area
    }

    pub fn set_limits(&mut self, limits: AxisLimits) -> PlotResult<()> {
        limits.validate()?;
        self.limits = limits;
        Ok(())
    }

    /// Fits the limits to the union of `series` and keeps them.
    pub fn autoscale<'a, X, Y, I>(&mut self, series: I) -> AxisLimits
    where
        X: SeriesSource + ?Sized + 'a,
        Y: SeriesSource + ?Sized + 'a,
        I: IntoIterator<Item = Series<'a, X, Y>>,
    {
        self.limits = auto_scale_multi_tuned(series, self.config.autoscale);
        self.limits
    }

    pub fn mapper(&self) -> PlotResult<CoordinateMapper> {
        CoordinateMapper::new(self.limits, self.area)
    }

    pub fn draw_axes(&mut self) -> PlotResult<()> {
        let mapper = self.mapper()?;
        axes::draw_axes(&mut self.canvas, &mapper, &self.config.axis)
    }

    pub fn draw_grid(&mut self) -> PlotResult<()> {
        let mapper = self.mapper()?;
        axes::draw_grid(&mut self.canvas, &mapper, &self.config.axis)
    }

    pub fn plot<X, Y>(&mut self, series: Series<'_, X, Y>, color: Color) -> PlotResult<()>
    where
        X: SeriesSource + ?Sized,
        Y: SeriesSource + ?Sized,
    {
        let mapper = self.mapper()?;
        charts::plot_line(&mut self.canvas, series, &mapper, color)
    }

    pub fn scatter<X, Y>(
        &mut self,
        series: Series<'_, X, Y>,
        marker: MarkerShape,
        color: Color,
    ) -> PlotResult<()>
    where
        X: SeriesSource + ?Sized,
        Y: SeriesSource + ?Sized,
    {
        let mapper = self.mapper()?;
        charts::scatter(&mut self.canvas, series, &mapper, marker, color)
    }

    pub fn bar<X, Y>(&mut self, series: Series<'_, X, Y>, width: BarWidth, color: Color) -> PlotResult<()>
    where
        X: SeriesSource + ?Sized,
        Y: SeriesSource + ?Sized,
    {
        let mapper = self.mapper()?;
        charts::bar(&mut self.canvas, series, &mapper, width, color)
    }

    /// Histogram of `samples` over `range`, filling the plot area.
    pub fn hist<S: SeriesSource + ?Sized>(
        &mut self,
        samples: &S,
        bins: usize,
        range: (f64, f64),
        color: Color,
    ) -> PlotResult<Histogram> {
        charts::hist(&mut self.canvas, samples, bins, range, self.area, color)
    }

    /// Histogram with an automatic x range, count-tick axes, title and labels.
    ///
    /// The x range is the data extent padded like [`Figure::autoscale`]; the
    /// y range runs from zero to the tallest bin. The figure keeps these limits.
    pub fn hist_full<S: SeriesSource + ?Sized>(
        &mut self,
        samples: &S,
        bins: usize,
        color: Color,
        title: &str,
        xlabel: &str,
        ylabel: &str,
    ) -> PlotResult<Histogram> {
        let range = auto_range(samples, self.config.autoscale);
        let histogram = self.hist(samples, bins, range, color)?;

        self.set_limits(AxisLimits::new(
            range.0,
            range.1,
            0.0,
            histogram.scale_max() as f64,
        ))?;
        let style = self
            .config
            .axis
            .with_tick_policy(TickPolicy::Count {
                ticks: HIST_FULL_TICKS,
            })
            .with_grid(false);
        let mapper = self.mapper()?;
        axes::draw_axes(&mut self.canvas, &mapper, &style)?;

        self.title(title)?;
        self.xlabel(xlabel)?;
        self.ylabel(ylabel)?;
        Ok(histogram)
    }

    /// Heatmap of `grid` filling the plot area.
    pub fn imshow<G: GridSource + ?Sized>(
        &mut self,
        grid: &G,
        colormap: Colormap,
        value_range: Option<(f64, f64)>,
    ) -> PlotResult<()> {
        charts::imshow(&mut self.canvas, grid, self.area, colormap, value_range)
    }

    pub fn title(&mut self, text: &str) -> PlotResult<()> {
        labels::title(&mut self.canvas, text, self.config.axis.label_color)
    }

    pub fn xlabel(&mut self, text: &str) -> PlotResult<()> {
        labels::xlabel(&mut self.canvas, text, self.config.axis.label_color)
    }

    pub fn ylabel(&mut self, text: &str) -> PlotResult<()> {
        labels::ylabel(&mut self.canvas, text, self.config.axis.label_color)
    }

    pub fn legend_label(&mut self, text: &str, x: i32, y: i32, color: Color) -> PlotResult<()> {
        labels::legend_label(&mut self.canvas, text, x, y, color)
    }

    /// Queues a legend row; returns `false` once the legend is full.
    pub fn add_legend_entry(&mut self, label: impl Into<String>, color: Color) -> bool {
        self.legend.push(label, color)
    }

    #[must_use]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn draw_legend(&mut self) -> PlotResult<()> {
        legend::draw_legend(&mut self.canvas, &self.legend, &self.config.legend)
    }

    /// Repaints the canvas with the background color; limits and legend are kept.
    pub fn clear(&mut self) {
        self.canvas.clear(self.config.background);
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    #[must_use]
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    pub fn save<S: ImageSink + ?Sized>(&self, path: impl AsRef<Path>, sink: &mut S) -> PlotResult<()> {
        self.canvas.save(path, sink)
    }

    /// Writes the canvas as a PNG file.
    #[cfg(feature = "png-backend")]
    pub fn save_png(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        self.canvas.save(path, &mut crate::render::PngSink::new())
    }
}
