use tracing::debug;

use crate::core::{
    BarWidth, CoordinateMapper, GridSource, Histogram, MarkerShape, PlotArea, Series,
    SeriesSource, project_bars, project_heatmap_cells, project_histogram_columns,
    project_line_segments, project_scatter_points,
};
use crate::error::PlotResult;
use crate::render::{
    Canvas, CanvasRenderer, CirclePrimitive, Color, Colormap, LinePrimitive, RectPrimitive,
    RenderFrame, Renderer,
};

/// Frame connecting consecutive samples with straight segments.
#[must_use]
pub fn line_frame<X, Y>(
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
    color: Color,
) -> RenderFrame
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    let mut frame = RenderFrame::new();
    for segment in project_line_segments(series, mapper) {
        frame.lines.push(LinePrimitive::new(
            segment.x1, segment.y1, segment.x2, segment.y2, color,
        ));
    }
    frame
}

/// Frame placing one marker per sample.
#[must_use]
pub fn scatter_frame<X, Y>(
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
    marker: MarkerShape,
    color: Color,
) -> RenderFrame
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    let mut frame = RenderFrame::new();
    for center in project_scatter_points(series, mapper) {
        match marker {
            MarkerShape::Square { size } => {
                let size = i32::try_from(size).unwrap_or(i32::MAX);
                let half = size / 2;
                frame.rects.push(RectPrimitive::new(
                    center.x.saturating_sub(half),
                    center.y.saturating_sub(half),
                    size,
                    size,
                    color,
                ));
            }
            MarkerShape::Circle { radius } => {
                let radius = i32::try_from(radius).unwrap_or(i32::MAX);
                frame
                    .circles
                    .push(CirclePrimitive::new(center.x, center.y, radius, color));
            }
        }
    }
    frame
}

/// Frame of bar columns rising from the `y = 0` baseline.
#[must_use]
pub fn bar_frame<X, Y>(
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
    width: BarWidth,
    color: Color,
) -> RenderFrame
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    let mut frame = RenderFrame::new();
    for bar in project_bars(series, mapper, width) {
        frame
            .rects
            .push(RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, color));
    }
    frame
}

/// Frame of histogram columns spread across `area`.
#[must_use]
pub fn histogram_frame(histogram: &Histogram, area: PlotArea, color: Color) -> RenderFrame {
    let mut frame = RenderFrame::new();
    for column in project_histogram_columns(histogram, area) {
        frame.rects.push(RectPrimitive::new(
            column.x_left,
            column.y_top,
            column.x_right - column.x_left,
            column.y_bottom - column.y_top + 1,
            color,
        ));
    }
    frame
}

/// Frame painting one colored cell per finite grid value.
pub fn heatmap_frame<G: GridSource + ?Sized>(
    grid: &G,
    area: PlotArea,
    colormap: Colormap,
    value_range: Option<(f64, f64)>,
) -> PlotResult<RenderFrame> {
    let mut frame = RenderFrame::new();
    for cell in project_heatmap_cells(grid, area, value_range)? {
        frame.rects.push(RectPrimitive::new(
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            colormap.color_at(cell.level),
        ));
    }
    Ok(frame)
}

/// Draws `series` as a polyline. Fewer than two samples draw nothing.
pub fn plot_line<X, Y>(
    canvas: &mut Canvas,
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
    color: Color,
) -> PlotResult<()>
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    let frame = line_frame(series, mapper, color);
    debug!(samples = series.len(), segments = frame.lines.len(), "line chart");
    CanvasRenderer::new(canvas).render(&frame)
}

/// Draws an independent marker at every sample.
pub fn scatter<X, Y>(
    canvas: &mut Canvas,
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
    marker: MarkerShape,
    color: Color,
) -> PlotResult<()>
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    let frame = scatter_frame(series, mapper, marker, color);
    debug!(
        samples = series.len(),
        markers = frame.primitive_count(),
        ?marker,
        "scatter chart"
    );
    CanvasRenderer::new(canvas).render(&frame)
}

/// Draws one column per `(x, height)` sample.
pub fn bar<X, Y>(
    canvas: &mut Canvas,
    series: Series<'_, X, Y>,
    mapper: &CoordinateMapper,
    width: BarWidth,
    color: Color,
) -> PlotResult<()>
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    let frame = bar_frame(series, mapper, width, color);
    debug!(samples = series.len(), bars = frame.rects.len(), "bar chart");
    CanvasRenderer::new(canvas).render(&frame)
}

/// Bins `samples` over `[min, max]` and draws the counts across `area`.
///
/// Returns the computed histogram so callers can label or inspect it.
pub fn hist<S: SeriesSource + ?Sized>(
    canvas: &mut Canvas,
    samples: &S,
    bins: usize,
    range: (f64, f64),
    area: PlotArea,
    color: Color,
) -> PlotResult<Histogram> {
    let (min, max) = range;
    let histogram = Histogram::compute(samples, bins, min, max)?;
    let frame = histogram_frame(&histogram, area, color);
    CanvasRenderer::new(canvas).render(&frame)?;
    Ok(histogram)
}

/// Paints a 2-D grid as colored cells filling `area`, row 0 at the top.
///
/// Values are normalized against `value_range`, or against the grid's own
/// finite min/max when `None`.
pub fn imshow<G: GridSource + ?Sized>(
    canvas: &mut Canvas,
    grid: &G,
    area: PlotArea,
    colormap: Colormap,
    value_range: Option<(f64, f64)>,
) -> PlotResult<()> {
    let frame = heatmap_frame(grid, area, colormap, value_range)?;
    let (rows, cols) = grid.shape();
    debug!(rows, cols, cells = frame.rects.len(), ?colormap, "heatmap");
    CanvasRenderer::new(canvas).render(&frame)
}
