//! Renders a sine wave, a scatter overlay and a legend to `sine_wave.png`,
//! plus a histogram to `sine_hist.png`.

use pixplot::api::{Figure, FigureConfig};
use pixplot::core::{AxisLimits, MarkerShape, Series};
use pixplot::render::Color;

fn main() -> pixplot::PlotResult<()> {
    let _ = pixplot::telemetry::init_default_tracing();

    let x: Vec<f64> = (0..200).map(|i| f64::from(i) * 0.05).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let coarse_x: Vec<f64> = (0..10).map(f64::from).collect();
    let coarse_y: Vec<f64> = coarse_x.iter().map(|v| v.sin()).collect();

    let mut figure = Figure::new(FigureConfig::new(800, 600).with_margin(40))?;
    figure.set_limits(AxisLimits::new(0.0, 10.0, -1.2, 1.2))?;
    figure.draw_axes()?;
    figure.plot(Series::new(&x, &y), Color::BLUE)?;
    figure.scatter(
        Series::new(&coarse_x, &coarse_y),
        MarkerShape::Circle { radius: 4 },
        Color::ORANGE,
    )?;
    figure.title("y = sin(x)")?;
    figure.xlabel("x")?;
    figure.ylabel("sin(x)")?;
    figure.add_legend_entry("sin(x)", Color::BLUE);
    figure.add_legend_entry("samples", Color::ORANGE);
    figure.draw_legend()?;
    figure.save_png("sine_wave.png")?;

    let mut histogram = Figure::new(FigureConfig::new(800, 600).with_margin(40))?;
    histogram.hist_full(&y, 20, Color::GREEN, "sin(x) values", "value", "count")?;
    histogram.save_png("sine_hist.png")?;
    Ok(())
}
