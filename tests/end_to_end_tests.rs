use pixplot::api::{plot_line, scatter};
use pixplot::core::{AxisLimits, CoordinateMapper, MarkerShape, Series};
use pixplot::render::{Canvas, Color};
use pixplot::{Figure, FigureConfig};

fn sine_samples() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y = x.iter().map(|v| v.sin()).collect();
    (x, y)
}

fn render_sine() -> Canvas {
    let (x, y) = sine_samples();
    let mut canvas = Canvas::new(800, 600).expect("canvas");
    let mapper =
        CoordinateMapper::for_canvas(AxisLimits::new(0.0, 10.0, -1.2, 1.2), 800, 600).expect("mapper");
    plot_line(&mut canvas, Series::new(&x, &y), &mapper, Color::BLUE).expect("plot");
    canvas
}

#[test]
fn sine_line_leaves_top_left_corner_blank() {
    let canvas = render_sine();

    for y in 0..50 {
        for x in 0..50 {
            assert_eq!(canvas.pixel(x, y), Some(Color::WHITE), "({x}, {y})");
        }
    }
}

#[test]
fn sine_line_starts_on_the_middle_row() {
    let canvas = render_sine();

    assert_eq!(canvas.pixel(0, 299), Some(Color::BLUE));
    // sin(1) maps to (79, 89).
    assert_eq!(canvas.pixel(79, 89), Some(Color::BLUE));
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_sine().as_bytes(), render_sine().as_bytes());
}

#[test]
fn scatter_markers_land_on_samples() {
    let (x, y) = sine_samples();
    let mut canvas = Canvas::new(800, 600).expect("canvas");
    let mapper =
        CoordinateMapper::for_canvas(AxisLimits::new(0.0, 10.0, -1.2, 1.2), 800, 600).expect("mapper");

    scatter(
        &mut canvas,
        Series::new(&x, &y),
        &mapper,
        MarkerShape::Circle { radius: 3 },
        Color::RED,
    )
    .expect("scatter");

    assert_eq!(canvas.pixel(0, 299), Some(Color::RED));
    assert_eq!(canvas.pixel(3, 299), Some(Color::RED));
    assert_eq!(canvas.pixel(79, 89), Some(Color::RED));
    assert_eq!(canvas.pixel(40, 40), Some(Color::WHITE));
}

#[test]
fn figure_flow_composes_every_layer() {
    let (x, y) = sine_samples();
    let mut figure = Figure::new(FigureConfig::new(400, 300).with_margin(30)).expect("figure");

    let limits = figure.autoscale([Series::new(&x, &y)]);
    assert!(limits.xmin < 0.0 && limits.xmax > 9.0);

    figure.draw_axes().expect("axes");
    figure.plot(Series::new(&x, &y), Color::BLUE).expect("plot");
    figure.title("sine").expect("title");
    assert!(figure.add_legend_entry("sin", Color::BLUE));
    figure.draw_legend().expect("legend");

    // Legend swatch at (W - 150, 20).
    assert_eq!(figure.canvas().pixel(250, 20), Some(Color::BLUE));
    // Margin outside the plot area stays untouched below the title row.
    assert_eq!(figure.canvas().pixel(5, 150), Some(Color::WHITE));

    figure.clear();
    assert!(figure.canvas().as_bytes().iter().all(|&byte| byte == 255));
    assert_eq!(figure.legend().len(), 1);
}

#[test]
fn hist_full_sets_count_limits_and_draws_bars() {
    let samples = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
    let mut figure = Figure::new(FigureConfig::new(200, 200).with_margin(20)).expect("figure");

    let histogram = figure
        .hist_full(&samples, 3, Color::GREEN, "counts", "value", "n")
        .expect("hist_full");

    assert_eq!(histogram.counts(), &[1, 2, 3]);
    let limits = figure.limits();
    assert_eq!((limits.ymin, limits.ymax), (0.0, 3.0));
    assert!(limits.xmin < 1.0 && limits.xmax > 3.0);

    let area = figure.area();
    let painted_green = (area.x0..=area.x1)
        .flat_map(|x| (area.y0..=area.y1).map(move |y| (x, y)))
        .filter(|&(x, y)| figure.canvas().pixel(x, y) == Some(Color::GREEN))
        .count();
    assert!(painted_green > 0);
}
