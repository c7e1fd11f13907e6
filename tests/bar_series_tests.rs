use pixplot::api::bar;
use pixplot::core::{AxisLimits, BarColumn, BarWidth, CoordinateMapper, Series, project_bars};
use pixplot::render::{Canvas, Color};

fn mapper() -> CoordinateMapper {
    CoordinateMapper::for_canvas(AxisLimits::new(0.0, 10.0, 0.0, 10.0), 101, 101).expect("mapper")
}

#[test]
fn auto_width_is_eighty_percent_of_slot() {
    assert_eq!(BarWidth::Auto.resolve(800, 10), 64);
    assert_eq!(BarWidth::Auto.resolve(101, 3), 26);
    assert_eq!(BarWidth::Auto.resolve(10, 3), 2);
    assert_eq!(BarWidth::Auto.resolve(800, 0), 0);
    assert_eq!(BarWidth::Fixed(7).resolve(800, 10), 7);
}

#[test]
fn bars_rise_from_zero_baseline_centered_on_x() {
    let x = [2.0];
    let heights = [5.0];
    let bars = project_bars(Series::new(&x, &heights), &mapper(), BarWidth::Fixed(4));

    assert_eq!(
        bars,
        vec![BarColumn {
            x: 18,
            y: 50,
            width: 4,
            height: 50,
        }]
    );
}

#[test]
fn zero_and_negative_heights_are_skipped() {
    let x = [2.0, 5.0, 8.0];
    let heights = [5.0, 0.0, -3.0];
    let bars = project_bars(Series::new(&x, &heights), &mapper(), BarWidth::Auto);

    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].width, 26);
    assert_eq!(bars[0].x, 20 - 13);
}

#[test]
fn empty_series_projects_nothing() {
    let empty: [f64; 0] = [];
    assert!(project_bars(Series::new(&empty, &empty), &mapper(), BarWidth::Auto).is_empty());
}

#[test]
fn zero_height_bar_draws_nothing() {
    let mut canvas = Canvas::new(101, 101).expect("canvas");
    let before = canvas.clone();

    bar(
        &mut canvas,
        Series::new(&[4.0], &[0.0]),
        &mapper(),
        BarWidth::Auto,
        Color::RED,
    )
    .expect("bar chart");

    assert_eq!(canvas, before);
}

#[test]
fn drawn_bar_stops_above_the_baseline_row() {
    let mut canvas = Canvas::new(101, 101).expect("canvas");
    bar(
        &mut canvas,
        Series::new(&[5.0], &[5.0]),
        &mapper(),
        BarWidth::Fixed(10),
        Color::RED,
    )
    .expect("bar chart");

    assert_eq!(canvas.pixel(50, 50), Some(Color::RED));
    assert_eq!(canvas.pixel(45, 99), Some(Color::RED));
    assert_eq!(canvas.pixel(54, 99), Some(Color::RED));
    assert_eq!(canvas.pixel(50, 100), Some(Color::WHITE));
    assert_eq!(canvas.pixel(44, 70), Some(Color::WHITE));
    assert_eq!(canvas.pixel(55, 70), Some(Color::WHITE));
}
