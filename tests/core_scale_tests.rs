use approx::assert_relative_eq;
use pixplot::core::{AxisLimits, CoordinateMapper, DataPoint, LinearScale, PixelPoint, PlotArea};

#[test]
fn corners_map_to_canvas_corners() {
    let limits = AxisLimits::new(-3.0, 7.0, 10.0, 20.0);
    let mapper = CoordinateMapper::for_canvas(limits, 800, 600).expect("mapper");

    assert_eq!(
        mapper.map(DataPoint::new(-3.0, 10.0)),
        Some(PixelPoint::new(0, 599))
    );
    assert_eq!(
        mapper.map(DataPoint::new(7.0, 20.0)),
        Some(PixelPoint::new(799, 0))
    );
}

#[test]
fn mapping_rounds_down_and_inverts_y() {
    let mapper =
        CoordinateMapper::for_canvas(AxisLimits::new(0.0, 10.0, -1.0, 1.0), 800, 600).expect("mapper");

    // 0.5 * 799 = 399.5 and 0.5 * 599 = 299.5
    assert_eq!(mapper.map_x(5.0), Some(399));
    assert_eq!(mapper.map_y(0.0), Some(299));
    assert!(mapper.map_y(0.9).expect("y") < mapper.map_y(-0.9).expect("y"));
}

#[test]
fn points_outside_limits_map_outside_the_canvas() {
    let mapper =
        CoordinateMapper::for_canvas(AxisLimits::new(0.0, 10.0, 0.0, 10.0), 800, 600).expect("mapper");

    // -0.1 * 799 = -79.9, floored away from zero
    assert_eq!(mapper.map_x(-1.0), Some(-80));
    assert!(mapper.map_y(20.0).expect("y") < 0);
    assert_eq!(mapper.map_x(1e300), Some(i32::MAX));
}

#[test]
fn degenerate_ranges_use_a_unit_span() {
    let limits = AxisLimits::new(2.0, 2.0, 3.0, 3.0);
    assert!(limits.is_degenerate());
    let mapper = CoordinateMapper::for_canvas(limits, 101, 51).expect("mapper");

    assert_eq!(mapper.map_x(2.0), Some(0));
    assert_eq!(mapper.map_x(3.0), Some(100));
    assert_eq!(mapper.map_y(3.0), Some(50));
    assert_eq!(mapper.map_y(4.0), Some(0));
}

#[test]
fn non_finite_samples_do_not_map() {
    let mapper = CoordinateMapper::for_canvas(AxisLimits::default(), 10, 10).expect("mapper");

    assert_eq!(mapper.map_x(f64::NAN), None);
    assert_eq!(mapper.map_y(f64::INFINITY), None);
    assert_eq!(mapper.map(DataPoint::new(0.5, f64::NAN)), None);
}

#[test]
fn non_finite_limits_are_rejected() {
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    assert!(
        CoordinateMapper::for_canvas(AxisLimits::new(0.0, f64::INFINITY, 0.0, 1.0), 10, 10)
            .is_err()
    );
    assert!(AxisLimits::new(0.0, 1.0, f64::NEG_INFINITY, 1.0).validate().is_err());
}

#[test]
fn linear_scale_normalizes_against_its_domain() {
    let scale = LinearScale::new(-2.0, 2.0).expect("scale");

    assert_relative_eq!(scale.normalize(0.0), 0.5);
    assert_relative_eq!(scale.normalize(2.0), 1.0);
    assert_relative_eq!(scale.span(), 4.0);
    assert_relative_eq!(LinearScale::new(5.0, 5.0).expect("scale").span(), 1.0);
}

#[test]
fn margin_area_confines_the_mapping() {
    let area = PlotArea::with_margin(800, 600, 50);
    assert_eq!(area, PlotArea::new(50, 50, 749, 549));
    assert_eq!(area.width(), 700);
    assert_eq!(area.height(), 500);

    let mapper = CoordinateMapper::new(AxisLimits::new(0.0, 1.0, 0.0, 1.0), area).expect("mapper");
    assert_eq!(mapper.map(DataPoint::new(0.0, 0.0)), Some(PixelPoint::new(50, 549)));
    assert_eq!(mapper.map(DataPoint::new(1.0, 1.0)), Some(PixelPoint::new(749, 50)));
}

#[test]
fn oversized_margin_collapses_to_center() {
    let area = PlotArea::with_margin(10, 10, 20);
    assert_eq!(area, PlotArea::new(4, 4, 4, 4));
    assert_eq!(area.width(), 1);
}
