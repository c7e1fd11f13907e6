use pixplot::PlotError;
use pixplot::api::hist;
use pixplot::core::{Histogram, PlotArea, project_histogram_columns};
use pixplot::render::{Canvas, Color};

#[test]
fn uniform_samples_fill_every_bin_equally() {
    let samples: Vec<f64> = (0..100).map(|i| f64::from(i) / 10.0).collect();
    let histogram = Histogram::compute(&samples, 10, 0.0, 10.0).expect("histogram");

    assert_eq!(histogram.bins(), 10);
    assert_eq!(histogram.total(), 100);
    assert_eq!(histogram.dropped(), 0);
    assert!(histogram.counts().iter().all(|&count| count == 10));
}

#[test]
fn upper_edge_lands_in_last_bin() {
    let histogram = Histogram::compute(&[10.0], 10, 0.0, 10.0).expect("histogram");

    assert_eq!(histogram.counts()[9], 1);
    assert_eq!(histogram.total(), 1);
}

#[test]
fn out_of_range_and_non_finite_samples_are_dropped() {
    let samples = [-0.1, 0.0, 5.0, 10.0001, f64::NAN, f64::INFINITY];
    let histogram = Histogram::compute(&samples, 2, 0.0, 10.0).expect("histogram");

    assert_eq!(histogram.counts(), &[1, 1]);
    assert_eq!(histogram.dropped(), 4);
    assert_eq!(histogram.total() + histogram.dropped(), samples.len());
}

#[test]
fn zero_bins_is_an_error() {
    let err = Histogram::compute(&[1.0], 0, 0.0, 1.0).expect_err("must reject zero bins");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn empty_histogram_scales_against_one() {
    let empty: [f64; 0] = [];
    let histogram = Histogram::compute(&empty, 3, 0.0, 1.0).expect("histogram");

    assert_eq!(histogram.scale_max(), 1);
    assert_eq!(histogram.counts(), &[0, 0, 0]);
}

#[test]
fn degenerate_range_still_bins() {
    let histogram = Histogram::compute(&[2.0, 2.0], 4, 2.0, 2.0).expect("histogram");
    assert_eq!(histogram.counts(), &[2, 0, 0, 0]);
}

#[test]
fn columns_scale_to_tallest_bin() {
    let histogram = Histogram::compute(&[0.5, 0.7, 1.5], 4, 0.0, 4.0).expect("histogram");
    assert_eq!(histogram.counts(), &[2, 1, 0, 0]);

    let columns = project_histogram_columns(&histogram, PlotArea::full(100, 51));
    assert_eq!(columns.len(), 4);

    assert_eq!((columns[0].x_left, columns[0].x_right), (0, 25));
    assert_eq!(columns[0].y_top, 0);
    assert_eq!((columns[1].x_left, columns[1].x_right), (25, 50));
    assert_eq!(columns[1].y_top, 25);
    assert_eq!(columns[2].y_top, 50);
    assert!(columns.iter().all(|column| column.y_bottom == 50));
}

#[test]
fn rendered_histogram_fills_columns_down_to_bottom() {
    let mut canvas = Canvas::new(100, 51).expect("canvas");
    let histogram = hist(
        &mut canvas,
        &[0.5, 0.7, 1.5],
        4,
        (0.0, 4.0),
        PlotArea::full(100, 51),
        Color::GREEN,
    )
    .expect("histogram");

    assert_eq!(histogram.total(), 3);
    assert_eq!(canvas.pixel(10, 0), Some(Color::GREEN));
    assert_eq!(canvas.pixel(30, 24), Some(Color::WHITE));
    assert_eq!(canvas.pixel(30, 25), Some(Color::GREEN));
    // Empty bins keep a one-row baseline.
    assert_eq!(canvas.pixel(60, 50), Some(Color::GREEN));
    assert_eq!(canvas.pixel(60, 49), Some(Color::WHITE));
}
