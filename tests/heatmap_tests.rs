use approx::assert_relative_eq;
use pixplot::api::imshow;
use pixplot::core::{ArrayView, PlotArea, grid_value_range, project_heatmap_cells};
use pixplot::render::{Canvas, Color, Colormap};

#[test]
fn value_range_ignores_non_finite_cells() {
    let grid = vec![vec![f64::NAN, 2.0], vec![-1.0, f64::INFINITY]];
    assert_eq!(grid_value_range(&grid), Some((-1.0, 2.0)));

    let empty: Vec<Vec<f64>> = Vec::new();
    assert_eq!(grid_value_range(&empty), None);
}

#[test]
fn cells_tile_the_area_row_zero_on_top() {
    let grid = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
    let cells = project_heatmap_cells(&grid, PlotArea::full(4, 4), None).expect("cells");

    assert_eq!(cells.len(), 4);
    assert_eq!((cells[0].x, cells[0].y, cells[0].width, cells[0].height), (0, 0, 2, 2));
    assert_eq!((cells[3].x, cells[3].y, cells[3].width, cells[3].height), (2, 2, 2, 2));
    assert_relative_eq!(cells[0].level, 0.0);
    assert_relative_eq!(cells[1].level, 1.0 / 3.0);
    assert_relative_eq!(cells[3].level, 1.0);
}

#[test]
fn uneven_lattice_still_covers_every_pixel() {
    let grid = vec![vec![1.0; 3]; 3];
    let cells = project_heatmap_cells(&grid, PlotArea::full(10, 7), None).expect("cells");

    let covered: i32 = cells.iter().map(|cell| cell.width * cell.height).sum();
    assert_eq!(covered, 70);
    // constant grid normalizes against a unit span
    assert!(cells.iter().all(|cell| cell.level == 0.0));
}

#[test]
fn explicit_range_clamps_levels() {
    let grid = vec![vec![-5.0, 0.5, 5.0]];
    let cells =
        project_heatmap_cells(&grid, PlotArea::full(3, 1), Some((0.0, 1.0))).expect("cells");

    let levels: Vec<f64> = cells.iter().map(|cell| cell.level).collect();
    assert_eq!(levels, vec![0.0, 0.5, 1.0]);
}

#[test]
fn non_finite_range_is_rejected() {
    let grid = vec![vec![1.0]];
    assert!(project_heatmap_cells(&grid, PlotArea::full(3, 3), Some((f64::NAN, 1.0))).is_err());
}

#[test]
fn colormaps_interpolate_between_stops() {
    assert_eq!(Colormap::Grayscale.color_at(0.0), Color::BLACK);
    assert_eq!(Colormap::Grayscale.color_at(1.0), Color::WHITE);
    assert_eq!(Colormap::Grayscale.color_at(0.5), Color::rgb(128, 128, 128));
    assert_eq!(Colormap::Grayscale.color_at(7.0), Color::WHITE);
    assert_eq!(Colormap::Grayscale.color_at(f64::NAN), Color::BLACK);
    assert_eq!(Colormap::Viridis.color_at(1.0), Color::rgb(253, 231, 37));
    assert_eq!(Colormap::Heat.color_at(0.0), Color::BLACK);
    assert_eq!(Colormap::default(), Colormap::Viridis);
}

#[test]
fn imshow_paints_one_cell_per_value() {
    let table = [0.0, 1.0, 2.0, 3.0];
    let grid = ArrayView::matrix(&table, 2, 2).expect("matrix");
    let mut canvas = Canvas::new(4, 4).expect("canvas");

    imshow(
        &mut canvas,
        &grid,
        PlotArea::full(4, 4),
        Colormap::Grayscale,
        None,
    )
    .expect("heatmap");

    assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(canvas.pixel(3, 0), Some(Color::rgb(85, 85, 85)));
    assert_eq!(canvas.pixel(0, 3), Some(Color::rgb(170, 170, 170)));
    assert_eq!(canvas.pixel(3, 3), Some(Color::WHITE));
}
