//! Gap-aware rendering against a naive per-edge reference.

use glam::{DVec3, Vec2};
use surfplot_render::{
    CameraState, Color, DrawSurface, MeshFlags, MeshRenderer, MeshStyle, RecordingSurface,
    SurfaceGrid, ViewTransform,
};

/// Every edge the naive double loop would draw, as projected endpoint pairs.
fn reference_edges(grid: &SurfaceGrid, camera: &CameraState) -> Vec<(Vec2, Vec2)> {
    let t = ViewTransform::from_camera(camera);
    let mut edges = Vec::new();
    for i in 0..grid.rows() {
        for j in 1..grid.cols() {
            if grid.is_valid(i, j - 1) && grid.is_valid(i, j) {
                edges.push((
                    t.project(grid.point(i, j - 1).unwrap()),
                    t.project(grid.point(i, j).unwrap()),
                ));
            }
        }
    }
    for i in 1..grid.rows() {
        for j in 0..grid.cols() {
            if grid.is_valid(i - 1, j) && grid.is_valid(i, j) {
                edges.push((
                    t.project(grid.point(i - 1, j).unwrap()),
                    t.project(grid.point(i, j).unwrap()),
                ));
            }
        }
    }
    edges
}

fn drawn_edges(grid: &SurfaceGrid, camera: &CameraState) -> Vec<(Vec2, Vec2)> {
    let mut surface = RecordingSurface::new();
    MeshRenderer::new().render(
        grid,
        camera,
        &MeshStyle::new(Color::WHITE, MeshFlags::LINES),
        &mut surface,
    );
    surface.present();
    surface.presented_lines().map(|(a, b, _)| (a, b)).collect()
}

fn sort_edges(edges: &mut [(Vec2, Vec2)]) {
    edges.sort_by(|a, b| {
        let ka = [a.0.x, a.0.y, a.1.x, a.1.y];
        let kb = [b.0.x, b.0.y, b.1.x, b.1.y];
        ka.partial_cmp(&kb).unwrap()
    });
}

fn tilted_camera() -> CameraState {
    let mut camera = CameraState::centered(800, 600);
    camera.rotate(0.6, 0.3);
    camera.zoom_by(1.5);
    camera
}

#[test]
fn test_matches_naive_reference_with_scattered_gaps() {
    let grid = SurfaceGrid::from_fn(9, 7, |i, j| {
        let z = if (i * 5 + j * 3) % 7 == 0 || (i == 4 && j > 2) {
            f64::NAN
        } else {
            (i * j) as f64
        };
        DVec3::new(i as f64 * 10.0, j as f64 * 10.0, z)
    });
    let camera = tilted_camera();

    let mut expected = reference_edges(&grid, &camera);
    let mut actual = drawn_edges(&grid, &camera);
    sort_edges(&mut expected);
    sort_edges(&mut actual);
    assert_eq!(actual, expected);
}

#[test]
fn test_fully_undefined_row_and_column_suppressed() {
    // x/y over [-1, 1]^2 at step 1: the y = 0 column is undefined.
    let axis = [-1.0, 0.0, 1.0];
    let grid = SurfaceGrid::from_fn(3, 3, |i, j| {
        let (x, y) = (axis[i], axis[j]);
        let z = x / y;
        DVec3::new(x, y, if z.is_finite() { z } else { f64::NAN })
    });
    let camera = tilted_camera();

    let edges = drawn_edges(&grid, &camera);
    // Row edges: none can span the middle column. Column edges: 2 per outer column.
    assert_eq!(edges.len(), 4);
    assert_eq!(edges.len(), reference_edges(&grid, &camera).len());
}

#[test]
fn test_every_hole_position_is_isolated() {
    let camera = tilted_camera();
    for hole_i in 0..4 {
        for hole_j in 0..5 {
            let grid = SurfaceGrid::from_fn(4, 5, |i, j| {
                let z = if (i, j) == (hole_i, hole_j) {
                    f64::NAN
                } else {
                    (i + 2 * j) as f64
                };
                DVec3::new(i as f64, j as f64, z)
            });
            let edges = drawn_edges(&grid, &camera);
            assert_eq!(edges.len(), reference_edges(&grid, &camera).len());
            assert!(
                edges.iter().all(|(a, b)| a.is_finite() && b.is_finite()),
                "edge touches hole at ({hole_i}, {hole_j})"
            );
        }
    }
}
