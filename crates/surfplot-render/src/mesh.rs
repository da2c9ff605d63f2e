//! Gap-aware wireframe renderer.
//!
//! Draws a projected grid as two families of edges:
//! - same-row edges between `(i, j)` and `(i, j + 1)`,
//! - same-column edges between `(i, j)` and `(i + 1, j)`.
//!
//! An edge is drawn only when both endpoints are defined. Each row and column
//! is walked once as a sequence of contiguous valid runs, so a run of `n`
//! defined vertices yields exactly `n - 1` edges and undefined vertices are
//! skipped without any per-edge pair test.

use crate::camera::CameraState;
use crate::grid::{ProjectedGrid, SurfaceGrid};
use crate::surface::DrawSurface;
use crate::transform::ViewTransform;
use crate::Color;
use glam::Vec2;
use surfplot_core::profiling::profile_scope;

bitflags::bitflags! {
    /// Which primitives a chart draws.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MeshFlags: u8 {
        /// Connect adjacent defined vertices.
        const LINES = 0b01;
        /// Put a marker on every defined vertex.
        const POINTS = 0b10;
    }
}

impl Default for MeshFlags {
    fn default() -> Self {
        Self::LINES
    }
}

impl MeshFlags {
    pub fn from_toggles(show_points: bool, show_lines: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::POINTS, show_points);
        flags.set(Self::LINES, show_lines);
        flags
    }
}

/// Per-chart drawing style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStyle {
    pub color: Color,
    pub flags: MeshFlags,
    pub line_width: f32,
    pub point_radius: f32,
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            flags: MeshFlags::default(),
            line_width: 1.0,
            point_radius: 3.0,
        }
    }
}

impl MeshStyle {
    pub fn new(color: Color, flags: MeshFlags) -> Self {
        Self {
            color,
            flags,
            ..Self::default()
        }
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_point_radius(mut self, radius: f32) -> Self {
        self.point_radius = radius;
        self
    }
}

/// Counts of primitives issued to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    pub lines: usize,
    pub points: usize,
}

impl std::ops::AddAssign for DrawStats {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.points += rhs.points;
    }
}

/// Transforms and draws surface grids, keeping a scratch projection buffer.
#[derive(Debug, Default)]
pub struct MeshRenderer {
    scratch: ProjectedGrid,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project `grid` through `camera` and draw it.
    pub fn render<S: DrawSurface + ?Sized>(
        &mut self,
        grid: &SurfaceGrid,
        camera: &CameraState,
        style: &MeshStyle,
        surface: &mut S,
    ) -> DrawStats {
        if grid.is_empty() {
            return DrawStats::default();
        }
        ViewTransform::from_camera(camera).project_grid(grid, &mut self.scratch);
        if self.scratch.invalid_count > 0 {
            tracing::trace!(
                rows = grid.rows(),
                cols = grid.cols(),
                undefined = self.scratch.invalid_count,
                "rendering grid with gaps"
            );
        }
        draw_projected(&self.scratch, style, surface)
    }
}

/// Draw an already projected grid.
pub fn draw_projected<S: DrawSurface + ?Sized>(
    grid: &ProjectedGrid,
    style: &MeshStyle,
    surface: &mut S,
) -> DrawStats {
    profile_scope!("draw_projected");

    let mut stats = DrawStats::default();

    if style.flags.contains(MeshFlags::POINTS) {
        for (&position, _) in grid.positions.iter().zip(&grid.valid).filter(|(_, v)| **v) {
            surface.fill_circle(position, style.point_radius, style.color);
            stats.points += 1;
        }
    }

    if style.flags.contains(MeshFlags::LINES) {
        let (rows, cols) = (grid.rows, grid.cols);
        let mut emit = |a: Vec2, b: Vec2| {
            surface.draw_line(a, b, style.color, style.line_width);
            stats.lines += 1;
        };

        if grid.invalid_count == 0 {
            for i in 0..rows {
                for j in 1..cols {
                    emit(grid.positions[i * cols + j - 1], grid.positions[i * cols + j]);
                }
            }
            for i in 1..rows {
                for j in 0..cols {
                    emit(grid.positions[(i - 1) * cols + j], grid.positions[i * cols + j]);
                }
            }
        } else {
            for i in 0..rows {
                walk_runs(grid, (0..cols).map(|j| i * cols + j), &mut emit);
            }
            for j in 0..cols {
                walk_runs(grid, (0..rows).map(|i| i * cols + j), &mut emit);
            }
        }
    }

    stats
}

/// Emit one edge per adjacent pair inside each contiguous valid run of `line`.
fn walk_runs(
    grid: &ProjectedGrid,
    line: impl Iterator<Item = usize>,
    emit: &mut impl FnMut(Vec2, Vec2),
) {
    let mut previous: Option<Vec2> = None;
    for index in line {
        if grid.valid[index] {
            let current = grid.positions[index];
            if let Some(prev) = previous {
                emit(prev, current);
            }
            previous = Some(current);
        } else {
            previous = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use glam::DVec3;

    fn flat_grid(rows: usize, cols: usize, hole: Option<(usize, usize)>) -> SurfaceGrid {
        SurfaceGrid::from_fn(rows, cols, |i, j| {
            // z = col keeps every projected position distinct under the identity camera
            let z = if Some((i, j)) == hole { f64::NAN } else { j as f64 };
            DVec3::new(i as f64, j as f64, z)
        })
    }

    fn render(grid: &SurfaceGrid, flags: MeshFlags) -> (DrawStats, RecordingSurface) {
        let mut surface = RecordingSurface::new();
        let stats = MeshRenderer::new().render(
            grid,
            &CameraState::IDENTITY,
            &MeshStyle::new(Color::WHITE, flags),
            &mut surface,
        );
        surface.present();
        (stats, surface)
    }

    #[test]
    fn test_full_grid_edge_count() {
        let (stats, _) = render(&flat_grid(3, 4, None), MeshFlags::LINES);
        // 3 rows x 3 row-edges + 2 x 4 column-edges
        assert_eq!(stats.lines, 9 + 8);
        assert_eq!(stats.points, 0);
    }

    #[test]
    fn test_single_hole_removes_its_edges() {
        let (stats, surface) = render(&flat_grid(3, 3, Some((1, 1))), MeshFlags::LINES);
        // 12 edges in a 3x3 grid, the centre vertex touches 4 of them
        assert_eq!(stats.lines, 8);
        let centre = Vec2::new(1.0, -1.0);
        for (a, b, _) in surface.presented_lines() {
            assert_ne!(a, centre);
            assert_ne!(b, centre);
        }
    }

    #[test]
    fn test_points_only_on_defined_vertices() {
        let (stats, surface) = render(&flat_grid(2, 2, Some((0, 0))), MeshFlags::POINTS);
        assert_eq!(stats.points, 3);
        assert_eq!(stats.lines, 0);
        assert!(surface.presented_circles().all(|c| c.is_finite()));
    }

    #[test]
    fn test_empty_flags_draw_nothing() {
        let (stats, surface) = render(&flat_grid(4, 4, None), MeshFlags::empty());
        assert_eq!(stats, DrawStats::default());
        assert!(surface.presented().is_empty());
    }

    #[test]
    fn test_segment_grid_draws_one_line() {
        let grid = SurfaceGrid::segment(DVec3::new(-1e10, 0.0, 0.0), DVec3::new(1e10, 0.0, 0.0));
        let (stats, surface) = render(&grid, MeshFlags::LINES);
        assert_eq!(stats.lines, 1);
        let (a, b, _) = surface.presented_lines().next().unwrap();
        assert_eq!(a, Vec2::new(-1e10, 0.0));
        assert_eq!(b, Vec2::new(1e10, 0.0));
    }

    #[test]
    fn test_empty_grid_is_noop() {
        let (stats, surface) = render(&SurfaceGrid::empty(), MeshFlags::all());
        assert_eq!(stats, DrawStats::default());
        assert!(surface.presented().is_empty());
    }

    #[test]
    fn test_flags_from_toggles() {
        assert_eq!(MeshFlags::from_toggles(true, true), MeshFlags::all());
        assert_eq!(MeshFlags::from_toggles(false, true), MeshFlags::LINES);
        assert_eq!(MeshFlags::from_toggles(false, false), MeshFlags::empty());
    }
}
