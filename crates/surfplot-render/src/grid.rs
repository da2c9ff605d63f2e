//! Materialized vertex grids.
//!
//! A [`SurfaceGrid`] is a `rows x cols` lattice of 3D vertices in a chart's
//! local scaled coordinates. A vertex with any non-finite component is
//! undefined: it is never connected to its neighbours and gets no marker.

use glam::{DVec3, Vec2};

/// A row-major lattice of 3D vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceGrid {
    rows: usize,
    cols: usize,
    points: Vec<DVec3>,
}

impl SurfaceGrid {
    /// Grid with no vertices. Renders as nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid by evaluating `f(row, col)` for every vertex.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> DVec3) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        let mut points = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                points.push(f(i, j));
            }
        }
        Self { rows, cols, points }
    }

    /// A degenerate two-vertex grid forming a single segment.
    pub fn segment(from: DVec3, to: DVec3) -> Self {
        Self {
            rows: 2,
            cols: 1,
            points: vec![from, to],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Vertex at `(row, col)`, if in range.
    pub fn point(&self, row: usize, col: usize) -> Option<DVec3> {
        if row < self.rows && col < self.cols {
            Some(self.points[row * self.cols + col])
        } else {
            None
        }
    }

    /// Whether the vertex at `(row, col)` exists and is defined.
    pub fn is_valid(&self, row: usize, col: usize) -> bool {
        self.point(row, col).is_some_and(|p| p.is_finite())
    }

    /// Number of undefined vertices.
    pub fn invalid_count(&self) -> usize {
        self.points.iter().filter(|p| !p.is_finite()).count()
    }
}

/// Device-space image of a [`SurfaceGrid`], reused from frame to frame.
#[derive(Debug, Clone, Default)]
pub struct ProjectedGrid {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) positions: Vec<Vec2>,
    pub(crate) valid: Vec<bool>,
    pub(crate) invalid_count: usize,
}

impl ProjectedGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Projected positions, row-major. Undefined vertices hold `Vec2::NAN`.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Validity mask, row-major.
    pub fn validity(&self) -> &[bool] {
        &self.valid
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_count
    }

    pub fn position(&self, row: usize, col: usize) -> Option<Vec2> {
        if row < self.rows && col < self.cols {
            Some(self.positions[row * self.cols + col])
        } else {
            None
        }
    }

    pub(crate) fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.positions.clear();
        self.valid.clear();
        self.invalid_count = 0;
    }
}
