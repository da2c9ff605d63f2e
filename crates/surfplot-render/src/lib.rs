//! Surfplot Render
//!
//! Turns materialized surface grids into 2D wireframes:
//! - [`CameraState`]: rotation, zoom and translation with clamped deltas
//! - [`ViewTransform`]: the batch 3D-to-device transform
//! - [`MeshRenderer`]: gap-aware edge and marker drawing
//! - [`DrawSurface`]: the drawing target a backend implements
//!
//! # Example
//!
//! ```
//! use surfplot_render::*;
//! use glam::DVec3;
//!
//! let grid = SurfaceGrid::from_fn(3, 3, |i, j| DVec3::new(i as f64, j as f64, (i + j) as f64));
//! let camera = CameraState::centered(900, 980);
//! let mut surface = RecordingSurface::new();
//!
//! let stats = MeshRenderer::new().render(
//!     &grid,
//!     &camera,
//!     &MeshStyle::new(Color::WHITE, MeshFlags::LINES),
//!     &mut surface,
//! );
//! assert_eq!(stats.lines, 12);
//! ```

mod camera;
mod color;
mod grid;
mod mesh;
mod surface;
mod transform;

pub use camera::*;
pub use color::Color;
pub use grid::*;
pub use mesh::*;
pub use surface::*;
pub use transform::*;
