//! 3D view transform from chart space to device space.
//!
//! The transform is fixed in order:
//!
//! 1. scale by the zoom factor,
//! 2. rotate about the height (z) axis by the horizontal angle (mixes x/y),
//! 3. rotate about the x axis by the vertical angle (mixes y/z),
//! 4. flip z (device y grows downward) and add the screen-space translation.
//!
//! Steps 1 to 3 collapse into a single 3x3 matrix, so projecting a whole grid
//! is one matrix-vector product and one add per vertex.

use crate::camera::CameraState;
use crate::grid::{ProjectedGrid, SurfaceGrid};
use glam::{DMat3, DVec3, Vec2};
use surfplot_core::profiling::profile_function;

/// Affine map from chart-local coordinates to device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    linear: DMat3,
    translation: DVec3,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::from_camera(&CameraState::IDENTITY)
    }
}

impl ViewTransform {
    pub fn from_camera(camera: &CameraState) -> Self {
        let linear = DMat3::from_rotation_x(camera.vertical_angle())
            * DMat3::from_rotation_z(camera.horizontal_angle())
            * DMat3::from_diagonal(DVec3::splat(camera.zoom()));
        Self {
            linear,
            translation: camera.translation(),
        }
    }

    /// Zoom and rotation only.
    pub fn linear(&self) -> DMat3 {
        self.linear
    }

    /// Zoomed and rotated point, before the depth flip and translation.
    #[inline]
    pub fn rotate_point(&self, point: DVec3) -> DVec3 {
        self.linear * point
    }

    /// Full device-space position `(x, y, z)`; the depth component is `y`.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        let r = self.linear * point;
        DVec3::new(
            r.x + self.translation.x,
            r.y + self.translation.y,
            -r.z + self.translation.z,
        )
    }

    /// Inverse of [`Self::transform_point`].
    pub fn inverse_point(&self, device: DVec3) -> DVec3 {
        let r = DVec3::new(
            device.x - self.translation.x,
            device.y - self.translation.y,
            self.translation.z - device.z,
        );
        // det = zoom^3 > 0, so the inverse always exists
        self.linear.inverse() * r
    }

    /// 2D device position: the depth component is discarded.
    #[inline]
    pub fn project(&self, point: DVec3) -> Vec2 {
        let d = self.transform_point(point);
        Vec2::new(d.x as f32, d.z as f32)
    }

    /// Project every vertex of `grid` into `out`, reusing its storage.
    ///
    /// Vertices that are undefined, or whose device position is not finite,
    /// are marked invalid.
    pub fn project_grid(&self, grid: &SurfaceGrid, out: &mut ProjectedGrid) {
        profile_function!();

        out.reset(grid.rows(), grid.cols());
        out.positions.reserve(grid.len());
        out.valid.reserve(grid.len());

        for &point in grid.points() {
            // a finite point can still overflow f32 at extreme zoom
            let projected = point.is_finite().then(|| self.project(point));
            if let Some(position) = projected.filter(|p| p.is_finite()) {
                out.positions.push(position);
                out.valid.push(true);
            } else {
                out.positions.push(Vec2::NAN);
                out.valid.push(false);
                out.invalid_count += 1;
            }
        }
    }
}
