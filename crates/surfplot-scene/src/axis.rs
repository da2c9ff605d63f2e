//! Permanent axis reference charts.
//!
//! Each axis is a two-vertex chart running from `-bound` to `+bound` through
//! the origin, drawn through the same transform and mesh path as user charts.

use crate::chart::{Chart, ChartId};
use glam::DVec3;
use surfplot_render::{CameraState, Color, MeshFlags, MeshStyle, SurfaceGrid};

pub const X_AXIS_ID: ChartId = -1;
pub const Y_AXIS_ID: ChartId = -2;
pub const Z_AXIS_ID: ChartId = -3;

/// The x, y and z axis charts, in that order.
pub fn axis_charts(bound: f64, camera: CameraState, line_width: f32) -> [Chart; 3] {
    let axis = |id: ChartId, direction: DVec3, color: Color| {
        Chart::from_grid(
            id,
            SurfaceGrid::segment(-direction * bound, direction * bound),
            MeshStyle::new(color, MeshFlags::LINES).with_line_width(line_width),
            camera,
        )
    };

    [
        axis(X_AXIS_ID, DVec3::X, Color::RED),
        axis(Y_AXIS_ID, DVec3::Y, Color::GREEN),
        axis(Z_AXIS_ID, DVec3::Z, Color::BLUE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_geometry() {
        let [x, y, z] = axis_charts(1e10, CameraState::IDENTITY, 1.0);
        assert_eq!(x.id(), X_AXIS_ID);
        assert_eq!(x.grid().point(0, 0), Some(DVec3::new(-1e10, 0.0, 0.0)));
        assert_eq!(y.grid().point(1, 0), Some(DVec3::new(0.0, 1e10, 0.0)));
        assert_eq!(z.grid().point(1, 0), Some(DVec3::new(0.0, 0.0, 1e10)));
        for chart in [&x, &y, &z] {
            assert_eq!(chart.grid().invalid_count(), 0);
        }
    }
}
