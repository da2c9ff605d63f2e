//! Chart definitions and live charts.

use crate::error::SampleResult;
use crate::sampler::{ChartFunction, GridSpec, HeightField, Sampler};
use surfplot_render::{
    CameraState, Color, DrawStats, DrawSurface, MeshFlags, MeshRenderer, MeshStyle, SurfaceGrid,
};

/// Chart identity. Non-negative ids belong to user charts; ids `<= -1` are
/// reserved for the permanent axis charts.
pub type ChartId = i64;

/// Whether `id` is reserved for an axis chart.
#[inline]
pub fn is_reserved_id(id: ChartId) -> bool {
    id <= -1
}

/// Everything needed to (re)build a user chart.
#[derive(Debug, Clone)]
pub struct ChartDefinition {
    pub function: ChartFunction,
    pub grid: GridSpec,
    pub scale: f64,
    pub color: Color,
    pub show_points: bool,
    pub show_lines: bool,
}

impl ChartDefinition {
    /// Definition with unit scale, white lines and no markers.
    pub fn new(function: ChartFunction, grid: GridSpec) -> Self {
        Self {
            function,
            grid,
            scale: 1.0,
            color: Color::WHITE,
            show_points: false,
            show_lines: true,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    pub fn with_lines(mut self, show_lines: bool) -> Self {
        self.show_lines = show_lines;
        self
    }

    pub fn flags(&self) -> MeshFlags {
        MeshFlags::from_toggles(self.show_points, self.show_lines)
    }
}

/// A chart tracked by the scene: materialized geometry plus the camera
/// parameters last applied to it.
#[derive(Debug, Clone)]
pub struct Chart {
    id: ChartId,
    field: HeightField,
    grid: SurfaceGrid,
    style: MeshStyle,
    camera: CameraState,
}

impl Chart {
    /// A chart with no geometry yet.
    pub fn new(id: ChartId, style: MeshStyle, camera: CameraState) -> Self {
        Self {
            id,
            field: HeightField::empty(),
            grid: SurfaceGrid::empty(),
            style,
            camera,
        }
    }

    /// A chart over an already materialized grid, with no sampled field.
    pub fn from_grid(id: ChartId, grid: SurfaceGrid, style: MeshStyle, camera: CameraState) -> Self {
        Self {
            grid,
            ..Self::new(id, style, camera)
        }
    }

    pub fn id(&self) -> ChartId {
        self.id
    }

    pub fn field(&self) -> &HeightField {
        &self.field
    }

    pub fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    pub fn style(&self) -> &MeshStyle {
        &self.style
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn set_camera(&mut self, camera: CameraState) {
        self.camera = camera;
    }

    /// Resample from `definition` and swap the new geometry in.
    ///
    /// The new field and grid are complete before anything is replaced. On
    /// failure the chart is left with empty geometry.
    pub fn rebuild(&mut self, sampler: &Sampler, definition: &ChartDefinition) -> SampleResult<()> {
        self.style.color = definition.color;
        self.style.flags = definition.flags();

        match sampler.sample(&definition.function, &definition.grid, definition.scale) {
            Ok(field) => {
                self.grid = field.to_grid();
                self.field = field;
                Ok(())
            }
            Err(e) => {
                self.field = HeightField::empty();
                self.grid = SurfaceGrid::empty();
                Err(e)
            }
        }
    }

    /// Draw with the cached camera.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        renderer: &mut MeshRenderer,
        surface: &mut S,
    ) -> DrawStats {
        renderer.render(&self.grid, &self.camera, &self.style, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(text: &str, f: fn(f64, f64) -> f64) -> ChartDefinition {
        ChartDefinition::new(
            ChartFunction::infallible(text, f),
            GridSpec::square(-10.0, 10.0, 10.0),
        )
    }

    #[test]
    fn test_reserved_ids() {
        assert!(is_reserved_id(-1));
        assert!(is_reserved_id(-3));
        assert!(!is_reserved_id(0));
    }

    #[test]
    fn test_rebuild_replaces_geometry_and_style() {
        let sampler = Sampler::default();
        let mut chart = Chart::new(0, MeshStyle::default(), CameraState::IDENTITY);
        assert!(chart.is_empty());

        chart
            .rebuild(&sampler, &definition("x+y", |x, y| x + y))
            .unwrap();
        assert_eq!(chart.grid().len(), 9);
        assert_eq!(chart.field().height(2, 2), Some(20.0));

        let redefined = definition("x-y", |x, y| x - y)
            .with_color((255, 0, 0))
            .with_points(true);
        chart.rebuild(&sampler, &redefined).unwrap();
        assert_eq!(chart.field().height(2, 2), Some(0.0));
        assert_eq!(chart.style().color, Color::RED);
        assert_eq!(chart.style().flags, MeshFlags::all());
    }

    #[test]
    fn test_failed_rebuild_empties_chart() {
        let sampler = Sampler::default();
        let mut chart = Chart::new(1, MeshStyle::default(), CameraState::IDENTITY);
        chart
            .rebuild(&sampler, &definition("x", |x, _| x))
            .unwrap();

        let mut bad = definition("x", |x, _| x);
        bad.grid.x_step = 0.0;
        assert!(chart.rebuild(&sampler, &bad).is_err());
        assert!(chart.is_empty());
        assert!(chart.field().is_empty());
    }
}
