//! Scene manager: the live chart set and the shared camera.

use crate::axis::axis_charts;
use crate::chart::{Chart, ChartDefinition, ChartId, is_reserved_id};
use crate::error::SceneError;
use crate::sampler::Sampler;
use indexmap::IndexMap;
use surfplot_core::PlotterConfig;
use surfplot_core::profiling::profile_function;
use surfplot_render::{
    CameraDelta, CameraState, DrawStats, DrawSurface, MeshRenderer, MeshStyle,
};

/// Owns every chart and the camera applied to all of them.
///
/// Charts render in insertion order; the axis charts are inserted first.
/// Replacing a chart keeps its position.
#[derive(Debug)]
pub struct Scene {
    charts: IndexMap<ChartId, Chart, ahash::RandomState>,
    camera: CameraState,
    sampler: Sampler,
    renderer: MeshRenderer,
    line_width: f32,
    point_radius: f32,
}

impl Scene {
    pub fn new(config: &PlotterConfig) -> Self {
        let (width, height) = config.window_size;
        let camera = CameraState::centered(width, height);

        let mut charts = IndexMap::with_hasher(ahash::RandomState::new());
        for axis in axis_charts(config.infinity_bound, camera, config.line_width) {
            charts.insert(axis.id(), axis);
        }

        Self {
            charts,
            camera,
            sampler: Sampler::new(config),
            renderer: MeshRenderer::new(),
            line_width: config.line_width,
            point_radius: config.point_radius,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.get(&id)
    }

    pub fn contains(&self, id: ChartId) -> bool {
        self.charts.contains_key(&id)
    }

    /// Number of charts including the axis charts.
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Number of user charts.
    pub fn user_chart_count(&self) -> usize {
        self.charts.keys().filter(|id| !is_reserved_id(**id)).count()
    }

    /// Chart ids in render order.
    pub fn ids(&self) -> impl Iterator<Item = ChartId> + '_ {
        self.charts.keys().copied()
    }

    /// Create chart `id` or replace its geometry, then give it the current camera.
    ///
    /// When the definition cannot be sampled the chart is still tracked, with
    /// empty geometry, and the failure is returned.
    pub fn upsert(&mut self, id: ChartId, definition: &ChartDefinition) -> Result<(), SceneError> {
        profile_function!();

        if is_reserved_id(id) {
            return Err(SceneError::ReservedId(id));
        }

        let (camera, line_width, point_radius) = (self.camera, self.line_width, self.point_radius);
        let chart = self.charts.entry(id).or_insert_with(|| {
            tracing::debug!(id, "creating chart");
            let style = MeshStyle::new(definition.color, definition.flags())
                .with_line_width(line_width)
                .with_point_radius(point_radius);
            Chart::new(id, style, camera)
        });

        let result = chart.rebuild(&self.sampler, definition);
        chart.set_camera(camera);

        match result {
            Ok(()) => {
                tracing::debug!(
                    id,
                    function = definition.function.text(),
                    vertices = chart.grid().len(),
                    "chart geometry updated"
                );
                Ok(())
            }
            Err(source) => Err(SceneError::Sample { id, source }),
        }
    }

    /// Drop chart `id`. Absent and reserved ids are a no-op; returns whether
    /// a chart was removed.
    pub fn remove(&mut self, id: ChartId) -> bool {
        if is_reserved_id(id) {
            tracing::warn!(id, "ignoring removal of an axis chart");
            return false;
        }
        let removed = self.charts.shift_remove(&id).is_some();
        if removed {
            tracing::debug!(id, "removed chart");
        }
        removed
    }

    /// Apply a camera delta and push the resulting camera to every chart.
    ///
    /// Returns `false` when the delta was dropped to keep the camera valid.
    pub fn apply_camera(&mut self, delta: CameraDelta) -> bool {
        if !self.camera.apply(delta) {
            return false;
        }
        let camera = self.camera;
        for chart in self.charts.values_mut() {
            chart.set_camera(camera);
        }
        true
    }

    /// Draw every chart with its cached camera.
    pub fn render_all<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> DrawStats {
        profile_function!();

        let mut stats = DrawStats::default();
        for chart in self.charts.values() {
            stats += chart.render(&mut self.renderer, surface);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{X_AXIS_ID, Y_AXIS_ID, Z_AXIS_ID};
    use crate::sampler::{ChartFunction, GridSpec};
    use glam::DVec3;
    use surfplot_render::RecordingSurface;

    fn sum_chart() -> ChartDefinition {
        ChartDefinition::new(
            ChartFunction::infallible("x+y", |x, y| x + y),
            GridSpec::square(-10.0, 10.0, 10.0),
        )
    }

    #[test]
    fn test_new_scene_has_axis_charts() {
        let scene = Scene::new(&PlotterConfig::default());
        assert_eq!(scene.ids().collect::<Vec<_>>(), vec![X_AXIS_ID, Y_AXIS_ID, Z_AXIS_ID]);
        assert_eq!(scene.user_chart_count(), 0);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut scene = Scene::new(&PlotterConfig::default());
        scene.upsert(4, &sum_chart()).unwrap();
        let first = scene.chart(4).unwrap().grid().clone();
        scene.upsert(4, &sum_chart()).unwrap();
        scene.upsert(4, &sum_chart()).unwrap();

        assert_eq!(scene.len(), 4);
        assert_eq!(scene.chart(4).unwrap().grid(), &first);
    }

    #[test]
    fn test_upsert_keeps_render_position() {
        let mut scene = Scene::new(&PlotterConfig::default());
        scene.upsert(1, &sum_chart()).unwrap();
        scene.upsert(2, &sum_chart()).unwrap();
        scene.upsert(1, &sum_chart().with_scale(2.0)).unwrap();
        let ids: Vec<_> = scene.ids().collect();
        assert_eq!(&ids[3..], &[1, 2]);
    }

    #[test]
    fn test_reserved_ids_rejected() {
        let mut scene = Scene::new(&PlotterConfig::default());
        assert_eq!(scene.upsert(-1, &sum_chart()), Err(SceneError::ReservedId(-1)));
        assert!(!scene.remove(X_AXIS_ID));
        assert!(scene.contains(X_AXIS_ID));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut scene = Scene::new(&PlotterConfig::default());
        let before = scene.len();
        assert!(!scene.remove(5));
        assert_eq!(scene.len(), before);
    }

    #[test]
    fn test_bad_definition_tracks_empty_chart() {
        let mut scene = Scene::new(&PlotterConfig::default());
        let mut bad = sum_chart();
        bad.grid.y_from = 20.0;
        let err = scene.upsert(7, &bad).unwrap_err();
        assert!(matches!(err, SceneError::Sample { id: 7, .. }));
        assert!(scene.chart(7).unwrap().is_empty());

        let mut surface = RecordingSurface::new();
        let stats = scene.render_all(&mut surface);
        // only the three axis lines
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn test_camera_propagates_to_all_charts() {
        let mut scene = Scene::new(&PlotterConfig::default());
        scene.upsert(0, &sum_chart()).unwrap();
        assert!(scene.apply_camera(CameraDelta::Rotate {
            horizontal: 0.5,
            vertical: 0.25,
        }));
        assert!(scene.apply_camera(CameraDelta::Zoom(0.05)));

        let expected = *scene.camera();
        for id in scene.ids().collect::<Vec<_>>() {
            assert_eq!(scene.chart(id).unwrap().camera(), &expected);
        }
    }

    #[test]
    fn test_new_chart_starts_with_current_camera() {
        let mut scene = Scene::new(&PlotterConfig::default());
        scene.apply_camera(CameraDelta::Translate(DVec3::new(30.0, 0.0, -12.0)));
        scene.apply_camera(CameraDelta::Zoom(1.0));
        scene.upsert(9, &sum_chart()).unwrap();
        assert_eq!(scene.chart(9).unwrap().camera(), scene.camera());
    }

    #[test]
    fn test_dropped_delta_reports_false() {
        let mut scene = Scene::new(&PlotterConfig::default());
        assert!(!scene.apply_camera(CameraDelta::Zoom(-1.0)));
        assert_eq!(scene.camera().zoom(), 1.0);
    }
}
