//! Configuration for the surfplot viewer.

use std::time::Duration;

/// Tunables for sampling, camera input and the render loop.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterConfig {
    /// Sampled cells whose magnitude exceeds this are treated as undefined.
    /// Also the half-length of the axis reference lines.
    pub infinity_bound: f64,
    /// Upper bound on the render loop rate.
    pub target_fps: u32,
    /// Pixels of mouse drag per radian of rotation.
    pub rotation_coefficient: f64,
    /// Pixels of mouse drag per screen unit of panning.
    pub moving_coefficient: f64,
    /// Zoom change per wheel notch.
    pub zoom_step: f64,
    /// Clear color as 8-bit RGB.
    pub background: [u8; 3],
    /// Initial window size in pixels, used to centre the origin.
    pub window_size: (u32, u32),
    /// Radius of vertex markers.
    pub point_radius: f32,
    /// Width of mesh edges.
    pub line_width: f32,
    /// Commands taken from the control channel in a single frame. At least
    /// one command is always taken, so `stop` is never starved.
    pub max_commands_per_frame: usize,
    /// Largest sample count accepted on either grid axis.
    pub max_samples_per_axis: usize,
    /// Largest vertex count (`rows * cols`) accepted for one chart.
    pub max_vertices: usize,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        PlotterConfig {
            infinity_bound: 1e10,
            target_fps: 60,
            rotation_coefficient: 200.0,
            moving_coefficient: 1.0,
            zoom_step: 0.05,
            background: [0, 0, 0],
            window_size: (900, 980),
            point_radius: 3.0,
            line_width: 1.0,
            max_commands_per_frame: 64,
            max_samples_per_axis: 4096,
            max_vertices: 65_536,
        }
    }
}

impl PlotterConfig {
    pub fn with_infinity_bound(mut self, bound: f64) -> Self {
        self.infinity_bound = bound;
        self
    }

    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Values below one are raised to one.
    pub fn with_max_commands_per_frame(mut self, count: usize) -> Self {
        self.max_commands_per_frame = count.max(1);
        self
    }

    pub fn with_max_samples_per_axis(mut self, count: usize) -> Self {
        self.max_samples_per_axis = count;
        self
    }

    pub fn with_max_vertices(mut self, count: usize) -> Self {
        self.max_vertices = count;
        self
    }

    /// Duration of one frame at [`Self::target_fps`]. A rate of zero means unbounded.
    pub fn frame_budget(&self) -> Duration {
        if self.target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / self.target_fps as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        let config = PlotterConfig::default();
        let budget = config.frame_budget();
        assert!(budget > Duration::from_millis(16) && budget < Duration::from_millis(17));
        assert_eq!(config.with_target_fps(0).frame_budget(), Duration::ZERO);
    }

    #[test]
    fn test_builder_setters() {
        let config = PlotterConfig::default()
            .with_window_size(640, 480)
            .with_infinity_bound(1e6)
            .with_max_commands_per_frame(1);
        assert_eq!(config.window_size, (640, 480));
        assert_eq!(config.infinity_bound, 1e6);
        assert_eq!(config.max_commands_per_frame, 1);
    }

    #[test]
    fn test_command_limit_never_zero() {
        let config = PlotterConfig::default().with_max_commands_per_frame(0);
        assert_eq!(config.max_commands_per_frame, 1);
    }
}
