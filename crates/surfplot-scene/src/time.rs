use std::time::{Duration, Instant};

use surfplot_core::profiling::profile_function;

/// Frame timing information for the render loop.
#[derive(Debug, Clone)]
pub struct FrameTime {
    /// Time elapsed since the last frame
    pub delta: Duration,
    /// Total time elapsed since the loop started
    pub elapsed: Duration,
    /// Total number of frames started
    pub frame_count: u64,
}

impl FrameTime {
    pub fn new() -> Self {
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Returns delta time in seconds (f32)
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-rate frame clock.
///
/// `tick` starts a frame; `wait_for_next_frame` sleeps out whatever is left
/// of the frame budget. A zero budget never sleeps.
#[derive(Debug)]
pub struct FramePacer {
    budget: Duration,
    start_time: Instant,
    last_frame_time: Instant,
    frame_count: u64,
    fps: f64,
}

/// Weight of the newest frame in the smoothed rate.
const FPS_SMOOTHING: f64 = 0.1;

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        let now = Instant::now();
        Self {
            budget,
            start_time: now,
            last_frame_time: now,
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn tick(&mut self) -> FrameTime {
        profile_function!();
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time);
        let elapsed = now.duration_since(self.start_time);

        self.last_frame_time = now;
        self.frame_count += 1;

        let seconds = delta.as_secs_f64();
        if seconds > 0.0 {
            let instant_fps = 1.0 / seconds;
            self.fps = if self.fps == 0.0 {
                instant_fps
            } else {
                self.fps + (instant_fps - self.fps) * FPS_SMOOTHING
            };
        }

        FrameTime {
            delta,
            elapsed,
            frame_count: self.frame_count,
        }
    }

    /// Time left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.last_frame_time.elapsed())
    }

    pub fn wait_for_next_frame(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_frames() {
        let mut pacer = FramePacer::new(Duration::ZERO);
        let first = pacer.tick();
        let second = pacer.tick();
        assert_eq!(first.frame_count, 1);
        assert_eq!(second.frame_count, 2);
        assert!(second.elapsed >= first.elapsed);
    }

    #[test]
    fn test_zero_budget_never_waits() {
        let mut pacer = FramePacer::new(Duration::ZERO);
        pacer.tick();
        assert_eq!(pacer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_wait_fills_budget() {
        let budget = Duration::from_millis(20);
        let mut pacer = FramePacer::new(budget);
        pacer.tick();
        let started = Instant::now();
        pacer.wait_for_next_frame();
        assert!(started.elapsed() + Duration::from_millis(2) >= budget);
    }
}
