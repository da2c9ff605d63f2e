//! Drawing surface abstraction.
//!
//! The viewer core never talks to a windowing or GPU backend directly. It
//! drives a [`DrawSurface`], which a backend implements with whatever
//! primitives it has. [`RecordingSurface`] is a headless implementation that
//! keeps the issued commands for inspection.

use crate::Color;
use glam::Vec2;

/// A 2D drawing target in device coordinates (y grows downward).
pub trait DrawSurface {
    /// Fill the whole target with `color`.
    fn clear(&mut self, color: Color);

    /// Draw a line segment from `start` to `end`.
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Flip the finished frame to the screen.
    fn present(&mut self);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn clear(&mut self, color: Color) {
        (**self).clear(color);
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32) {
        (**self).draw_line(start, end, color, width);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        (**self).fill_circle(center, radius, color);
    }

    fn present(&mut self) {
        (**self).present();
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for Box<S> {
    fn clear(&mut self, color: Color) {
        (**self).clear(color);
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32) {
        (**self).draw_line(start, end, color, width);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        (**self).fill_circle(center, radius, color);
    }

    fn present(&mut self) {
        (**self).present();
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line {
        start: Vec2,
        end: Vec2,
        color: Color,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Headless surface that records draw calls frame by frame.
///
/// `clear` starts a new frame and `present` publishes it, so
/// [`RecordingSurface::presented`] always holds one complete frame.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    background: Option<Color>,
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last `clear`.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Commands of the most recently presented frame.
    pub fn presented(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Background of the most recent `clear`.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Line segments of the presented frame as `(start, end, color)`.
    pub fn presented_lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.presented.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Line {
                start, end, color, ..
            } => Some((start, end, color)),
            DrawCommand::Circle { .. } => None,
        })
    }

    /// Circle centres of the presented frame.
    pub fn presented_circles(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.presented.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Circle { center, .. } => Some(center),
            DrawCommand::Line { .. } => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.background = Some(color);
        self.pending.clear();
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32) {
        self.pending.push(DrawCommand::Line {
            start,
            end,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.presented, &mut self.pending);
        self.pending.clear();
        self.frames_presented += 1;
    }
}
