//! Test utilities for surfplot.
//!
//! - [`ScriptedInput`]: replays a fixed list of input events frame by frame
//! - [`functions`]: ready-made chart functions
//! - [`presented_edges`]: line segments of the last presented frame, sorted

use glam::Vec2;
use std::collections::VecDeque;
use surfplot_render::{Color, RecordingSurface};
use surfplot_scene::{InputEvent, InputSource};

/// Input source that hands out one scripted batch of events per frame.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events of the next frame.
    pub fn frame(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    /// Queue a frame with no events.
    pub fn idle(self) -> Self {
        self.frame(Vec::new())
    }

    pub fn remaining_frames(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        if let Some(frame) = self.frames.pop_front() {
            events.extend(frame);
        }
    }
}

/// Line segments of the presented frame drawn in `color`, sorted.
pub fn presented_edges(surface: &RecordingSurface, color: Color) -> Vec<(Vec2, Vec2)> {
    let mut edges: Vec<_> = surface
        .presented_lines()
        .filter(|(_, _, c)| *c == color)
        .map(|(a, b, _)| (a, b))
        .collect();
    edges.sort_by(|a, b| {
        [a.0.x, a.0.y, a.1.x, a.1.y]
            .partial_cmp(&[b.0.x, b.0.y, b.1.x, b.1.y])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    edges
}

pub mod functions {
    //! Chart functions used across tests.

    use surfplot_scene::{ChartFunction, EvalError};

    pub fn sum() -> ChartFunction {
        ChartFunction::infallible("x+y", |x, y| x + y)
    }

    pub fn difference() -> ChartFunction {
        ChartFunction::infallible("x-y", |x, y| x - y)
    }

    /// `x / y`, undefined wherever `y == 0`.
    pub fn ratio() -> ChartFunction {
        ChartFunction::new("x/y", |x, y| {
            if y == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(x / y)
            }
        })
    }

    /// `sin(acos(sqrt(x^2 + y^2)))`, undefined outside the unit disc.
    pub fn dome() -> ChartFunction {
        ChartFunction::new("sin(arccos((x^2+y^2)^0.5))", |x, y| {
            let r = (x * x + y * y).sqrt();
            if r > 1.0 {
                Err(EvalError::Domain)
            } else {
                Ok(r.acos().sin())
            }
        })
    }
}
