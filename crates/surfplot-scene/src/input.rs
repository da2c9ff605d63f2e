//! Direct-manipulation input.
//!
//! A windowing backend feeds [`InputEvent`]s through an [`InputSource`] once
//! per frame. [`InputController`] turns them into camera deltas:
//!
//! | gesture | effect |
//! |---|---|
//! | left drag | rotate |
//! | right drag | pan |
//! | wheel | zoom by one step per notch |
//! | resize | keep the origin centred |

use glam::{DVec3, Vec2};
use surfplot_core::PlotterConfig;
use surfplot_render::CameraDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A window input event, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseDown { button: MouseButton, position: Vec2 },
    MouseUp { button: MouseButton, position: Vec2 },
    MouseMotion { position: Vec2 },
    /// Wheel notches; positive scrolls up (zoom in).
    Wheel { notches: i32 },
    Resized { width: u32, height: u32 },
    /// The window was closed.
    Quit,
}

/// Supplier of per-frame input events.
pub trait InputSource {
    /// Append every event received since the previous call to `events`.
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);
}

/// Source that never produces events, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll_events(&mut self, _events: &mut Vec<InputEvent>) {}
}

/// What the render loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFlow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Idle,
    Rotating,
    Moving,
}

/// Maps mouse and window events to camera deltas.
#[derive(Debug, Clone)]
pub struct InputController {
    rotation_coefficient: f64,
    moving_coefficient: f64,
    zoom_step: f64,
    drag: Drag,
    last_position: Option<Vec2>,
    window_size: (u32, u32),
}

impl InputController {
    pub fn new(config: &PlotterConfig) -> Self {
        Self {
            rotation_coefficient: config.rotation_coefficient,
            moving_coefficient: config.moving_coefficient,
            zoom_step: config.zoom_step,
            drag: Drag::Idle,
            last_position: None,
            window_size: config.window_size,
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != Drag::Idle
    }

    /// Handle one event, appending any resulting deltas to `deltas`.
    pub fn handle(&mut self, event: &InputEvent, deltas: &mut Vec<CameraDelta>) -> InputFlow {
        match *event {
            InputEvent::MouseDown { button, position } => {
                match button {
                    MouseButton::Left => self.drag = Drag::Rotating,
                    MouseButton::Right => self.drag = Drag::Moving,
                    MouseButton::Middle => {}
                }
                self.last_position = Some(position);
            }
            InputEvent::MouseUp { .. } => {
                self.drag = Drag::Idle;
            }
            InputEvent::MouseMotion { position } => {
                if let Some(last) = self.last_position {
                    let last = last.as_dvec2();
                    let now = position.as_dvec2();
                    match self.drag {
                        Drag::Rotating => deltas.push(CameraDelta::Rotate {
                            horizontal: (last.x - now.x) / self.rotation_coefficient,
                            vertical: (last.y - now.y) / self.rotation_coefficient,
                        }),
                        Drag::Moving => deltas.push(CameraDelta::Translate(DVec3::new(
                            (now.x - last.x) / self.moving_coefficient,
                            0.0,
                            (now.y - last.y) / self.moving_coefficient,
                        ))),
                        Drag::Idle => {}
                    }
                }
                self.last_position = Some(position);
            }
            InputEvent::Wheel { notches } => {
                if notches != 0 {
                    deltas.push(CameraDelta::Zoom(notches as f64 * self.zoom_step));
                }
            }
            InputEvent::Resized { width, height } => {
                let (old_width, old_height) = self.window_size;
                let dx = (width / 2) as f64 - (old_width / 2) as f64;
                let dz = (height / 2) as f64 - (old_height / 2) as f64;
                deltas.push(CameraDelta::Translate(DVec3::new(dx, 0.0, dz)));
                self.window_size = (width, height);
            }
            InputEvent::Quit => return InputFlow::Quit,
        }
        InputFlow::Continue
    }
}
