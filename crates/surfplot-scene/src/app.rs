//! The render loop.
//!
//! [`Plotter`] is the single owner of the scene and camera. Each frame it
//! handles input, draws every chart, then takes the commands queued on the
//! control channel. Nothing else touches the scene, so no locking is needed.
//!
//! # Example
//!
//! ```
//! use surfplot_core::PlotterConfig;
//! use surfplot_render::RecordingSurface;
//! use surfplot_scene::{ChartDefinition, ChartFunction, ExitReason, GridSpec, NoInput, Plotter, control};
//!
//! let (tx, rx) = control::channel();
//! tx.show_chart(0, ChartDefinition::new(
//!     ChartFunction::infallible("x+y", |x, y| x + y),
//!     GridSpec::square(-10.0, 10.0, 10.0),
//! )).unwrap();
//! tx.stop().unwrap();
//!
//! let mut plotter = Plotter::new(PlotterConfig::default().with_target_fps(0), rx);
//! let reason = plotter.run(&mut RecordingSurface::new(), &mut NoInput);
//! assert_eq!(reason, ExitReason::Stopped);
//! ```

use crate::control::{Command, ControlReceiver, ControlSender};
use crate::input::{InputController, InputEvent, InputFlow, InputSource};
use crate::scene::Scene;
use crate::time::FramePacer;
use std::thread::JoinHandle;
use surfplot_core::PlotterConfig;
use surfplot_core::profiling::{self, profile_scope};
use surfplot_render::{CameraDelta, Color, DrawStats, DrawSurface};

/// Frames between two fps log lines.
const FPS_LOG_INTERVAL: u64 = 600;

/// Why the render loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// A `stop` command arrived.
    Stopped,
    /// The window was closed.
    WindowClosed,
}

/// Result of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue(DrawStats),
    Exit(ExitReason),
}

/// Owns the scene and drives it from input and the control channel.
#[derive(Debug)]
pub struct Plotter {
    config: PlotterConfig,
    scene: Scene,
    input: InputController,
    control: ControlReceiver,
    pacer: FramePacer,
    background: Color,
    events: Vec<InputEvent>,
    deltas: Vec<CameraDelta>,
}

impl Plotter {
    pub fn new(config: PlotterConfig, control: ControlReceiver) -> Self {
        let [r, g, b] = config.background;
        Self {
            scene: Scene::new(&config),
            input: InputController::new(&config),
            pacer: FramePacer::new(config.frame_budget()),
            background: Color::from_rgb_u8(r, g, b),
            control,
            config,
            events: Vec::new(),
            deltas: Vec::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    /// Run frames until a `stop` command or a window close.
    pub fn run<S, I>(&mut self, surface: &mut S, input: &mut I) -> ExitReason
    where
        S: DrawSurface + ?Sized,
        I: InputSource + ?Sized,
    {
        tracing::info!(fps = self.config.target_fps, "render loop started");

        let reason = loop {
            let time = self.pacer.tick();
            profiling::new_frame();

            match self.tick(surface, input) {
                FrameOutcome::Continue(stats) => {
                    tracing::trace!(frame = time.frame_count, lines = stats.lines, points = stats.points);
                }
                FrameOutcome::Exit(reason) => break reason,
            }

            if time.frame_count % FPS_LOG_INTERVAL == 0 {
                tracing::debug!(fps = self.pacer.fps(), charts = self.scene.len(), "frame rate");
            }
            self.pacer.wait_for_next_frame();
        };

        tracing::info!(?reason, "render loop stopped");
        reason
    }

    /// Run exactly one frame: input, draw, then control commands.
    pub fn tick<S, I>(&mut self, surface: &mut S, input: &mut I) -> FrameOutcome
    where
        S: DrawSurface + ?Sized,
        I: InputSource + ?Sized,
    {
        profile_scope!("plotter_tick");

        if self.handle_input(input) == InputFlow::Quit {
            return FrameOutcome::Exit(ExitReason::WindowClosed);
        }

        surface.clear(self.background);
        let stats = self.scene.render_all(surface);
        surface.present();

        match self.process_commands() {
            Some(reason) => FrameOutcome::Exit(reason),
            None => FrameOutcome::Continue(stats),
        }
    }

    fn handle_input<I: InputSource + ?Sized>(&mut self, input: &mut I) -> InputFlow {
        self.events.clear();
        input.poll_events(&mut self.events);

        let mut flow = InputFlow::Continue;
        for event in &self.events {
            if self.input.handle(event, &mut self.deltas) == InputFlow::Quit {
                flow = InputFlow::Quit;
                break;
            }
        }
        for delta in self.deltas.drain(..) {
            self.scene.apply_camera(delta);
        }
        flow
    }

    /// Apply the commands queued right now, up to the per-frame limit.
    fn process_commands(&mut self) -> Option<ExitReason> {
        for _ in 0..self.config.max_commands_per_frame.max(1) {
            let command = self.control.try_next()?;
            tracing::trace!(command = command.name(), "control command");

            match command {
                Command::ShowChart { id, definition } => {
                    if let Err(e) = self.scene.upsert(id, &definition) {
                        tracing::warn!(id, "show_chart: {}", e);
                    }
                }
                Command::RemoveChart { id } => {
                    self.scene.remove(id);
                }
                Command::Stop => return Some(ExitReason::Stopped),
            }
        }
        None
    }
}

/// Run an editing surface on its own named thread.
pub fn spawn_editor<F>(name: &str, sender: ControlSender, editor: F) -> std::io::Result<JoinHandle<()>>
where
    F: FnOnce(ControlSender) + Send + 'static,
{
    std::thread::Builder::new()
        .name(name.to_string())
        .spawn(move || editor(sender))
}
