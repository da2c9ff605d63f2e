//! Surfplot - interactive 3D surface plotting
//!
//! Samples user functions `z = f(x, y)` on rectangular grids and draws them
//! as rotatable, zoomable wireframes. Undefined cells (domain errors,
//! division by zero, overflow) show up as gaps in the mesh.
//!
//! - **Sampling**: [`scene::Sampler`] builds height fields
//! - **Transform**: [`render::ViewTransform`] maps grids to device space
//! - **Rendering**: [`render::MeshRenderer`] draws gap-aware wireframes
//! - **Scene**: [`scene::Scene`] owns charts and the shared camera
//! - **Control**: [`scene::control`] carries commands from an editing surface
//!
//! # Quick Start
//!
//! ```
//! use surfplot::prelude::*;
//!
//! let (tx, rx) = control::channel();
//! let editor = spawn_editor("editor", tx, |tx| {
//!     let wave = ChartFunction::infallible("sin(x/50+y/50)", |x, y| (x / 50.0 + y / 50.0).sin() * 50.0);
//!     tx.show_chart(0, ChartDefinition::new(wave, GridSpec::square(-300.0, 300.0, 20.0)))
//!         .unwrap();
//!     tx.stop().unwrap();
//! })
//! .unwrap();
//!
//! let mut plotter = Plotter::new(PlotterConfig::default(), rx);
//! plotter.run(&mut RecordingSurface::new(), &mut NoInput);
//! editor.join().unwrap();
//! ```

pub use surfplot_core as core;
pub use surfplot_core::math;
pub use surfplot_render as render;
pub use surfplot_scene as scene;

/// Start logging with the default filter.
pub fn init_logging() {
    surfplot_core::logging::init();
    tracing::debug!("surfplot {}", env!("CARGO_PKG_VERSION"));
}

pub mod prelude {
    pub use surfplot_core::PlotterConfig;
    pub use surfplot_render::{
        CameraDelta, CameraState, Color, DrawStats, DrawSurface, MeshFlags, MeshStyle,
        RecordingSurface,
    };
    pub use surfplot_scene::{
        ChartDefinition, ChartFunction, ChartId, Command, ControlReceiver, ControlSender,
        EvalError, ExitReason, GridSpec, InputEvent, InputSource, MouseButton, NoInput, Plotter,
        Scene, control, spawn_editor,
    };
}
