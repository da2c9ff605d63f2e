//! Surfplot Scene
//!
//! The live side of the viewer:
//! - [`Sampler`]: evaluates `z = f(x, y)` into a [`HeightField`]
//! - [`Scene`]: the chart set, the axis charts and the shared camera
//! - [`control`]: the ordered command queue from the editing surface
//! - [`Plotter`]: the fixed-rate render loop tying it together

mod app;
mod axis;
mod chart;
pub mod control;
mod error;
mod input;
mod sampler;
mod scene;
mod time;

pub use app::*;
pub use axis::*;
pub use chart::*;
pub use control::{Command, ControlReceiver, ControlSender};
pub use error::*;
pub use input::*;
pub use sampler::*;
pub use scene::*;
pub use time::*;
