//! Control channel from the editing surface to the render loop.
//!
//! An ordered, unbounded queue built on `std::sync::mpsc`. The editing side
//! pushes [`Command`]s through a [`ControlSender`]; the render loop polls its
//! [`ControlReceiver`] without blocking once per frame.

use crate::chart::{ChartDefinition, ChartId};
use crate::error::ControlError;
use crate::sampler::{ChartFunction, GridSpec};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use surfplot_render::Color;

/// A chart-lifecycle command.
#[derive(Debug, Clone)]
pub enum Command {
    /// Create or replace a chart.
    ShowChart {
        id: ChartId,
        definition: ChartDefinition,
    },
    /// Drop a chart if it exists.
    RemoveChart { id: ChartId },
    /// Ask the render loop to exit.
    Stop,
}

impl Command {
    /// Build a `ShowChart` from the positional message fields.
    #[allow(clippy::too_many_arguments)]
    pub fn show_chart(
        id: ChartId,
        function: ChartFunction,
        x_from: f64,
        x_to: f64,
        y_from: f64,
        y_to: f64,
        x_step: f64,
        y_step: f64,
        scale: f64,
        color: (u8, u8, u8),
        show_points: bool,
        show_lines: bool,
    ) -> Self {
        let definition =
            ChartDefinition::new(function, GridSpec::new(x_from, x_to, y_from, y_to, x_step, y_step))
                .with_scale(scale)
                .with_color(Color::from(color))
                .with_points(show_points)
                .with_lines(show_lines);
        Command::ShowChart { id, definition }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::ShowChart { .. } => "show_chart",
            Command::RemoveChart { .. } => "remove_chart",
            Command::Stop => "stop",
        }
    }
}

/// Create a connected sender/receiver pair.
pub fn channel() -> (ControlSender, ControlReceiver) {
    let (tx, rx) = mpsc::channel();
    (
        ControlSender { tx },
        ControlReceiver {
            rx,
            disconnected: false,
        },
    )
}

/// Producer half, held by the editing surface.
#[derive(Debug, Clone)]
pub struct ControlSender {
    tx: Sender<Command>,
}

impl ControlSender {
    pub fn send(&self, command: Command) -> Result<(), ControlError> {
        self.tx.send(command).map_err(|_| ControlError::Disconnected)
    }

    pub fn show_chart(&self, id: ChartId, definition: ChartDefinition) -> Result<(), ControlError> {
        self.send(Command::ShowChart { id, definition })
    }

    pub fn remove_chart(&self, id: ChartId) -> Result<(), ControlError> {
        self.send(Command::RemoveChart { id })
    }

    pub fn stop(&self) -> Result<(), ControlError> {
        self.send(Command::Stop)
    }
}

/// Consumer half, owned by the render loop.
#[derive(Debug)]
pub struct ControlReceiver {
    rx: Receiver<Command>,
    disconnected: bool,
}

impl ControlReceiver {
    /// Next queued command, without blocking.
    ///
    /// A vanished editing surface is not an error: the queue just stays empty.
    pub fn try_next(&mut self) -> Option<Command> {
        match self.rx.try_recv() {
            Ok(command) => Some(command),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.disconnected {
                    tracing::info!("editing surface disconnected from the control channel");
                    self.disconnected = true;
                }
                None
            }
        }
    }

    /// Whether every sender has been dropped and the queue is drained.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let (tx, mut rx) = channel();
        for id in 0..5 {
            tx.remove_chart(id).unwrap();
        }
        tx.stop().unwrap();

        for expected in 0..5 {
            match rx.try_next() {
                Some(Command::RemoveChart { id }) => assert_eq!(id, expected),
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!(matches!(rx.try_next(), Some(Command::Stop)));
        assert!(rx.try_next().is_none());
    }

    #[test]
    fn test_disconnect_is_quiet() {
        let (tx, mut rx) = channel();
        tx.remove_chart(1).unwrap();
        drop(tx);

        assert!(rx.try_next().is_some());
        assert!(rx.try_next().is_none());
        assert!(rx.is_disconnected());
        assert!(rx.try_next().is_none());
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (tx, rx) = channel();
        drop(rx);
        assert_eq!(tx.stop(), Err(ControlError::Disconnected));
    }

    #[test]
    fn test_positional_show_chart() {
        let f = ChartFunction::infallible("x*y/10", |x, y| x * y / 10.0);
        let command =
            Command::show_chart(3, f, -100.0, 100.0, -50.0, 50.0, 5.0, 2.5, 2.0, (0, 255, 0), true, false);
        match command {
            Command::ShowChart { id, definition } => {
                assert_eq!(id, 3);
                assert_eq!(definition.grid, GridSpec::new(-100.0, 100.0, -50.0, 50.0, 5.0, 2.5));
                assert_eq!(definition.scale, 2.0);
                assert_eq!(definition.color, Color::GREEN);
                assert!(definition.show_points);
                assert!(!definition.show_lines);
            }
            other => panic!("unexpected {}", other.name()),
        }
    }
}
