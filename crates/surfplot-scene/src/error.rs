//! Error types for sampling, scene updates and the control channel.

use crate::chart::ChartId;
use std::fmt;

/// One axis of the sample grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    X,
    Y,
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAxis::X => write!(f, "x"),
            GridAxis::Y => write!(f, "y"),
        }
    }
}

/// Why a single cell of a user function could not be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Argument outside the function's domain (e.g. `acos(2)`).
    Domain,
    /// Division by zero.
    DivisionByZero,
    /// Result too large to represent.
    Overflow,
    /// The function panicked.
    Panicked,
    /// Any other failure reported by the function.
    Other(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Domain => write!(f, "argument outside the function domain"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::Overflow => write!(f, "arithmetic overflow"),
            EvalError::Panicked => write!(f, "function panicked"),
            EvalError::Other(msg) => write!(f, "evaluation failed: {}", msg),
        }
    }
}

impl std::error::Error for EvalError {}

/// Why a sample grid could not be built.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// `begin >= end` on an axis.
    InvertedBounds { axis: GridAxis, begin: f64, end: f64 },
    /// Step is zero or negative.
    NonPositiveStep { axis: GridAxis, step: f64 },
    /// Step is not smaller than the axis range.
    StepExceedsRange { axis: GridAxis, step: f64, range: f64 },
    /// A bound, step or the scale is NaN or infinite.
    NonFiniteParameter { name: &'static str },
    /// The axis would need more samples than the configured limit.
    TooManySamples {
        axis: GridAxis,
        count: f64,
        limit: usize,
    },
    /// The whole grid would exceed the configured vertex limit.
    TooManyVertices { count: usize, limit: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::InvertedBounds { axis, begin, end } => {
                write!(f, "{} bounds are inverted or empty: [{}, {}]", axis, begin, end)
            }
            SampleError::NonPositiveStep { axis, step } => {
                write!(f, "{} step must be positive, got {}", axis, step)
            }
            SampleError::StepExceedsRange { axis, step, range } => write!(
                f,
                "{} step {} is not smaller than the range {}",
                axis, step, range
            ),
            SampleError::NonFiniteParameter { name } => {
                write!(f, "parameter '{}' is not a finite number", name)
            }
            SampleError::TooManySamples { axis, count, limit } => write!(
                f,
                "{} axis needs {} samples, limit is {}",
                axis, count, limit
            ),
            SampleError::TooManyVertices { count, limit } => {
                write!(f, "grid needs {} vertices, limit is {}", count, limit)
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Result type for sampling operations.
pub type SampleResult<T> = Result<T, SampleError>;

/// Errors reported by [`crate::Scene`] operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Ids `<= -1` belong to the permanent axis charts.
    ReservedId(ChartId),
    /// The chart exists but its definition could not be sampled; it renders empty.
    Sample { id: ChartId, source: SampleError },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::ReservedId(id) => write!(f, "chart id {} is reserved for axis charts", id),
            SceneError::Sample { id, source } => {
                write!(f, "chart {} has no geometry: {}", id, source)
            }
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Sample { source, .. } => Some(source),
            SceneError::ReservedId(_) => None,
        }
    }
}

/// Errors on the sending side of the control channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// The render loop has exited and dropped its receiver.
    Disconnected,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::Disconnected => write!(f, "render loop is no longer receiving commands"),
        }
    }
}

impl std::error::Error for ControlError {}
