//! Height-field sampling of user functions.
//!
//! A user function is evaluated on the rectangular grid spanned by two
//! coordinate axes. Cells whose evaluation fails, or whose scaled magnitude
//! exceeds the infinity bound, become undefined (`NaN`) instead of aborting
//! the rest of the grid.

use crate::error::{EvalError, GridAxis, SampleError, SampleResult};
use glam::DVec3;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use surfplot_core::PlotterConfig;
use surfplot_core::profiling::profile_function;
use surfplot_render::SurfaceGrid;

type SurfaceFn = dyn Fn(f64, f64) -> Result<f64, EvalError> + Send + Sync;

/// A callable `z = f(x, y)` supplied by an expression compiler.
///
/// The source text is kept for diagnostics only; the sampler never parses it.
///
/// ```
/// use surfplot_scene::ChartFunction;
///
/// let f = ChartFunction::infallible("x / y", |x, y| x / y);
/// assert_eq!(f.evaluate(4.0, 2.0), Ok(2.0));
/// assert!(f.evaluate(1.0, 0.0).is_err());
/// ```
#[derive(Clone)]
pub struct ChartFunction {
    text: Arc<str>,
    eval: Arc<SurfaceFn>,
}

impl ChartFunction {
    /// Wrap a function that reports its own failures.
    ///
    /// The sampler also treats a panic inside `f` as a failed cell.
    pub fn new<F>(text: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(f64, f64) -> Result<f64, EvalError> + Send + Sync + 'static,
    {
        Self {
            text: text.into(),
            eval: Arc::new(f),
        }
    }

    /// Wrap a plain float function; `NaN` results count as domain errors and
    /// infinite results as overflow.
    pub fn infallible<F>(text: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(text, move |x, y| {
            let z = f(x, y);
            if z.is_nan() {
                Err(EvalError::Domain)
            } else if z.is_infinite() {
                Err(EvalError::Overflow)
            } else {
                Ok(z)
            }
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn evaluate(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        (self.eval)(x, y)
    }

    /// Like [`Self::evaluate`], but a panic inside the function is caught
    /// and reported as [`EvalError::Panicked`].
    pub fn evaluate_guarded(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.evaluate(x, y)))
            .unwrap_or(Err(EvalError::Panicked))
    }
}

impl fmt::Debug for ChartFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChartFunction").field(&self.text).finish()
    }
}

/// Inclusive bounds and step sizes of a sample grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub x_from: f64,
    pub x_to: f64,
    pub y_from: f64,
    pub y_to: f64,
    pub x_step: f64,
    pub y_step: f64,
}

impl GridSpec {
    pub fn new(x_from: f64, x_to: f64, y_from: f64, y_to: f64, x_step: f64, y_step: f64) -> Self {
        Self {
            x_from,
            x_to,
            y_from,
            y_to,
            x_step,
            y_step,
        }
    }

    /// The same range and step on both axes.
    pub fn square(from: f64, to: f64, step: f64) -> Self {
        Self::new(from, to, from, to, step, step)
    }
}

/// A sampled function: two coordinate axes and a row-major height grid.
///
/// Row `i` corresponds to `x_axis[i]` and column `j` to `y_axis[j]`.
/// Heights are already multiplied by `scale`; undefined cells hold `NaN`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeightField {
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    heights: Vec<f64>,
    scale: f64,
}

impl HeightField {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rows(&self) -> usize {
        self.x_axis.len()
    }

    pub fn cols(&self) -> usize {
        self.y_axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Heights of row `i` (fixed x).
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let cols = self.cols();
        self.heights.get(i * cols..(i + 1) * cols)
    }

    /// Height at `(i, j)`, `None` when out of range or undefined.
    pub fn height(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.rows() || j >= self.cols() {
            return None;
        }
        let z = self.heights[i * self.cols() + j];
        (!z.is_nan()).then_some(z)
    }

    pub fn valid_count(&self) -> usize {
        self.heights.iter().filter(|z| !z.is_nan()).count()
    }

    /// Vertices in chart-local scaled coordinates `(x * scale, y * scale, z)`.
    pub fn to_grid(&self) -> SurfaceGrid {
        SurfaceGrid::from_fn(self.rows(), self.cols(), |i, j| {
            DVec3::new(
                self.x_axis[i] * self.scale,
                self.y_axis[j] * self.scale,
                self.heights[i * self.cols() + j],
            )
        })
    }
}

/// Evaluates chart functions over sample grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    infinity_bound: f64,
    max_samples_per_axis: usize,
    max_vertices: usize,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(&PlotterConfig::default())
    }
}

impl Sampler {
    pub fn new(config: &PlotterConfig) -> Self {
        Self {
            infinity_bound: config.infinity_bound,
            max_samples_per_axis: config.max_samples_per_axis,
            max_vertices: config.max_vertices,
        }
    }

    pub fn infinity_bound(&self) -> f64 {
        self.infinity_bound
    }

    /// Sample positions `begin + k * step` for `k in 0..round((end - begin) / step) + 1`.
    ///
    /// Positions are computed by multiplication, not repeated addition, so
    /// the end bound is reached without accumulated drift.
    pub fn axis(&self, axis: GridAxis, begin: f64, end: f64, step: f64) -> SampleResult<Vec<f64>> {
        for (name, value) in [("begin", begin), ("end", end), ("step", step)] {
            if !value.is_finite() {
                return Err(SampleError::NonFiniteParameter { name });
            }
        }
        if begin >= end {
            return Err(SampleError::InvertedBounds { axis, begin, end });
        }
        if step <= 0.0 {
            return Err(SampleError::NonPositiveStep { axis, step });
        }
        let range = end - begin;
        if step >= range {
            return Err(SampleError::StepExceedsRange { axis, step, range });
        }

        let count = (range / step).round() + 1.0;
        if count > self.max_samples_per_axis as f64 {
            return Err(SampleError::TooManySamples {
                axis,
                count,
                limit: self.max_samples_per_axis,
            });
        }

        Ok((0..count as usize).map(|k| begin + k as f64 * step).collect())
    }

    /// Evaluate `func` over the grid described by `spec`.
    ///
    /// A cell whose evaluation fails or panics becomes undefined; the rest of
    /// the grid is still sampled.
    pub fn sample(
        &self,
        func: &ChartFunction,
        spec: &GridSpec,
        scale: f64,
    ) -> SampleResult<HeightField> {
        profile_function!();

        if !scale.is_finite() {
            return Err(SampleError::NonFiniteParameter { name: "scale" });
        }
        let x_axis = self.axis(GridAxis::X, spec.x_from, spec.x_to, spec.x_step)?;
        let y_axis = self.axis(GridAxis::Y, spec.y_from, spec.y_to, spec.y_step)?;

        let vertices = x_axis.len() * y_axis.len();
        if vertices > self.max_vertices {
            return Err(SampleError::TooManyVertices {
                count: vertices,
                limit: self.max_vertices,
            });
        }

        let mut heights = Vec::with_capacity(vertices);
        let mut undefined = 0usize;
        for &x in &x_axis {
            for &y in &y_axis {
                let z = match func.evaluate_guarded(x, y) {
                    Ok(z) => z * scale,
                    Err(_) => f64::NAN,
                };
                if z.is_nan() || z.abs() > self.infinity_bound {
                    heights.push(f64::NAN);
                    undefined += 1;
                } else {
                    heights.push(z);
                }
            }
        }

        tracing::trace!(
            function = func.text(),
            rows = x_axis.len(),
            cols = y_axis.len(),
            undefined,
            "sampled height field"
        );

        Ok(HeightField {
            x_axis,
            y_axis,
            heights,
            scale,
        })
    }
}
