//! Camera state for the surface viewer.
//!
//! The camera is a rotation pair, a uniform zoom factor and a screen-space
//! translation. It is changed only through deltas, and every delta that would
//! break an invariant is dropped silently:
//!
//! - the zoom factor stays strictly positive,
//! - the vertical angle stays within `[-π/2, π/2]`.
//!
//! # Example
//!
//! ```
//! use surfplot_render::{CameraDelta, CameraState};
//!
//! let mut camera = CameraState::centered(900, 980);
//! camera.apply(CameraDelta::Zoom(-5.0)); // would reach zero, dropped
//! assert_eq!(camera.zoom(), 1.0);
//! ```

use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Bound on the absolute vertical angle.
pub const VERTICAL_ANGLE_LIMIT: f64 = FRAC_PI_2;

/// A relative camera change produced by user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraDelta {
    /// Rotation in radians around the height axis and the horizontal axis.
    Rotate { horizontal: f64, vertical: f64 },
    /// Additive change of the zoom factor.
    Zoom(f64),
    /// Translation in screen units.
    Translate(DVec3),
}

/// Absolute camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Rotation around the height axis, kept in `[0, 2π)`.
    horizontal_angle: f64,
    /// Tilt, kept in `[-π/2, π/2]`.
    vertical_angle: f64,
    /// Uniform scale, always `> 0`.
    zoom: f64,
    /// Screen-space offset `(x, y, z)`; `x` and `z` map to device x and y.
    translation: DVec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraState {
    /// No rotation, unit zoom, no translation.
    pub const IDENTITY: Self = Self {
        horizontal_angle: 0.0,
        vertical_angle: 0.0,
        zoom: 1.0,
        translation: DVec3::ZERO,
    };

    /// Camera that puts the origin in the middle of a `width` x `height` window.
    pub fn centered(width: u32, height: u32) -> Self {
        Self {
            translation: DVec3::new((width / 2) as f64, 0.0, (height / 2) as f64),
            ..Self::IDENTITY
        }
    }

    pub fn horizontal_angle(&self) -> f64 {
        self.horizontal_angle
    }

    pub fn vertical_angle(&self) -> f64 {
        self.vertical_angle
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn translation(&self) -> DVec3 {
        self.translation
    }

    /// Apply a delta. Returns `true` if any parameter changed.
    pub fn apply(&mut self, delta: CameraDelta) -> bool {
        match delta {
            CameraDelta::Rotate {
                horizontal,
                vertical,
            } => self.rotate(horizontal, vertical),
            CameraDelta::Zoom(d_zoom) => self.zoom_by(d_zoom),
            CameraDelta::Translate(offset) => self.translate(offset),
        }
    }

    /// Rotate by the given angles.
    ///
    /// A vertical delta that would leave `[-π/2, π/2]` is dropped for this
    /// call while the horizontal part still applies.
    pub fn rotate(&mut self, d_horizontal: f64, d_vertical: f64) -> bool {
        let mut changed = false;

        if d_horizontal.is_finite() && d_horizontal != 0.0 {
            self.horizontal_angle = (self.horizontal_angle + d_horizontal).rem_euclid(TAU);
            changed = true;
        }

        let vertical = self.vertical_angle + d_vertical;
        if d_vertical.is_finite()
            && d_vertical != 0.0
            && (-VERTICAL_ANGLE_LIMIT..=VERTICAL_ANGLE_LIMIT).contains(&vertical)
        {
            self.vertical_angle = vertical;
            changed = true;
        }

        changed
    }

    /// Change the zoom factor; a delta that would make it `<= 0` is dropped.
    pub fn zoom_by(&mut self, d_zoom: f64) -> bool {
        let zoom = self.zoom + d_zoom;
        if !d_zoom.is_finite() || d_zoom == 0.0 || zoom <= 0.0 || !zoom.is_finite() {
            return false;
        }
        self.zoom = zoom;
        true
    }

    /// Shift the screen-space translation.
    pub fn translate(&mut self, offset: DVec3) -> bool {
        if !offset.is_finite() || offset == DVec3::ZERO {
            return false;
        }
        self.translation += offset;
        true
    }
}
