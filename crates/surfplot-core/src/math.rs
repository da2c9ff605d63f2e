//! Math types used across surfplot.
//!
//! Sampling and the 3D camera transform run in double precision (`DVec3`,
//! `DMat3`) so that very distant axis endpoints and large height values keep
//! their shape. Device coordinates handed to a drawing surface are single
//! precision [`Vec2`], the same type the surface collaborators consume.
//!
//! ```
//! use surfplot_core::math::{DMat3, DVec3};
//!
//! let spin = DMat3::from_rotation_z(std::f64::consts::FRAC_PI_2);
//! let p = spin * DVec3::X;
//! assert!((p - DVec3::Y).length() < 1e-12);
//! ```

pub use glam::*;

/// Tolerance used when comparing transformed coordinates.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` when two points agree within `tolerance` on every component.
#[inline]
pub fn approx_eq(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    (a - b).abs().max_element() <= tolerance
}
