//! Shapes in the plane and in space, and how to measure them.

#[macro_use]
mod approx;
mod planar;
mod solid;

pub use approx::{ApproxEq, EPS};
pub use planar::{Rectangle, Triangle};
pub use solid::{Cuboid, Cylinder, Pyramid, Sphere};

/// The decimal approximation of π used by all round shapes.
///
/// Expected outputs of existing users were computed with this value, so it is
/// kept instead of [`std::f64::consts::PI`].
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14159;

/// Whether a dimension is usable for measuring: finite and not negative.
pub(crate) fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
