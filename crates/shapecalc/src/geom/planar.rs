use serde::{Deserialize, Serialize};

use crate::diag::GeometryError;

use super::is_valid_dimension;

/// An axis-aligned rectangle given by its side lengths.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rectangle {
    /// The horizontal side length.
    pub width: f64,
    /// The vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from `width` and `height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a square with side length `side`.
    pub fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }

    /// The enclosed area, `width * height`.
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// The length of the boundary, `2 * (width + height)`.
    pub fn perimeter(self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Whether both sides have the same length.
    pub fn is_square(self) -> bool {
        self.width == self.height
    }

    /// Whether both sides are finite and not negative.
    pub fn is_valid(self) -> bool {
        is_valid_dimension(self.width) && is_valid_dimension(self.height)
    }
}

impl_approx_eq!(Rectangle [width, height]);

/// A triangle given by the lengths of its three sides.
///
/// Any three lengths can be stored. Whether they actually close up into a
/// triangle is only checked when the area is computed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Triangle {
    /// The first side length.
    pub a: f64,
    /// The second side length.
    pub b: f64,
    /// The third side length.
    pub c: f64,
}

impl Triangle {
    /// Create a triangle from its side lengths.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Create an equilateral triangle with side length `side`.
    pub fn equilateral(side: f64) -> Self {
        Self { a: side, b: side, c: side }
    }

    /// The sum of the three sides.
    pub fn perimeter(self) -> f64 {
        self.a + self.b + self.c
    }

    /// Half of the perimeter.
    pub fn semi_perimeter(self) -> f64 {
        self.perimeter() / 2.0
    }

    /// The enclosed area, computed with Heron's formula.
    ///
    /// Fails with [`GeometryError::DegenerateTriangle`] when a side is
    /// negative or the sides violate the triangle inequality. Sides that
    /// exactly close up into a line yield an area of zero.
    pub fn area(self) -> Result<f64, GeometryError> {
        let radicand = self.heron_radicand();
        let negative_side = [self.a, self.b, self.c].into_iter().any(|side| side < 0.0);
        if negative_side || radicand < 0.0 || radicand.is_nan() {
            tracing::debug!(a = self.a, b = self.b, c = self.c, "rejecting degenerate triangle");
            return Err(GeometryError::DegenerateTriangle { a: self.a, b: self.b, c: self.c });
        }
        Ok(radicand.sqrt())
    }

    /// Whether a side is negative or the sides violate the triangle
    /// inequality.
    pub fn is_degenerate(self) -> bool {
        self.area().is_err()
    }

    /// Whether all sides are finite and not negative.
    pub fn is_valid(self) -> bool {
        [self.a, self.b, self.c].into_iter().all(is_valid_dimension)
    }

    /// The value under the square root in Heron's formula, `s(s-a)(s-b)(s-c)`.
    fn heron_radicand(self) -> f64 {
        let s = self.semi_perimeter();
        s * (s - self.a) * (s - self.b) * (s - self.c)
    }
}

impl_approx_eq!(Triangle [a, b, c]);
