use serde::{Deserialize, Serialize};

use super::{is_valid_dimension, PI_APPROX};

/// A rectangular box.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cuboid {
    /// The edge length along the horizontal axis.
    pub width: f64,
    /// The edge length along the vertical axis.
    pub height: f64,
    /// The edge length along the depth axis.
    pub depth: f64,
}

impl Cuboid {
    /// Create a cuboid from `width`, `height` and `depth`.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self { width, height, depth }
    }

    /// Create a cube with edge length `edge`.
    pub fn cube(edge: f64) -> Self {
        Self { width: edge, height: edge, depth: edge }
    }

    /// The enclosed volume.
    pub fn volume(self) -> f64 {
        self.width * self.height * self.depth
    }

    /// The total area of the six faces.
    pub fn surface_area(self) -> f64 {
        2.0 * (self.width * self.height
            + self.width * self.depth
            + self.height * self.depth)
    }

    /// Whether all edges have the same length.
    pub fn is_cube(self) -> bool {
        self.width == self.height && self.height == self.depth
    }

    /// Whether all edges are finite and not negative.
    pub fn is_valid(self) -> bool {
        [self.width, self.height, self.depth].into_iter().all(is_valid_dimension)
    }
}

impl_approx_eq!(Cuboid [width, height, depth]);

/// A right pyramid over a rectangular base.
///
/// The apex sits straight above the center of the base.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pyramid {
    /// The base edge along the horizontal axis.
    pub base_width: f64,
    /// The base edge along the depth axis.
    pub base_depth: f64,
    /// The distance from the base to the apex.
    pub height: f64,
}

impl Pyramid {
    /// Create a pyramid from its base edges and height.
    pub fn new(base_width: f64, base_depth: f64, height: f64) -> Self {
        Self { base_width, base_depth, height }
    }

    /// The enclosed volume, a third of base area times height.
    pub fn volume(self) -> f64 {
        self.base_area() * self.height / 3.0
    }

    /// The area of the base rectangle.
    pub fn base_area(self) -> f64 {
        self.base_width * self.base_depth
    }

    /// The total area of the four triangular faces.
    ///
    /// The two faces standing on the width edges rise with the slant height
    /// `sqrt(h² + (depth / 2)²)` and the two on the depth edges with
    /// `sqrt(h² + (width / 2)²)`.
    pub fn lateral_area(self) -> f64 {
        let slant_over_width = self.height.hypot(self.base_depth / 2.0);
        let slant_over_depth = self.height.hypot(self.base_width / 2.0);
        self.base_width * slant_over_width + self.base_depth * slant_over_depth
    }

    /// The base area plus the lateral area.
    pub fn surface_area(self) -> f64 {
        self.base_area() + self.lateral_area()
    }

    /// Whether all dimensions are finite and not negative.
    pub fn is_valid(self) -> bool {
        [self.base_width, self.base_depth, self.height]
            .into_iter()
            .all(is_valid_dimension)
    }
}

impl_approx_eq!(Pyramid [base_width, base_depth, height]);

/// A ball given by its radius.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sphere {
    /// The distance from the center to the surface.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere with the given `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// The enclosed volume, `4/3 π r³`.
    pub fn volume(self) -> f64 {
        4.0 / 3.0 * PI_APPROX * self.radius.powi(3)
    }

    /// The area of the surface, `4 π r²`.
    pub fn surface_area(self) -> f64 {
        4.0 * PI_APPROX * self.radius.powi(2)
    }

    /// Whether the radius is finite and not negative.
    pub fn is_valid(self) -> bool {
        is_valid_dimension(self.radius)
    }
}

impl_approx_eq!(Sphere [radius]);

/// A right circular cylinder.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cylinder {
    /// The radius of the top and bottom disks.
    pub radius: f64,
    /// The distance between the disks.
    pub height: f64,
}

impl Cylinder {
    /// Create a cylinder from `radius` and `height`.
    pub fn new(radius: f64, height: f64) -> Self {
        Self { radius, height }
    }

    /// The enclosed volume, `π r² h`.
    pub fn volume(self) -> f64 {
        PI_APPROX * self.radius.powi(2) * self.height
    }

    /// The area of both disks plus the mantle, `2 π r (r + h)`.
    pub fn surface_area(self) -> f64 {
        2.0 * PI_APPROX * self.radius * (self.radius + self.height)
    }

    /// Whether radius and height are finite and not negative.
    pub fn is_valid(self) -> bool {
        is_valid_dimension(self.radius) && is_valid_dimension(self.height)
    }
}

impl_approx_eq!(Cylinder [radius, height]);
