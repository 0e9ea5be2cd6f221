//! Measurements of simple planar and solid shapes.
//!
//! # Shapes
//! - **Planar:** [`Rectangle`] and [`Triangle`] know their area and
//!   perimeter.
//! - **Solid:** [`Cuboid`], [`Pyramid`], [`Sphere`] and [`Cylinder`] know
//!   their volume and surface area.
//!
//! Every shape is a small `Copy` value whose methods are pure functions of its
//! dimensions. The only measurement that can fail is the area of a triangle
//! whose sides violate the triangle inequality, see [`GeometryError`].
//!
//! On top of the concrete types, [`Shape`] unifies all kinds behind a single
//! [`measure`](Shape::measure) call and [`Manifest`] reads whole lists of
//! shapes from TOML.
//!
//! [`Rectangle`]: geom::Rectangle
//! [`Triangle`]: geom::Triangle
//! [`Cuboid`]: geom::Cuboid
//! [`Pyramid`]: geom::Pyramid
//! [`Sphere`]: geom::Sphere
//! [`Cylinder`]: geom::Cylinder
//! [`GeometryError`]: diag::GeometryError
//! [`Shape`]: shape::Shape
//! [`Manifest`]: manifest::Manifest

pub mod diag;
#[macro_use]
pub mod geom;
pub mod manifest;
pub mod shape;

pub use crate::diag::{GeometryError, StrResult};
pub use crate::geom::{Cuboid, Cylinder, Pyramid, Rectangle, Sphere, Triangle, PI_APPROX};
pub use crate::manifest::Manifest;
pub use crate::shape::{Measurement, Shape};
