//! A single type for all shapes and their measurements.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use ecow::eco_format;
use serde::{Deserialize, Serialize};

use crate::diag::{GeometryError, ParseShapeError};
use crate::geom::{Cuboid, Cylinder, Pyramid, Rectangle, Sphere, Triangle};

/// Any of the supported planar or solid shapes.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Triangle(Triangle),
    Cuboid(Cuboid),
    Pyramid(Pyramid),
    Sphere(Sphere),
    Cylinder(Cylinder),
}

impl Shape {
    /// The lowercase name of the shape's kind, e.g. "cylinder".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Triangle(_) => "triangle",
            Self::Cuboid(_) => "cuboid",
            Self::Pyramid(_) => "pyramid",
            Self::Sphere(_) => "sphere",
            Self::Cylinder(_) => "cylinder",
        }
    }

    /// Whether the shape lives in space rather than in the plane.
    pub fn is_solid(&self) -> bool {
        !matches!(self, Self::Rectangle(_) | Self::Triangle(_))
    }

    /// Whether all dimensions are finite and not negative.
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Rectangle(v) => v.is_valid(),
            Self::Triangle(v) => v.is_valid(),
            Self::Cuboid(v) => v.is_valid(),
            Self::Pyramid(v) => v.is_valid(),
            Self::Sphere(v) => v.is_valid(),
            Self::Cylinder(v) => v.is_valid(),
        }
    }

    /// The dimensions in the order they are written in the textual form.
    pub fn dimensions(&self) -> Vec<f64> {
        match *self {
            Self::Rectangle(v) => vec![v.width, v.height],
            Self::Triangle(v) => vec![v.a, v.b, v.c],
            Self::Cuboid(v) => vec![v.width, v.height, v.depth],
            Self::Pyramid(v) => vec![v.base_width, v.base_depth, v.height],
            Self::Sphere(v) => vec![v.radius],
            Self::Cylinder(v) => vec![v.radius, v.height],
        }
    }

    /// Compute all quantities that make sense for this shape.
    ///
    /// Planar shapes yield area and perimeter, solids yield volume and
    /// surface area. Only a degenerate triangle fails.
    pub fn measure(&self) -> Result<Measurement, GeometryError> {
        Ok(match *self {
            Self::Rectangle(v) => Measurement::planar(v.area(), v.perimeter()),
            Self::Triangle(v) => Measurement::planar(v.area()?, v.perimeter()),
            Self::Cuboid(v) => Measurement::solid(v.volume(), v.surface_area()),
            Self::Pyramid(v) => Measurement::solid(v.volume(), v.surface_area()),
            Self::Sphere(v) => Measurement::solid(v.volume(), v.surface_area()),
            Self::Cylinder(v) => Measurement::solid(v.volume(), v.surface_area()),
        })
    }
}

impl From<Rectangle> for Shape {
    fn from(v: Rectangle) -> Self {
        Self::Rectangle(v)
    }
}

impl From<Triangle> for Shape {
    fn from(v: Triangle) -> Self {
        Self::Triangle(v)
    }
}

impl From<Cuboid> for Shape {
    fn from(v: Cuboid) -> Self {
        Self::Cuboid(v)
    }
}

impl From<Pyramid> for Shape {
    fn from(v: Pyramid) -> Self {
        Self::Pyramid(v)
    }
}

impl From<Sphere> for Shape {
    fn from(v: Sphere) -> Self {
        Self::Sphere(v)
    }
}

impl From<Cylinder> for Shape {
    fn from(v: Cylinder) -> Self {
        Self::Cylinder(v)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())?;
        for dim in self.dimensions() {
            write!(f, " {dim}")?;
        }
        Ok(())
    }
}

impl FromStr for Shape {
    type Err = ParseShapeError;

    /// Parses the form `<kind> <dimension>...`, e.g. `cylinder 5 12`.
    ///
    /// Like manifests, rejects dimensions that are negative or not finite.
    fn from_str(src: &str) -> Result<Shape, ParseShapeError> {
        let mut words = src.split_whitespace();
        let Some(kind) = words.next() else {
            return Err(ParseShapeError("missing shape kind".into()));
        };

        let dims = words
            .map(|word| {
                word.parse::<f64>().map_err(|_| {
                    ParseShapeError(eco_format!("expected number, found `{word}`"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let shape: Shape = match (kind, dims.as_slice()) {
            ("rectangle", &[w, h]) => Rectangle::new(w, h).into(),
            ("cylinder", &[r, h]) => Cylinder::new(r, h).into(),
            ("sphere", &[r]) => Sphere::new(r).into(),
            ("triangle", &[a, b, c]) => Triangle::new(a, b, c).into(),
            ("cuboid", &[w, h, d]) => Cuboid::new(w, h, d).into(),
            ("pyramid", &[w, d, h]) => Pyramid::new(w, d, h).into(),
            _ => {
                let arity = match kind {
                    "sphere" => 1,
                    "rectangle" | "cylinder" => 2,
                    "triangle" | "cuboid" | "pyramid" => 3,
                    _ => return Err(ParseShapeError(eco_format!("unknown kind `{kind}`"))),
                };
                return Err(ParseShapeError(eco_format!(
                    "{kind} takes {arity} dimensions, found {}",
                    dims.len(),
                )));
            }
        };

        if !shape.is_valid() {
            let message = eco_format!("{kind} has a negative or non-finite dimension");
            return Err(ParseShapeError(message));
        }

        Ok(shape)
    }
}

/// The quantities computed for a shape.
///
/// Fields that don't apply to the kind of shape are `None`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub area: Option<f64>,
    pub perimeter: Option<f64>,
    pub volume: Option<f64>,
    pub surface_area: Option<f64>,
}

impl Measurement {
    /// The measurement of a planar shape.
    pub fn planar(area: f64, perimeter: f64) -> Self {
        Self {
            area: Some(area),
            perimeter: Some(perimeter),
            ..Self::default()
        }
    }

    /// The measurement of a solid shape.
    pub fn solid(volume: f64, surface_area: f64) -> Self {
        Self {
            volume: Some(volume),
            surface_area: Some(surface_area),
            ..Self::default()
        }
    }
}

impl_approx_eq!(Measurement [area, perimeter, volume, surface_area]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::PI_APPROX;

    #[test]
    fn test_shape_is_send_and_sync() {
        fn ensure_send_and_sync<T: Send + Sync>() {}
        ensure_send_and_sync::<Shape>();
        ensure_send_and_sync::<Measurement>();
    }

    #[test]
    fn test_measure_planar_shape() {
        let shape = Shape::from(Rectangle::new(5.0, 3.0));
        assert_eq!(shape.measure(), Ok(Measurement::planar(15.0, 16.0)));
        assert!(!shape.is_solid());
    }

    #[test]
    fn test_measure_solid_shape() {
        let shape = Shape::from(Cylinder::new(5.0, 12.0));
        assert_approx_eq!(
            shape.measure().unwrap(),
            Measurement::solid(PI_APPROX * 300.0, 2.0 * PI_APPROX * 85.0),
        );
        assert!(shape.is_solid());
    }

    #[test]
    fn test_measure_agrees_with_concrete_methods() {
        let triangle = Triangle::new(2.5, 3.5, 4.2);
        let cuboid = Cuboid::new(3.0, 4.0, 5.0);
        let pyramid = Pyramid::new(6.0, 8.0, 10.0);
        let sphere = Sphere::new(7.0);
        let cylinder = Cylinder::new(2.5, 7.3);
        let rect = Rectangle::new(2.5, 4.2);

        let cases = [
            (Shape::from(rect), Measurement::planar(rect.area(), rect.perimeter())),
            (
                Shape::from(triangle),
                Measurement::planar(triangle.area().unwrap(), triangle.perimeter()),
            ),
            (Shape::from(cuboid), Measurement::solid(cuboid.volume(), cuboid.surface_area())),
            (Shape::from(pyramid), Measurement::solid(pyramid.volume(), pyramid.surface_area())),
            (Shape::from(sphere), Measurement::solid(sphere.volume(), sphere.surface_area())),
            (
                Shape::from(cylinder),
                Measurement::solid(cylinder.volume(), cylinder.surface_area()),
            ),
        ];

        for (shape, expected) in cases {
            assert_eq!(shape.measure(), Ok(expected), "measuring {shape}");
        }
    }

    #[test]
    fn test_measure_degenerate_triangle_fails() {
        let shape = Shape::from(Triangle::new(1.0, 2.0, 5.0));
        assert!(matches!(shape.measure(), Err(GeometryError::DegenerateTriangle { .. })));
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!("rectangle 5 3".parse(), Ok(Shape::Rectangle(Rectangle::new(5.0, 3.0))));
        assert_eq!("  sphere   2.5 ".parse(), Ok(Shape::Sphere(Sphere::new(2.5))));
        assert_eq!(
            "pyramid 6 8 10".parse(),
            Ok(Shape::Pyramid(Pyramid::new(6.0, 8.0, 10.0))),
        );
    }

    #[test]
    fn test_parse_shape_errors() {
        let message = |src: &str| src.parse::<Shape>().unwrap_err().message().to_string();
        assert_eq!(message(""), "missing shape kind");
        assert_eq!(message("hexagon 1"), "unknown kind `hexagon`");
        assert_eq!(message("cuboid 1 2"), "cuboid takes 3 dimensions, found 2");
        assert_eq!(message("sphere two"), "expected number, found `two`");
        assert_eq!(message("sphere -2"), "sphere has a negative or non-finite dimension");
        assert_eq!(message("cylinder 1 inf"), "cylinder has a negative or non-finite dimension");
    }

    #[test]
    fn test_display_parses_back() {
        let shape = Shape::from(Cuboid::new(2.5, 3.2, 1.8));
        assert_eq!(shape.to_string(), "cuboid 2.5 3.2 1.8");
        assert_eq!(shape.to_string().parse(), Ok(shape));
    }

    #[test]
    fn test_validity_covers_every_dimension() {
        assert!(Shape::from(Triangle::new(3.0, 4.0, 5.0)).is_valid());
        assert!(!Shape::from(Triangle::new(3.0, 4.0, -5.0)).is_valid());
        assert!(!Shape::from(Sphere::new(f64::NAN)).is_valid());
    }
}
