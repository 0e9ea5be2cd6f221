//! Lists of shapes written down in TOML.
//!
//! A manifest holds any number of `[[shape]]` tables. Each names its `kind`
//! and the dimensions of that kind:
//!
//! ```toml
//! [[shape]]
//! kind = "cuboid"
//! width = 3
//! height = 4
//! depth = 5
//!
//! [[shape]]
//! kind = "sphere"
//! radius = 2.5
//! ```

use ecow::eco_format;
use serde::{Deserialize, Serialize};

use crate::diag::{bail, GeometryError, StrResult};
use crate::shape::{Measurement, Shape};

/// A list of shapes to measure.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// The shapes in the order they were written.
    #[serde(default, rename = "shape")]
    pub shapes: Vec<Shape>,
}

impl Manifest {
    /// Create a manifest from a list of shapes.
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Parse a manifest from TOML source.
    ///
    /// Fails on malformed TOML, on unknown kinds, on missing or unknown
    /// dimension keys and on dimensions that are negative or not finite.
    #[tracing::instrument(skip_all)]
    pub fn parse(src: &str) -> StrResult<Self> {
        let manifest: Self = toml::from_str(src)
            .map_err(|err| eco_format!("failed to parse manifest ({})", err.message()))?;

        for (i, shape) in manifest.shapes.iter().enumerate() {
            if !shape.is_valid() {
                tracing::warn!(index = i, kind = shape.name(), "rejecting invalid shape");
                bail!(
                    "shape {} ({}) has a negative or non-finite dimension",
                    i + 1,
                    shape.name(),
                );
            }
        }

        tracing::debug!(count = manifest.shapes.len(), "parsed manifest");
        Ok(manifest)
    }

    /// Write the manifest back out as TOML.
    pub fn to_toml(&self) -> StrResult<String> {
        toml::to_string(self)
            .map_err(|err| eco_format!("failed to write manifest ({err})"))
    }

    /// Measure every shape, in order.
    ///
    /// A degenerate triangle only fails its own entry.
    #[tracing::instrument(skip_all, fields(count = self.shapes.len()))]
    pub fn measure_all(&self) -> Vec<Result<Measurement, GeometryError>> {
        self.shapes.iter().map(Shape::measure).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Cuboid, Cylinder, Rectangle, Sphere, Triangle};

    const SRC: &str = r#"
        [[shape]]
        kind = "cuboid"
        width = 3
        height = 4
        depth = 5

        [[shape]]
        kind = "triangle"
        a = 1
        b = 2
        c = 5

        [[shape]]
        kind = "rectangle"
        width = 2.5
        height = 4.2
    "#;

    #[test]
    fn test_parse_accepts_integers_and_floats() {
        let manifest = Manifest::parse(SRC).unwrap();
        assert_eq!(manifest.shapes, [
            Shape::Cuboid(Cuboid::new(3.0, 4.0, 5.0)),
            Shape::Triangle(Triangle::new(1.0, 2.0, 5.0)),
            Shape::Rectangle(Rectangle::new(2.5, 4.2)),
        ]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse(""), Ok(Manifest::default()));
    }

    #[test]
    fn test_measure_all_isolates_degenerate_triangle() {
        let results = Manifest::parse(SRC).unwrap().measure_all();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(Measurement::solid(60.0, 94.0)));
        assert!(matches!(results[1], Err(GeometryError::DegenerateTriangle { .. })));
        assert_approx_eq!(results[2].unwrap(), Measurement::planar(10.5, 13.4));
    }

    #[test]
    fn test_parse_rejects_negative_dimension() {
        let src = "[[shape]]\nkind = \"sphere\"\nradius = -1\n";
        assert_eq!(
            Manifest::parse(src),
            Err("shape 1 (sphere) has a negative or non-finite dimension".into()),
        );
    }

    #[test]
    fn test_parse_rejects_nan_dimension() {
        let src = "[[shape]]\nkind = \"cylinder\"\nradius = nan\nheight = 2\n";
        assert!(Manifest::parse(src).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_kind_and_missing_fields() {
        let unknown = Manifest::parse("[[shape]]\nkind = \"hexagon\"\n").unwrap_err();
        assert!(unknown.starts_with("failed to parse manifest"));

        let missing = Manifest::parse("[[shape]]\nkind = \"cylinder\"\nradius = 1\n");
        assert!(missing.is_err());
    }

    #[test]
    fn test_parse_rejects_misspelt_dimension() {
        let src = "[[shape]]\nkind = \"cylinder\"\nradius = 1\nheight = 2\nheigth = 3\n";
        let error = Manifest::parse(src).unwrap_err();
        assert!(error.starts_with("failed to parse manifest"));
        assert!(error.contains("heigth"));
    }

    #[test]
    fn test_to_toml_parses_back() {
        let manifest = Manifest::new(vec![
            Sphere::new(7.0).into(),
            Cylinder::new(5.0, 12.0).into(),
        ]);
        let src = manifest.to_toml().unwrap();
        assert_eq!(Manifest::parse(&src), Ok(manifest));
    }
}
