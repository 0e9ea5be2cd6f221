//! Errors raised while measuring or loading shapes.

use std::fmt::{self, Display, Formatter};

use ecow::EcoString;

#[doc(inline)]
pub use crate::__bail as bail;
#[doc(hidden)]
pub use ecow::eco_format;

/// Early-return with a [`StrResult`].
///
/// The arguments are formatted into the error message like `format!`.
#[macro_export]
#[doc(hidden)]
macro_rules! __bail {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        return Err($crate::diag::eco_format!($fmt, $($arg),*).into())
    };
}

/// A result type with a string error message.
pub type StrResult<T> = Result<T, EcoString>;

/// A shape whose dimensions admit no measurement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeometryError {
    /// The three sides violate the triangle inequality, so Heron's formula
    /// would need the square root of a negative number.
    DegenerateTriangle { a: f64, b: f64, c: f64 },
}

impl std::error::Error for GeometryError {}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Self::DegenerateTriangle { a, b, c } => write!(
                f,
                "sides {a}, {b} and {c} do not form a triangle",
            ),
        }
    }
}

impl From<GeometryError> for EcoString {
    fn from(error: GeometryError) -> Self {
        eco_format!("{error}")
    }
}

/// An error which can be returned when parsing a shape from a string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseShapeError(pub(crate) EcoString);

impl ParseShapeError {
    /// The reason parsing failed.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl std::error::Error for ParseShapeError {}

impl Display for ParseShapeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "invalid shape: {}", self.0)
    }
}
