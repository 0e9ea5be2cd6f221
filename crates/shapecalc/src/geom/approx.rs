/// The default tolerance for approximate comparisons.
pub const EPS: f64 = 1.0e-9;

/// Trait for approximate floating point comparisons.
pub trait ApproxEq {
    /// Whether the two values differ by less than `tolerance`.
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self - other).abs() < tolerance
    }
}

impl<T> ApproxEq for Vec<T> where T: ApproxEq {
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.as_slice().approx_eq(other.as_slice(), tolerance)
    }
}

impl<T> ApproxEq for [T] where T: ApproxEq {
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.len() == other.len() &&
        self.iter().zip(other)
            .all(|(x, y)| x.approx_eq(y, tolerance))
    }
}

impl<T> ApproxEq for Option<T> where T: ApproxEq {
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (Some(x), Some(y)) => x.approx_eq(y, tolerance),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Implements the `ApproxEq` trait for a struct by invoking
/// `approx_eq` on each of the listed fields.
///
/// # Example
/// ```
/// impl_approx_eq!(Rectangle [width, height]);
/// ```
macro_rules! impl_approx_eq {
    ($type:ty [$($field:ident),*]) => {
        impl $crate::geom::ApproxEq for $type {
            fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
                $($crate::geom::ApproxEq::approx_eq(
                    &self.$field, &other.$field, tolerance,
                ))&&*
            }
        }
    };
}

/// Ensures that two values are approximately equal per the `ApproxEq` trait.
///
/// The tolerance defaults to [`EPS`] and can be given explicitly as
/// `tolerance = x`.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, tolerance = $crate::geom::EPS)
    };

    ($left:expr, $right:expr, tolerance = $tolerance:expr $(,)?) => ({
        let (left, right) = (&$left, &$right);
        if !$crate::geom::ApproxEq::approx_eq(left, right, $tolerance) {
            panic!(
                "approximate assertion failed: `(left !~= right)`\n  left: `{:?}`,\n right: `{:?}`",
                left, right,
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_respects_tolerance() {
        assert!(1.0_f64.approx_eq(&1.05, 0.1));
        assert!(!1.0_f64.approx_eq(&1.5, 0.1));
    }

    #[test]
    fn test_approx_eq_options_need_same_variant() {
        assert!(Some(2.0_f64).approx_eq(&Some(2.0 + 1e-12), EPS));
        assert!(None::<f64>.approx_eq(&None, EPS));
        assert!(!Some(2.0_f64).approx_eq(&None, EPS));
    }

    #[test]
    fn test_approx_eq_vecs_compare_length_first() {
        assert!(vec![1.0_f64, 2.0].approx_eq(&vec![1.0, 2.0], EPS));
        assert!(!vec![1.0_f64, 2.0].approx_eq(&vec![1.0], EPS));
    }

    #[test]
    fn test_assert_approx_eq_accepts_tolerance() {
        assert_approx_eq!(0.1 + 0.2, 0.3);
        assert_approx_eq!(crate::geom::PI_APPROX, std::f64::consts::PI, tolerance = 1e-5);
    }
}
