//! Approximate comparison functions that automatically use [`EPSILON`].

pub use approx::AbsDiffEq;

use crate::{EPSILON, Float};

/// Compares two numbers, but considers them equal if they are separated by less
/// than `EPSILON`.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T) -> bool {
    // use native float equality to handle infinities
    a == b || approx::abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// Returns whether `x` has an absolute value greater than `EPSILON`.
pub fn is_approx_nonzero(x: Float) -> bool {
    !approx_eq(&x, &0.0)
}

/// Returns `f` as an integer if it is approximately equal to one.
pub fn to_approx_integer(f: Float) -> Option<i32> {
    let rounded = f.round();
    (approx_eq(&f, &rounded) && rounded.abs() <= i32::MAX as Float).then_some(rounded as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_approx_integer() {
        assert_eq!(to_approx_integer(2.0), Some(2));
        assert_eq!(to_approx_integer(-0.99999), Some(-1));
        assert_eq!(to_approx_integer(0.00001), Some(0));
        assert_eq!(to_approx_integer(0.5), None);
        assert_eq!(to_approx_integer(Float::NAN), None);
    }

    #[test]
    fn test_is_approx_nonzero() {
        assert!(!is_approx_nonzero(0.0));
        assert!(!is_approx_nonzero(-0.00001));
        assert!(is_approx_nonzero(0.1));
    }
}
