//! Numeric tolerance policy for manifold validity checks.
//!
//! Every membership check takes a caller-supplied [`Tolerance`] made of an
//! absolute and a relative part. Two values `a` and `b` are considered equal
//! when
//!
//! ```text
//! |a - b| <= max(atol, rtol * max(|a|, |b|))
//! ```

use crate::types::Scalar;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute and relative tolerance used to compare scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance<R> {
    /// Absolute tolerance.
    pub atol: R,
    /// Relative tolerance.
    pub rtol: R,
}

impl<R: Scalar> Default for Tolerance<R> {
    fn default() -> Self {
        Self {
            atol: R::MANIFOLD_TOLERANCE,
            rtol: R::zero(),
        }
    }
}

impl<R: Scalar> Tolerance<R> {
    /// Creates a tolerance from its absolute and relative parts.
    pub fn new(atol: R, rtol: R) -> Self {
        Self { atol, rtol }
    }

    /// Tolerance that only accepts exact equality.
    pub fn exact() -> Self {
        Self {
            atol: R::zero(),
            rtol: R::zero(),
        }
    }

    /// Set the absolute tolerance.
    pub fn with_atol(mut self, atol: R) -> Self {
        self.atol = atol;
        self
    }

    /// Set the relative tolerance.
    pub fn with_rtol(mut self, rtol: R) -> Self {
        self.rtol = rtol;
        self
    }

    /// Returns `true` when `a` and `b` agree within this tolerance.
    pub fn is_approx(&self, a: R, b: R) -> bool {
        let diff = <R as Float>::abs(a - b);
        let scale = <R as Float>::max(<R as Float>::abs(a), <R as Float>::abs(b));
        diff <= <R as Float>::max(self.atol, self.rtol * scale)
    }

    /// Returns `true` when `value` is zero within this tolerance.
    ///
    /// With a zero reference the relative part only matters when `rtol >= 1`,
    /// so in practice `atol` decides.
    pub fn is_zero(&self, value: R) -> bool {
        self.is_approx(value, R::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        let tol = Tolerance::<f64>::default();
        assert_eq!(tol.atol, 1e-12);
        assert_eq!(tol.rtol, 0.0);
        assert!(tol.is_zero(5e-13));
        assert!(!tol.is_zero(1e-11));
    }

    #[test]
    fn test_exact_tolerance() {
        let tol = Tolerance::<f32>::exact();
        assert!(tol.is_zero(0.0));
        assert!(tol.is_zero(-0.0));
        assert!(!tol.is_zero(f32::MIN_POSITIVE));
    }

    #[test]
    fn test_builder_methods() {
        let tol = Tolerance::<f64>::exact().with_atol(1e-3).with_rtol(1e-2);
        assert_eq!(tol, Tolerance::new(1e-3, 1e-2));

        // 100 vs 100.5 differs by 0.5 <= 1e-2 * 100.5
        assert!(tol.is_approx(100.0, 100.5));
        assert!(!tol.is_approx(1.0, 1.1));
        assert!(tol.is_approx(1.0, 1.0005));
    }

    #[test]
    fn test_nan_is_never_approx() {
        let tol = Tolerance::<f64>::default().with_atol(1.0);
        assert!(!tol.is_zero(f64::NAN));
    }
}
