//! Type definitions and aliases for matrix manifolds.
//!
//! This module provides the numeric traits used throughout the library:
//! [`Scalar`] for the real scalar types (f32 or f64) and [`FieldScalar`]
//! for matrix entries, which may be real or complex. The coefficient field
//! of a manifold is selected by its entry type.

use nalgebra::{Complex, ComplexField, OMatrix, OVector, Dyn, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use rand::Rng;
use rand_distr::StandardNormal;
use std::fmt::{self, Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for real scalar types (f32 or f64).
///
/// This trait combines all the numeric traits needed for the real part of
/// matrix entries, coordinates, norms and tolerances.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Default absolute tolerance for manifold membership checks.
    const MANIFOLD_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Convert to f64 (for logging and error reporting).
    ///
    /// Values that cannot be represented come back as NaN.
    fn to_f64(self) -> f64 {
        num_traits::cast(self).unwrap_or(f64::NAN)
    }
}

impl Scalar for f32 {
    const MANIFOLD_TOLERANCE: Self = 1e-6;
}

impl Scalar for f64 {
    const MANIFOLD_TOLERANCE: Self = 1e-12;
}

/// The coefficient field of a matrix manifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    /// Real numbers ℝ.
    Real,
    /// Complex numbers ℂ.
    Complex,
}

impl Field {
    /// Returns the field of the entry type `T`.
    pub fn of<T: FieldScalar>() -> Self {
        T::FIELD
    }

    /// Number of real degrees of freedom of one field element.
    pub const fn real_dimension(self) -> usize {
        match self {
            Self::Real => 1,
            Self::Complex => 2,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "ℝ"),
            Self::Complex => write!(f, "ℂ"),
        }
    }
}

/// Trait for matrix entry types: `f32`, `f64`, `Complex<f32>` and `Complex<f64>`.
///
/// The associated [`Real`](FieldScalar::Real) type is the scalar type of
/// coordinates, norms and tolerances.
pub trait FieldScalar: ComplexField + Copy + Default + Send + Sync + 'static {
    /// Real scalar type underlying this entry type.
    type Real: Scalar;

    /// Coefficient field this entry type belongs to.
    const FIELD: Field;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part (always zero for real entries).
    fn im(self) -> Self::Real;

    /// Builds an entry from its real and imaginary parts.
    ///
    /// Real entry types discard `im`.
    fn from_parts(re: Self::Real, im: Self::Real) -> Self;

    /// Builds an entry from a real value.
    fn from_re(re: Self::Real) -> Self {
        Self::from_parts(re, <Self::Real as num_traits::Zero>::zero())
    }

    /// Squared modulus `|z|²`.
    fn abs_squared(self) -> Self::Real {
        let (re, im) = (self.re(), self.im());
        re * re + im * im
    }

    /// Returns `true` when both parts are finite.
    fn is_finite_entry(self) -> bool {
        <Self::Real as Float>::is_finite(self.re()) && <Self::Real as Float>::is_finite(self.im())
    }

    /// Draws an entry whose parts are independent standard normal samples.
    fn sample_standard_normal<G: Rng + ?Sized>(rng: &mut G) -> Self;
}

macro_rules! impl_real_field_scalar {
    ($($t:ty),*) => {
        $(
            impl FieldScalar for $t {
                type Real = $t;
                const FIELD: Field = Field::Real;

                #[inline]
                fn re(self) -> $t {
                    self
                }

                #[inline]
                fn im(self) -> $t {
                    0.0
                }

                #[inline]
                fn from_parts(re: $t, _im: $t) -> Self {
                    re
                }

                fn sample_standard_normal<G: Rng + ?Sized>(rng: &mut G) -> Self {
                    rng.sample(StandardNormal)
                }
            }
        )*
    };
}

impl_real_field_scalar!(f32, f64);

impl<R: Scalar> FieldScalar for Complex<R> {
    type Real = R;
    const FIELD: Field = Field::Complex;

    #[inline]
    fn re(self) -> R {
        self.re
    }

    #[inline]
    fn im(self) -> R {
        self.im
    }

    #[inline]
    fn from_parts(re: R, im: R) -> Self {
        Complex::new(re, im)
    }

    fn sample_standard_normal<G: Rng + ?Sized>(rng: &mut G) -> Self {
        let re: f64 = rng.sample(StandardNormal);
        let im: f64 = rng.sample(StandardNormal);
        Complex::new(<R as Scalar>::from_f64(re), <R as Scalar>::from_f64(im))
    }
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

/// Numerical constants for different precision levels.
pub mod constants {
    use super::Scalar;

    /// Square root of 2.
    pub fn sqrt_2<T: Scalar>() -> T {
        <T as Scalar>::from_f64(std::f64::consts::SQRT_2)
    }

    /// 1/√2.
    pub fn frac_1_sqrt_2<T: Scalar>() -> T {
        <T as Scalar>::from_f64(std::f64::consts::FRAC_1_SQRT_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_scalar_trait_constants() {
        assert!(f32::EPSILON < <f32 as Scalar>::MANIFOLD_TOLERANCE);
        assert!(f64::EPSILON < <f64 as Scalar>::MANIFOLD_TOLERANCE);
    }

    #[test]
    fn test_scalar_conversions() {
        let val_f64 = 3.14159;
        let val_f32 = <f32 as Scalar>::from_f64(val_f64);
        assert_relative_eq!(val_f32 as f64, val_f64, epsilon = 1e-6);
        assert_relative_eq!(Scalar::to_f64(val_f32), val_f32 as f64);
    }

    #[test]
    fn test_field_tags() {
        assert_eq!(Field::of::<f64>(), Field::Real);
        assert_eq!(Field::of::<f32>(), Field::Real);
        assert_eq!(Field::of::<Complex<f64>>(), Field::Complex);
        assert_eq!(Field::Real.real_dimension(), 1);
        assert_eq!(Field::Complex.real_dimension(), 2);
        assert_eq!(Field::Real.to_string(), "ℝ");
        assert_eq!(Field::Complex.to_string(), "ℂ");
    }

    #[test]
    fn test_real_entries() {
        let x = 2.5_f64;
        assert_eq!(x.re(), 2.5);
        assert_eq!(x.im(), 0.0);
        assert_eq!(<f64 as FieldScalar>::from_parts(1.0, 7.0), 1.0);
        assert_eq!(x.abs_squared(), 6.25);
        assert!(x.is_finite_entry());
        assert!(!f64::NAN.is_finite_entry());
    }

    #[test]
    fn test_complex_entries() {
        let z = Complex::new(3.0_f64, -4.0);
        assert_eq!(z.re(), 3.0);
        assert_eq!(z.im(), -4.0);
        assert_eq!(z.abs_squared(), 25.0);
        assert_eq!(<Complex<f64> as FieldScalar>::from_re(1.5), Complex::new(1.5, 0.0));
        assert!(!Complex::new(1.0, f64::INFINITY).is_finite_entry());
    }

    #[test]
    fn test_sampling_is_finite() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(f64::sample_standard_normal(&mut rng).is_finite_entry());
            assert!(Complex::<f32>::sample_standard_normal(&mut rng).is_finite_entry());
        }
    }

    #[test]
    fn test_constants() {
        assert_relative_eq!(constants::sqrt_2::<f64>(), std::f64::consts::SQRT_2);
        assert_relative_eq!(
            constants::sqrt_2::<f64>() * constants::frac_1_sqrt_2::<f64>(),
            1.0,
            epsilon = 1e-15
        );
    }
}
