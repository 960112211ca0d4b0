//! Flat ambient matrix space.
//!
//! [`Euclidean`] is the space of all `nrows × ncols` matrices over the field
//! of `T`. Embedded manifolds return it from
//! [`get_embedding`](crate::embedded::EmbeddedManifold::get_embedding) and
//! fall back on its operations when they need no specialisation: the
//! metric is the real part of the Frobenius inner product, retraction is
//! addition and inverse retraction is subtraction.

use std::fmt;
use std::marker::PhantomData;

use crate::{
    basis::OrthonormalCoordinates,
    config::Tolerance,
    error::{ManifoldError, Result},
    manifold::Manifold,
    types::{DMatrix, DVector, Field, FieldScalar},
};
use num_traits::{Float, Zero};
use tracing::trace;

/// Real part of the Frobenius inner product, `Re tr(aᴴ b)`.
pub fn real_inner<T: FieldScalar>(a: &DMatrix<T>, b: &DMatrix<T>) -> T::Real {
    a.iter()
        .zip(b.iter())
        .fold(T::Real::zero(), |acc, (x, y)| acc + x.re() * y.re() + x.im() * y.im())
}

/// Frobenius norm `sqrt(Σ |a_ij|²)`.
pub fn frobenius_norm<T: FieldScalar>(a: &DMatrix<T>) -> T::Real {
    let sum = a
        .iter()
        .fold(T::Real::zero(), |acc, x| acc + x.abs_squared());
    <T::Real as Float>::sqrt(sum)
}

/// The Euclidean space of `nrows × ncols` matrices over the field of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Euclidean<T> {
    nrows: usize,
    ncols: usize,
    _field: PhantomData<T>,
}

impl<T: FieldScalar> Euclidean<T> {
    /// Creates the space of `nrows × ncols` matrices.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            _field: PhantomData,
        }
    }

    /// Returns the coefficient field.
    pub fn field(&self) -> Field {
        T::FIELD
    }

    fn check_shape(&self, matrix: &DMatrix<T>) -> Result<()> {
        if matrix.shape() != (self.nrows, self.ncols) {
            trace!(space = %self, shape = ?matrix.shape(), "matrix has the wrong shape");
            return Err(ManifoldError::dimension_mismatch(
                format!("{}×{}", self.nrows, self.ncols),
                format!("{}×{}", matrix.nrows(), matrix.ncols()),
            ));
        }
        Ok(())
    }

    fn check_finite(&self, matrix: &DMatrix<T>, kind: &str) -> Result<()> {
        if let Some(k) = matrix.iter().position(|x| !x.is_finite_entry()) {
            let (i, j) = (k % self.nrows, k / self.nrows);
            trace!(space = %self, kind, row = i, col = j, "non-finite entry");
            return Err(ManifoldError::numerical_error(format!(
                "{kind} in {} has a non-finite entry at ({i}, {j})",
                self
            )));
        }
        Ok(())
    }

    fn fill_random(&self, result: &mut DMatrix<T>) {
        let mut rng = rand::thread_rng();
        for x in result.iter_mut() {
            *x = T::sample_standard_normal(&mut rng);
        }
    }
}

impl<T: FieldScalar> fmt::Display for Euclidean<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Euclidean({}, {}; field = {})", self.nrows, self.ncols, T::FIELD)
    }
}

impl<T: FieldScalar> Manifold<T> for Euclidean<T> {
    fn name(&self) -> &str {
        "Euclidean"
    }

    fn representation_size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn dimension(&self) -> usize {
        self.nrows * self.ncols * T::FIELD.real_dimension()
    }

    fn check_point(&self, point: &DMatrix<T>, _tol: &Tolerance<T::Real>) -> Result<()> {
        self.check_shape(point)?;
        self.check_finite(point, "point")
    }

    fn check_vector(
        &self,
        _point: &DMatrix<T>,
        vector: &DMatrix<T>,
        _tol: &Tolerance<T::Real>,
    ) -> Result<()> {
        self.check_shape(vector)?;
        self.check_finite(vector, "vector")
    }

    fn project_point(&self, point: &DMatrix<T>, result: &mut DMatrix<T>) {
        result.copy_from(point);
    }

    fn project_tangent(
        &self,
        _point: &DMatrix<T>,
        vector: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        result.copy_from(vector);
        Ok(())
    }

    fn inner_product(&self, _point: &DMatrix<T>, u: &DMatrix<T>, v: &DMatrix<T>) -> T::Real {
        real_inner(u, v)
    }

    fn retract(
        &self,
        point: &DMatrix<T>,
        tangent: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        result.copy_from(point);
        *result += tangent;
        Ok(())
    }

    fn inverse_retract(
        &self,
        point: &DMatrix<T>,
        other: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        result.copy_from(other);
        *result -= point;
        Ok(())
    }

    fn parallel_transport(
        &self,
        _from: &DMatrix<T>,
        _to: &DMatrix<T>,
        vector: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        result.copy_from(vector);
        Ok(())
    }

    fn distance(&self, x: &DMatrix<T>, y: &DMatrix<T>) -> Result<T::Real> {
        Ok(frobenius_norm(&(y - x)))
    }

    fn is_flat(&self) -> bool {
        true
    }

    fn random_point(&self) -> DMatrix<T> {
        let mut point = DMatrix::zeros(self.nrows, self.ncols);
        self.fill_random(&mut point);
        point
    }

    fn random_tangent(&self, _point: &DMatrix<T>, result: &mut DMatrix<T>) -> Result<()> {
        assert_eq!(
            result.shape(),
            (self.nrows, self.ncols),
            "Matrix must be {}×{}",
            self.nrows,
            self.ncols
        );
        self.fill_random(result);
        Ok(())
    }
}

impl<T: FieldScalar> OrthonormalCoordinates<T> for Euclidean<T> {
    /// Column-major entries; complex entries contribute their real and
    /// imaginary parts in turn.
    fn get_coordinates_orthonormal(
        &self,
        _point: &DMatrix<T>,
        vector: &DMatrix<T>,
        coords: &mut DVector<T::Real>,
    ) {
        assert_eq!(coords.len(), self.dimension(), "Invalid coordinate vector size");
        assert_eq!(vector.shape(), (self.nrows, self.ncols), "Invalid matrix size");

        match T::FIELD {
            Field::Real => {
                for (c, x) in coords.iter_mut().zip(vector.iter()) {
                    *c = x.re();
                }
            }
            Field::Complex => {
                for (k, x) in vector.iter().enumerate() {
                    coords[2 * k] = x.re();
                    coords[2 * k + 1] = x.im();
                }
            }
        }
    }

    fn get_vector_orthonormal(
        &self,
        _point: &DMatrix<T>,
        coords: &DVector<T::Real>,
        result: &mut DMatrix<T>,
    ) {
        assert_eq!(coords.len(), self.dimension(), "Invalid coordinate vector size");
        assert_eq!(result.shape(), (self.nrows, self.ncols), "Invalid matrix size");

        match T::FIELD {
            Field::Real => {
                for (x, c) in result.iter_mut().zip(coords.iter()) {
                    *x = T::from_re(*c);
                }
            }
            Field::Complex => {
                for (k, x) in result.iter_mut().enumerate() {
                    *x = T::from_parts(coords[2 * k], coords[2 * k + 1]);
                }
            }
        }
    }
}
