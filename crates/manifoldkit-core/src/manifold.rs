//! Core manifold trait for matrix manifolds.
//!
//! This module defines the [`Manifold`] trait that every manifold in the
//! library implements. Points and tangent vectors are represented as
//! `DMatrix<T>` where `T` is a real or complex entry type; the coefficient
//! field of the manifold follows from `T`.
//!
//! # Mathematical Background
//!
//! A Riemannian manifold (M, g) consists of:
//! - A smooth manifold M
//! - A Riemannian metric g that assigns an inner product to each tangent space
//!
//! Key concepts:
//! - **Tangent space**: T_p M is the linear approximation of M at point p
//! - **Retraction**: A smooth map R_p: T_p M → M that approximates the exponential map
//! - **Parallel transport**: Moving vectors along curves while preserving angles

use crate::{
    config::Tolerance,
    error::Result,
    types::{DMatrix, FieldScalar},
};
use num_traits::Float;
use std::fmt::{Debug, Display};

/// Trait for manifolds whose points are matrices.
///
/// Operations that produce a matrix write into a caller-owned `result`
/// buffer of shape [`representation_size`](Manifold::representation_size).
/// Passing a buffer of another shape is a programmer error and panics.
///
/// ## Mathematical Properties
///
/// Implementations must guarantee:
///
/// 1. **Projection idempotency**: Π(Π(x)) = Π(x)
/// 2. **Retraction constraints**: R_p(0) = p
/// 3. **Metric properties**: ⟨·,·⟩_p is symmetric, bilinear, and positive definite
///
/// # Type Parameters
///
/// - `T`: The entry type (`f32`, `f64`, `Complex<f32>` or `Complex<f64>`)
pub trait Manifold<T: FieldScalar>: Debug + Display + Send + Sync {
    /// Returns a short name for the manifold.
    fn name(&self) -> &str;

    /// Returns the shape `(rows, columns)` of the matrices representing points.
    fn representation_size(&self) -> (usize, usize);

    /// Returns the real dimension of the manifold.
    fn dimension(&self) -> usize;

    /// Checks whether a matrix is a point on the manifold.
    ///
    /// Returns `Ok(())` when the point is valid, otherwise an error
    /// describing the violated constraint.
    fn check_point(&self, point: &DMatrix<T>, tol: &Tolerance<T::Real>) -> Result<()>;

    /// Checks whether a matrix is a tangent vector at `point`.
    fn check_vector(
        &self,
        point: &DMatrix<T>,
        vector: &DMatrix<T>,
        tol: &Tolerance<T::Real>,
    ) -> Result<()>;

    /// Boolean form of [`check_point`](Manifold::check_point).
    fn is_point_on_manifold(&self, point: &DMatrix<T>, tol: &Tolerance<T::Real>) -> bool {
        self.check_point(point, tol).is_ok()
    }

    /// Boolean form of [`check_vector`](Manifold::check_vector).
    fn is_vector_in_tangent_space(
        &self,
        point: &DMatrix<T>,
        vector: &DMatrix<T>,
        tol: &Tolerance<T::Real>,
    ) -> bool {
        self.check_vector(point, vector, tol).is_ok()
    }

    /// Projects an ambient matrix onto the manifold.
    ///
    /// # Arguments
    ///
    /// * `point` - An arbitrary matrix
    /// * `result` - Output matrix that will contain the projection
    fn project_point(&self, point: &DMatrix<T>, result: &mut DMatrix<T>);

    /// Projects an ambient matrix onto the tangent space at `point`.
    ///
    /// # Arguments
    ///
    /// * `point` - A point on the manifold
    /// * `vector` - An arbitrary matrix
    /// * `result` - Output matrix that will contain the projection
    fn project_tangent(
        &self,
        point: &DMatrix<T>,
        vector: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()>;

    /// Allocating form of [`project_point`](Manifold::project_point).
    fn project(&self, point: &DMatrix<T>) -> DMatrix<T> {
        let (nrows, ncols) = self.representation_size();
        let mut result = DMatrix::zeros(nrows, ncols);
        self.project_point(point, &mut result);
        result
    }

    /// Allocating form of [`project_tangent`](Manifold::project_tangent).
    fn project_vector(&self, point: &DMatrix<T>, vector: &DMatrix<T>) -> Result<DMatrix<T>> {
        let mut result = self.zero_vector(point);
        self.project_tangent(point, vector, &mut result)?;
        Ok(result)
    }

    /// Computes the Riemannian inner product ⟨u, v⟩_point.
    fn inner_product(&self, point: &DMatrix<T>, u: &DMatrix<T>, v: &DMatrix<T>) -> T::Real;

    /// Computes the norm of a tangent vector, `sqrt(⟨v, v⟩)`.
    fn norm(&self, point: &DMatrix<T>, vector: &DMatrix<T>) -> T::Real {
        <T::Real as Float>::sqrt(self.inner_product(point, vector, vector))
    }

    /// Performs a retraction from the tangent space at `point` to the manifold.
    fn retract(
        &self,
        point: &DMatrix<T>,
        tangent: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()>;

    /// Computes the inverse retraction: the tangent vector at `point` that
    /// retracts to `other`.
    fn inverse_retract(
        &self,
        point: &DMatrix<T>,
        other: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()>;

    /// Transports a tangent vector from `from` to `to`.
    ///
    /// # Default Implementation
    ///
    /// Vector transport by projection onto the tangent space at `to`.
    fn parallel_transport(
        &self,
        _from: &DMatrix<T>,
        to: &DMatrix<T>,
        vector: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        self.project_tangent(to, vector, result)
    }

    /// Computes the distance between two points as the norm of the inverse
    /// retraction.
    fn distance(&self, x: &DMatrix<T>, y: &DMatrix<T>) -> Result<T::Real> {
        let mut log = self.zero_vector(x);
        self.inverse_retract(x, y, &mut log)?;
        Ok(self.norm(x, &log))
    }

    /// Returns the zero tangent vector at `point`.
    fn zero_vector(&self, _point: &DMatrix<T>) -> DMatrix<T> {
        let (nrows, ncols) = self.representation_size();
        DMatrix::zeros(nrows, ncols)
    }

    /// Checks if the manifold has zero curvature.
    ///
    /// Flat manifolds may use vector addition as retraction, subtraction
    /// as inverse retraction and the identity as parallel transport.
    fn is_flat(&self) -> bool {
        false
    }

    /// Generates a random point on the manifold.
    fn random_point(&self) -> DMatrix<T>;

    /// Generates a random tangent vector at `point`.
    fn random_tangent(&self, point: &DMatrix<T>, result: &mut DMatrix<T>) -> Result<()>;
}
