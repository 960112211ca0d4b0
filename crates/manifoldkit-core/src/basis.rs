//! Bases of tangent spaces and coordinate conversions.
//!
//! A tangent vector can be represented by its real coordinates with respect
//! to an orthonormal basis of the tangent space. The [`OrthonormalCoordinates`]
//! trait provides this conversion for a manifold's default orthonormal basis;
//! [`CachedBasis`] stores an explicit list of basis vectors, optionally with
//! the curvature eigenvalues of a diagonalizing basis.

use crate::{
    error::{ManifoldError, Result},
    euclidean::real_inner,
    manifold::Manifold,
    types::{DMatrix, DVector, FieldScalar},
};
use num_traits::{One, Zero};

/// Which basis of the tangent space is requested.
#[derive(Debug, Clone, PartialEq)]
pub enum BasisKind<T: FieldScalar> {
    /// The manifold's default orthonormal basis.
    DefaultOrthonormal,
    /// An orthonormal basis diagonalizing the curvature operator
    /// `R(·, direction) direction`.
    Diagonalizing {
        /// Tangent vector the curvature is diagonalized along
        direction: DMatrix<T>,
    },
}

/// An explicit basis of a tangent space.
#[derive(Debug, Clone)]
pub struct CachedBasis<T: FieldScalar> {
    kind: BasisKind<T>,
    eigenvalues: Option<DVector<T::Real>>,
    vectors: Vec<DMatrix<T>>,
    shape: (usize, usize),
}

impl<T: FieldScalar> CachedBasis<T> {
    /// Creates a basis from its vectors, all of shape `shape`.
    pub fn new(kind: BasisKind<T>, vectors: Vec<DMatrix<T>>, shape: (usize, usize)) -> Self {
        debug_assert!(vectors.iter().all(|v| v.shape() == shape));
        Self {
            kind,
            eigenvalues: None,
            vectors,
            shape,
        }
    }

    /// Attaches curvature eigenvalues, one per basis vector.
    pub fn with_eigenvalues(mut self, eigenvalues: DVector<T::Real>) -> Self {
        assert_eq!(
            eigenvalues.len(),
            self.vectors.len(),
            "One eigenvalue per basis vector is required"
        );
        self.eigenvalues = Some(eigenvalues);
        self
    }

    /// The kind of basis.
    pub fn kind(&self) -> &BasisKind<T> {
        &self.kind
    }

    /// Curvature eigenvalues, for diagonalizing bases.
    pub fn eigenvalues(&self) -> Option<&DVector<T::Real>> {
        self.eigenvalues.as_ref()
    }

    /// The basis vectors.
    pub fn vectors(&self) -> &[DMatrix<T>] {
        &self.vectors
    }

    /// Consumes the basis and returns its vectors.
    pub fn into_vectors(self) -> Vec<DMatrix<T>> {
        self.vectors
    }

    /// Number of basis vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` for the basis of a zero-dimensional space.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Coordinates of `vector` as real inner products with each basis vector.
    ///
    /// Exact for orthonormal bases when `vector` lies in their span.
    pub fn coordinates(&self, vector: &DMatrix<T>) -> DVector<T::Real> {
        assert_eq!(vector.shape(), self.shape, "Invalid matrix size");
        DVector::from_iterator(
            self.vectors.len(),
            self.vectors.iter().map(|e| real_inner(e, vector)),
        )
    }

    /// Linear combination of the basis vectors with real coefficients.
    pub fn vector(&self, coords: &DVector<T::Real>) -> DMatrix<T> {
        assert_eq!(coords.len(), self.vectors.len(), "Invalid coordinate vector size");
        let mut result = DMatrix::zeros(self.shape.0, self.shape.1);
        for (e, &c) in self.vectors.iter().zip(coords.iter()) {
            result += e * T::from_re(c);
        }
        result
    }
}

/// Coordinates with respect to a manifold's default orthonormal basis.
///
/// Coordinate vectors have length [`dimension`](Manifold::dimension).
/// Passing buffers of the wrong size violates the contract and panics.
pub trait OrthonormalCoordinates<T: FieldScalar>: Manifold<T> {
    /// Writes the coordinates of the tangent vector `vector` into `coords`.
    fn get_coordinates_orthonormal(
        &self,
        point: &DMatrix<T>,
        vector: &DMatrix<T>,
        coords: &mut DVector<T::Real>,
    );

    /// Writes the tangent vector with coordinates `coords` into `result`.
    fn get_vector_orthonormal(
        &self,
        point: &DMatrix<T>,
        coords: &DVector<T::Real>,
        result: &mut DMatrix<T>,
    );

    /// Allocating form of
    /// [`get_coordinates_orthonormal`](OrthonormalCoordinates::get_coordinates_orthonormal).
    fn get_coordinates(&self, point: &DMatrix<T>, vector: &DMatrix<T>) -> DVector<T::Real> {
        let mut coords = DVector::zeros(self.dimension());
        self.get_coordinates_orthonormal(point, vector, &mut coords);
        coords
    }

    /// Allocating form of
    /// [`get_vector_orthonormal`](OrthonormalCoordinates::get_vector_orthonormal).
    fn get_vector(&self, point: &DMatrix<T>, coords: &DVector<T::Real>) -> DMatrix<T> {
        let mut result = self.zero_vector(point);
        self.get_vector_orthonormal(point, coords, &mut result);
        result
    }

    /// Builds the default orthonormal basis from the unit coordinate vectors.
    fn default_orthonormal_basis(&self, point: &DMatrix<T>) -> CachedBasis<T> {
        let dim = self.dimension();
        let mut unit = DVector::<T::Real>::zeros(dim);
        let vectors = (0..dim)
            .map(|k| {
                unit.fill(T::Real::zero());
                unit[k] = T::Real::one();
                self.get_vector(point, &unit)
            })
            .collect();
        CachedBasis::new(
            BasisKind::DefaultOrthonormal,
            vectors,
            self.representation_size(),
        )
    }

    /// Returns a basis of the tangent space at `point`.
    ///
    /// # Default Implementation
    ///
    /// Only the default orthonormal basis is available; manifolds that know
    /// their curvature override this for [`BasisKind::Diagonalizing`].
    fn get_basis(&self, point: &DMatrix<T>, kind: &BasisKind<T>) -> Result<CachedBasis<T>> {
        match kind {
            BasisKind::DefaultOrthonormal => Ok(self.default_orthonormal_basis(point)),
            BasisKind::Diagonalizing { .. } => Err(ManifoldError::not_implemented(format!(
                "diagonalizing basis on {}",
                self
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::euclidean::Euclidean;
    use approx::assert_relative_eq;

    #[test]
    fn test_cached_basis_roundtrip() {
        let space = Euclidean::<f64>::new(2, 2);
        let p = space.random_point();
        let basis = space.get_basis(&p, &BasisKind::DefaultOrthonormal).unwrap();
        assert_eq!(basis.len(), 4);
        assert!(!basis.is_empty());
        assert_eq!(basis.kind(), &BasisKind::DefaultOrthonormal);
        assert!(basis.eigenvalues().is_none());

        let x = DMatrix::from_row_slice(2, 2, &[1.0, -2.0, 0.5, 3.0]);
        let coords = basis.coordinates(&x);
        assert_eq!(coords, space.get_coordinates(&p, &x));

        let back = basis.vector(&coords);
        assert_relative_eq!(back, x, epsilon = 1e-14);
    }

    #[test]
    fn test_diagonalizing_basis_not_implemented_by_default() {
        let space = Euclidean::<f64>::new(2, 2);
        let p = space.random_point();
        let kind = BasisKind::Diagonalizing {
            direction: DMatrix::identity(2, 2),
        };
        let err = space.get_basis(&p, &kind).unwrap_err();
        assert!(matches!(err, ManifoldError::NotImplemented { .. }));
        assert!(err.to_string().contains("Euclidean(2, 2; field = ℝ)"));
    }

    #[test]
    fn test_with_eigenvalues() {
        let basis = CachedBasis::<f64>::new(
            BasisKind::DefaultOrthonormal,
            vec![DMatrix::identity(1, 1)],
            (1, 1),
        )
        .with_eigenvalues(DVector::from_element(1, 0.0));
        assert_eq!(basis.eigenvalues().map(|e| e.len()), Some(1));
        assert_eq!(basis.into_vectors().len(), 1);
    }

    #[test]
    #[should_panic(expected = "One eigenvalue per basis vector")]
    fn test_eigenvalue_count_mismatch_panics() {
        let _ = CachedBasis::<f64>::new(BasisKind::DefaultOrthonormal, Vec::new(), (1, 1))
            .with_eigenvalues(DVector::from_element(2, 0.0));
    }
}
