//! Symmetric and Hermitian matrices.
//!
//! The manifold Sym(n, 𝔽) consists of all n×n matrices `p` with `p = pᴴ`:
//! symmetric matrices for real entries, Hermitian matrices for complex
//! entries. It is a linear subspace of the n×n matrices and therefore flat;
//! its tangent space at every point is the manifold itself.
//!
//! # Dimension
//!
//! - Real: n(n+1)/2
//! - Complex: n(n+1) − n = n², since the diagonal of a Hermitian matrix is real
//!
//! # Orthonormal coordinates
//!
//! Coordinates visit the upper triangle row by row, `(i, j)` with `i ≤ j`.
//! Off-diagonal entries are scaled by √2 so that the basis is orthonormal
//! for the Frobenius inner product. For complex entries each off-diagonal
//! pair contributes its real and then its imaginary part; diagonal entries
//! only contribute their real part.

use std::fmt;
use std::marker::PhantomData;

use manifoldkit_core::{
    basis::{BasisKind, CachedBasis, OrthonormalCoordinates},
    config::Tolerance,
    embedded::EmbeddedManifold,
    error::{ManifoldError, Result},
    euclidean::{frobenius_norm, Euclidean},
    manifold::Manifold,
    types::{constants, DMatrix, DVector, Field, FieldScalar, Scalar},
};
use num_traits::{One, Zero};
use tracing::{debug, trace};

/// The manifold of n×n symmetric (real) or Hermitian (complex) matrices.
///
/// The coefficient field follows from the entry type: `SymmetricMatrices<f64>`
/// is the space of real symmetric matrices, `SymmetricMatrices<Complex<f64>>`
/// the space of complex Hermitian matrices.
///
/// # Example
///
/// ```
/// use manifoldkit_core::prelude::*;
/// use manifoldkit_manifolds::SymmetricMatrices;
///
/// let m = SymmetricMatrices::<f64>::new(2).unwrap();
/// let p = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 3.0]);
/// assert!(m.check_point(&p, &Tolerance::default()).is_ok());
/// assert_eq!(m.dimension(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetricMatrices<T> {
    n: usize,
    _field: PhantomData<T>,
}

impl<T: FieldScalar> SymmetricMatrices<T> {
    /// Creates the manifold of n×n symmetric or Hermitian matrices.
    ///
    /// # Errors
    ///
    /// Returns an error if n = 0.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(ManifoldError::invalid_parameter(
                "SymmetricMatrices requires n > 0",
            ));
        }
        debug!(n, field = %T::FIELD, "created symmetric matrix manifold");
        Ok(Self {
            n,
            _field: PhantomData,
        })
    }

    /// Size of the matrices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Coefficient field of the entries.
    pub fn field(&self) -> Field {
        T::FIELD
    }

    /// Returns the default orthonormal basis tagged as diagonalizing along
    /// `direction`, with all curvature eigenvalues zero.
    pub fn get_basis_diagonalizing(
        &self,
        point: &DMatrix<T>,
        direction: &DMatrix<T>,
    ) -> CachedBasis<T> {
        let vectors = self.default_orthonormal_basis(point).into_vectors();
        CachedBasis::new(
            BasisKind::Diagonalizing {
                direction: direction.clone(),
            },
            vectors,
            (self.n, self.n),
        )
        .with_eigenvalues(DVector::zeros(self.dimension()))
    }

    fn structure(&self) -> &'static str {
        match T::FIELD {
            Field::Real => "symmetric",
            Field::Complex => "Hermitian",
        }
    }

    /// ‖m − mᴴ‖_F together with the upper-triangle entry where m deviates
    /// most from its conjugate transpose.
    fn asymmetry(&self, matrix: &DMatrix<T>) -> (T::Real, (usize, usize)) {
        let deviation = frobenius_norm(&(matrix - matrix.adjoint()));

        let mut worst = (0, 0);
        let mut worst_value = T::Real::zero();
        for i in 0..self.n {
            for j in i..self.n {
                let d = (matrix[(i, j)] - matrix[(j, i)].conjugate()).abs_squared();
                if d > worst_value {
                    worst_value = d;
                    worst = (i, j);
                }
            }
        }
        (deviation, worst)
    }

    fn half() -> T {
        T::from_re(<T::Real as Scalar>::from_f64(0.5))
    }

    fn assert_square(&self, matrix: &DMatrix<T>) {
        assert_eq!(
            matrix.shape(),
            (self.n, self.n),
            "Matrix must be {}×{}",
            self.n,
            self.n
        );
    }

    fn fill_random(&self, result: &mut DMatrix<T>) {
        let mut rng = rand::thread_rng();
        for i in 0..self.n {
            result[(i, i)] = T::from_re(T::sample_standard_normal(&mut rng).re());
            for j in i + 1..self.n {
                let value = T::sample_standard_normal(&mut rng);
                result[(i, j)] = value;
                result[(j, i)] = value.conjugate();
            }
        }
    }

    fn real_coordinates(&self, vector: &DMatrix<T>, coords: &mut DVector<T::Real>) {
        let sqrt_2 = constants::sqrt_2::<T::Real>();
        let mut k = 0;
        for i in 0..self.n {
            for j in i..self.n {
                let scale = if i == j { T::Real::one() } else { sqrt_2 };
                coords[k] = vector[(i, j)].re() * scale;
                k += 1;
            }
        }
    }

    fn complex_coordinates(&self, vector: &DMatrix<T>, coords: &mut DVector<T::Real>) {
        let sqrt_2 = constants::sqrt_2::<T::Real>();
        let mut k = 0;
        for i in 0..self.n {
            for j in i..self.n {
                let scale = if i == j { T::Real::one() } else { sqrt_2 };
                coords[k] = vector[(i, j)].re() * scale;
                k += 1;
                if i != j {
                    coords[k] = vector[(i, j)].im() * scale;
                    k += 1;
                }
            }
        }
    }

    fn real_vector(&self, coords: &DVector<T::Real>, result: &mut DMatrix<T>) {
        let inv_sqrt_2 = constants::frac_1_sqrt_2::<T::Real>();
        let mut k = 0;
        for i in 0..self.n {
            for j in i..self.n {
                let scale = if i == j { T::Real::one() } else { inv_sqrt_2 };
                let value = T::from_re(coords[k] * scale);
                k += 1;
                result[(i, j)] = value;
                result[(j, i)] = value;
            }
        }
    }

    fn complex_vector(&self, coords: &DVector<T::Real>, result: &mut DMatrix<T>) {
        let inv_sqrt_2 = constants::frac_1_sqrt_2::<T::Real>();
        let mut k = 0;
        for i in 0..self.n {
            for j in i..self.n {
                let scale = if i == j { T::Real::one() } else { inv_sqrt_2 };
                let re = coords[k] * scale;
                k += 1;
                let im = if i == j {
                    T::Real::zero()
                } else {
                    k += 1;
                    coords[k - 1] * scale
                };
                let value = T::from_parts(re, im);
                result[(i, j)] = value;
                result[(j, i)] = value.conjugate();
            }
        }
    }
}

impl<T: FieldScalar> fmt::Display for SymmetricMatrices<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricMatrices({}, {})", self.n, T::FIELD)
    }
}

impl<T: FieldScalar> Manifold<T> for SymmetricMatrices<T> {
    fn name(&self) -> &str {
        "SymmetricMatrices"
    }

    fn representation_size(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn dimension(&self) -> usize {
        match T::FIELD {
            Field::Real => self.n * (self.n + 1) / 2,
            Field::Complex => self.n * (self.n + 1) - self.n,
        }
    }

    fn check_point(&self, point: &DMatrix<T>, tol: &Tolerance<T::Real>) -> Result<()> {
        self.check_point_in_embedding(point, tol)?;

        let (deviation, (i, j)) = self.asymmetry(point);
        if !tol.is_zero(deviation) {
            let deviation = <T::Real as Scalar>::to_f64(deviation);
            trace!(manifold = %self, deviation, "point failed the symmetry check");
            return Err(ManifoldError::invalid_point(
                self,
                format!(
                    "the point is not {}, largest asymmetry at entry ({i}, {j})",
                    self.structure()
                ),
                deviation,
            ));
        }
        Ok(())
    }

    /// The base point is not used: every tangent space is the manifold itself.
    fn check_vector(
        &self,
        point: &DMatrix<T>,
        vector: &DMatrix<T>,
        tol: &Tolerance<T::Real>,
    ) -> Result<()> {
        self.check_vector_in_embedding(point, vector, tol)?;

        let (deviation, (i, j)) = self.asymmetry(vector);
        if !tol.is_zero(deviation) {
            let deviation = <T::Real as Scalar>::to_f64(deviation);
            trace!(manifold = %self, deviation, "vector failed the symmetry check");
            return Err(ManifoldError::invalid_tangent(
                self,
                format!(
                    "the vector is not {}, largest asymmetry at entry ({i}, {j})",
                    self.structure()
                ),
                deviation,
            ));
        }
        Ok(())
    }

    /// Writes `(p + pᴴ) / 2`.
    ///
    /// Both terms are halved before the sum, so entries near the largest
    /// finite value do not overflow.
    fn project_point(&self, point: &DMatrix<T>, result: &mut DMatrix<T>) {
        let half = Self::half();
        result.copy_from(&(point * half + point.adjoint() * half));
    }

    /// Writes `(X + Xᵀ) / 2`.
    ///
    /// This uses the plain transpose also for complex entries, so unlike
    /// [`project_point`](Manifold::project_point) it does not produce a
    /// Hermitian matrix from arbitrary complex input.
    fn project_tangent(
        &self,
        _point: &DMatrix<T>,
        vector: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        let half = Self::half();
        result.copy_from(&(vector * half + vector.transpose() * half));
        Ok(())
    }

    fn inner_product(&self, point: &DMatrix<T>, u: &DMatrix<T>, v: &DMatrix<T>) -> T::Real {
        self.get_embedding().inner_product(point, u, v)
    }

    fn retract(
        &self,
        point: &DMatrix<T>,
        tangent: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        self.get_embedding().retract(point, tangent, result)
    }

    fn inverse_retract(
        &self,
        point: &DMatrix<T>,
        other: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        self.get_embedding().inverse_retract(point, other, result)
    }

    fn parallel_transport(
        &self,
        from: &DMatrix<T>,
        to: &DMatrix<T>,
        vector: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) -> Result<()> {
        self.get_embedding().parallel_transport(from, to, vector, result)
    }

    fn distance(&self, x: &DMatrix<T>, y: &DMatrix<T>) -> Result<T::Real> {
        self.get_embedding().distance(x, y)
    }

    fn is_flat(&self) -> bool {
        true
    }

    fn random_point(&self) -> DMatrix<T> {
        let mut point = DMatrix::zeros(self.n, self.n);
        self.fill_random(&mut point);
        point
    }

    fn random_tangent(&self, _point: &DMatrix<T>, result: &mut DMatrix<T>) -> Result<()> {
        self.assert_square(result);
        self.fill_random(result);
        Ok(())
    }
}

impl<T: FieldScalar> EmbeddedManifold<T> for SymmetricMatrices<T> {
    fn get_embedding(&self) -> Euclidean<T> {
        Euclidean::new(self.n, self.n)
    }

    /// Zero: a linear subspace has no second fundamental form.
    fn weingarten(
        &self,
        _point: &DMatrix<T>,
        _vector: &DMatrix<T>,
        _normal: &DMatrix<T>,
        result: &mut DMatrix<T>,
    ) {
        self.assert_square(result);
        result.fill(T::zero());
    }
}

impl<T: FieldScalar> OrthonormalCoordinates<T> for SymmetricMatrices<T> {
    fn get_coordinates_orthonormal(
        &self,
        _point: &DMatrix<T>,
        vector: &DMatrix<T>,
        coords: &mut DVector<T::Real>,
    ) {
        assert_eq!(coords.len(), self.dimension(), "Invalid coordinate vector size");
        self.assert_square(vector);

        match T::FIELD {
            Field::Real => self.real_coordinates(vector, coords),
            Field::Complex => self.complex_coordinates(vector, coords),
        }
    }

    fn get_vector_orthonormal(
        &self,
        _point: &DMatrix<T>,
        coords: &DVector<T::Real>,
        result: &mut DMatrix<T>,
    ) {
        assert_eq!(coords.len(), self.dimension(), "Invalid coordinate vector size");
        self.assert_square(result);

        match T::FIELD {
            Field::Real => self.real_vector(coords, result),
            Field::Complex => self.complex_vector(coords, result),
        }
    }

    fn get_basis(&self, point: &DMatrix<T>, kind: &BasisKind<T>) -> Result<CachedBasis<T>> {
        match kind {
            BasisKind::DefaultOrthonormal => Ok(self.default_orthonormal_basis(point)),
            BasisKind::Diagonalizing { direction } => {
                Ok(self.get_basis_diagonalizing(point, direction))
            }
        }
    }
}
