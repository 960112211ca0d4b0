//! Manifolds embedded in a flat matrix space.
//!
//! An embedded manifold knows its ambient [`Euclidean`] space. Points and
//! tangent vectors are mapped into that space by [`embed`] and
//! [`embed_vector`], which default to the identity for submanifolds whose
//! representation already is the ambient one.
//!
//! [`embed`]: EmbeddedManifold::embed
//! [`embed_vector`]: EmbeddedManifold::embed_vector

use crate::{
    config::Tolerance,
    error::Result,
    euclidean::Euclidean,
    manifold::Manifold,
    types::{DMatrix, FieldScalar},
};

/// Capability of manifolds embedded in a Euclidean matrix space.
pub trait EmbeddedManifold<T: FieldScalar>: Manifold<T> {
    /// Returns the ambient space.
    fn get_embedding(&self) -> Euclidean<T>;

    /// Maps a point into the ambient space.
    fn embed(&self, point: &DMatrix<T>) -> DMatrix<T> {
        point.clone()
    }

    /// Maps a tangent vector at `point` into the ambient space.
    fn embed_vector(&self, _point: &DMatrix<T>, vector: &DMatrix<T>) -> DMatrix<T> {
        vector.clone()
    }

    /// Checks that the embedded point is valid in the ambient space.
    ///
    /// Manifolds call this first in their own
    /// [`check_point`](Manifold::check_point) and add their constraints on top.
    fn check_point_in_embedding(&self, point: &DMatrix<T>, tol: &Tolerance<T::Real>) -> Result<()> {
        self.get_embedding().check_point(&self.embed(point), tol)
    }

    /// Checks that the embedded vector is valid in the ambient space.
    fn check_vector_in_embedding(
        &self,
        point: &DMatrix<T>,
        vector: &DMatrix<T>,
        tol: &Tolerance<T::Real>,
    ) -> Result<()> {
        self.get_embedding()
            .check_vector(&self.embed(point), &self.embed_vector(point, vector), tol)
    }

    /// Weingarten map of the embedding.
    ///
    /// Writes `W_p(X, V)` for a tangent vector `vector` and a normal vector
    /// `normal` at `point` into `result`.
    fn weingarten(
        &self,
        point: &DMatrix<T>,
        vector: &DMatrix<T>,
        normal: &DMatrix<T>,
        result: &mut DMatrix<T>,
    );
}
