//! ManifoldKit Manifolds - Concrete matrix manifolds.
//!
//! This crate provides implementations of the manifold traits from
//! `manifoldkit-core` for concrete matrix spaces.
//!
//! - [`SymmetricMatrices`]: real symmetric or complex Hermitian n×n matrices

pub mod symmetric;

// Re-export main manifolds for convenience
pub use symmetric::SymmetricMatrices;
