//! Core traits and types for matrix manifolds.
//!
//! This crate provides the foundational traits and types for implementing
//! manifolds whose points are real or complex matrices. It defines the
//! interface a manifold offers to generic code: validity checks,
//! projections, the metric, retractions, embeddings and tangent-space
//! coordinates.
//!
//! # Key Concepts
//!
//! - **Manifolds**: Smooth spaces that locally resemble Euclidean space
//! - **Tangent Spaces**: Linear approximations of manifolds at each point
//! - **Embeddings**: Maps of a manifold into a flat ambient matrix space
//! - **Orthonormal coordinates**: Real coefficient vectors of tangent vectors
//!
//! # Modules
//!
//! - [`basis`]: Tangent space bases and coordinate conversions
//! - [`config`]: Tolerance policy for validity checks
//! - [`embedded`]: Capability of manifolds embedded in a Euclidean space
//! - [`error`]: Error types for manifold operations
//! - [`euclidean`]: The flat ambient matrix space
//! - [`manifold`]: Core manifold trait
//! - [`types`]: Scalar traits, the coefficient field and type aliases

pub mod basis;
pub mod config;
pub mod embedded;
pub mod error;
pub mod euclidean;
pub mod manifold;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{ManifoldError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use manifoldkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::basis::{BasisKind, CachedBasis, OrthonormalCoordinates};
    pub use crate::config::Tolerance;
    pub use crate::embedded::EmbeddedManifold;
    pub use crate::error::{ManifoldError, Result};
    pub use crate::euclidean::Euclidean;
    pub use crate::manifold::Manifold;
    pub use crate::types::{constants, DMatrix, DVector, Field, FieldScalar, Scalar};
}
