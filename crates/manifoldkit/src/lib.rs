//! # ManifoldKit
//!
//! Matrix manifolds over the real and complex numbers.
//!
//! This crate re-exports the core traits from `manifoldkit-core` and the
//! concrete manifolds from `manifoldkit-manifolds`.
//!
//! ## Quick Start
//!
//! ```rust
//! use manifoldkit::prelude::*;
//!
//! // Hermitian 3×3 matrices form a space of real dimension 9
//! let m = SymmetricMatrices::<Complex<f64>>::new(3).unwrap();
//! assert_eq!(m.dimension(), 9);
//!
//! let p = m.random_point();
//! assert!(m.is_point_on_manifold(&p, &Tolerance::default()));
//!
//! // Real coordinates in the default orthonormal basis
//! let coords = m.get_coordinates(&p, &p);
//! let back = m.get_vector(&p, &coords);
//! assert!((back - &p).norm() < 1e-10);
//! ```

pub use manifoldkit_core as core;
pub use manifoldkit_manifolds as manifolds;

pub use manifoldkit_core::{ManifoldError, Result};
pub use manifoldkit_manifolds::SymmetricMatrices;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use manifoldkit_core::prelude::*;
    pub use manifoldkit_manifolds::SymmetricMatrices;
    pub use nalgebra::Complex;
}
