//! Error types for matrix manifold operations.
//!
//! This module defines the recoverable errors reported by manifold
//! constructors and validity checks. Buffer-size mismatches in coordinate
//! conversions are programmer errors and panic instead.

use thiserror::Error;

/// Errors that can occur during manifold operations.
#[derive(Debug, Clone, Error)]
pub enum ManifoldError {
    /// Point is not on the manifold.
    ///
    /// This error occurs when a point fails to satisfy the manifold constraints
    /// within numerical tolerance.
    #[error("Point is not on {manifold}: {reason} (deviation {deviation:e})")]
    InvalidPoint {
        /// Label of the manifold that rejected the point
        manifold: String,
        /// Description of why the point is invalid
        reason: String,
        /// Observed violation of the constraint
        deviation: f64,
    },

    /// Vector is not in the tangent space.
    ///
    /// This error occurs when a vector does not belong to the tangent space
    /// at a given point on the manifold.
    #[error("Vector is not in the tangent space of {manifold}: {reason} (deviation {deviation:e})")]
    InvalidTangent {
        /// Label of the manifold that rejected the vector
        manifold: String,
        /// Description of why the tangent vector is invalid
        reason: String,
        /// Observed violation of the constraint
        deviation: f64,
    },

    /// Dimension mismatch between matrices.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Numerical problem in the input, such as NaN or infinite entries.
    #[error("Numerical instability detected: {reason}")]
    NumericalError {
        /// Description of the numerical issue
        reason: String,
    },

    /// Invalid manifold parameter.
    #[error("Invalid manifold parameter: {reason}")]
    InvalidParameter {
        /// Description of the invalid parameter
        reason: String,
    },

    /// Method or feature not implemented.
    ///
    /// This error is used for optional methods that are not implemented
    /// for a particular manifold.
    #[error("Feature not implemented: {feature}")]
    NotImplemented {
        /// Name of the unimplemented feature
        feature: String,
    },
}

impl ManifoldError {
    /// Create an InvalidPoint error.
    pub fn invalid_point<S1, S2>(manifold: S1, reason: S2, deviation: f64) -> Self
    where
        S1: std::fmt::Display,
        S2: Into<String>,
    {
        Self::InvalidPoint {
            manifold: manifold.to_string(),
            reason: reason.into(),
            deviation,
        }
    }

    /// Create an InvalidTangent error.
    pub fn invalid_tangent<S1, S2>(manifold: S1, reason: S2, deviation: f64) -> Self
    where
        S1: std::fmt::Display,
        S2: Into<String>,
    {
        Self::InvalidTangent {
            manifold: manifold.to_string(),
            reason: reason.into(),
            deviation,
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a NumericalError with a custom reason.
    pub fn numerical_error<S: Into<String>>(reason: S) -> Self {
        Self::NumericalError {
            reason: reason.into(),
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter<S: Into<String>>(reason: S) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Create a NotImplemented error for a specific feature.
    pub fn not_implemented<S: Into<String>>(feature: S) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }

    /// Observed constraint violation, for validation errors.
    pub fn deviation(&self) -> Option<f64> {
        match self {
            Self::InvalidPoint { deviation, .. } | Self::InvalidTangent { deviation, .. } => {
                Some(*deviation)
            }
            _ => None,
        }
    }
}

/// Result type alias for operations that can produce ManifoldError.
pub type Result<T> = std::result::Result<T, ManifoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ManifoldError::invalid_point("SymmetricMatrices(2, ℝ)", "not symmetric", 0.5);
        assert!(matches!(err, ManifoldError::InvalidPoint { .. }));
        assert_eq!(
            err.to_string(),
            "Point is not on SymmetricMatrices(2, ℝ): not symmetric (deviation 5e-1)"
        );
        assert_eq!(err.deviation(), Some(0.5));

        let err = ManifoldError::dimension_mismatch("(3, 3)", "(4, 4)");
        assert!(matches!(err, ManifoldError::DimensionMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected (3, 3), got (4, 4)"
        );
        assert_eq!(err.deviation(), None);
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            ManifoldError::invalid_point("M", "not symmetric", 1.0),
            ManifoldError::invalid_tangent("M", "not Hermitian", 2.0),
            ManifoldError::dimension_mismatch("square matrix", "rectangular matrix"),
            ManifoldError::numerical_error("entry (0, 1) is NaN"),
            ManifoldError::invalid_parameter("n must be positive"),
            ManifoldError::not_implemented("diagonalizing basis"),
        ];

        for err in errors {
            // Ensure Display trait is implemented and produces non-empty strings
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_tangent_error_carries_deviation() {
        let err = ManifoldError::invalid_tangent("M", "not Hermitian", 3.25);
        if let ManifoldError::InvalidTangent {
            manifold,
            reason,
            deviation,
        } = err
        {
            assert_eq!(manifold, "M");
            assert_eq!(reason, "not Hermitian");
            assert_eq!(deviation, 3.25);
        } else {
            panic!("Expected InvalidTangent variant");
        }
    }
}
