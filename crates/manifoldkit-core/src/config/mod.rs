//! Configuration for validity checks.

pub mod tolerance;

pub use tolerance::Tolerance;
