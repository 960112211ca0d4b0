//! Serialization of configuration values.

#![cfg(feature = "serde")]

use manifoldkit_core::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_field_roundtrip() {
    let json = serde_json::to_string(&Field::Complex).unwrap();
    assert_eq!(json, "\"Complex\"");
    let back: Field = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Field::Complex);
}

#[test]
fn test_tolerance_from_json() {
    let tol: Tolerance<f64> = serde_json::from_str(r#"{"atol": 1e-8, "rtol": 0.0}"#).unwrap();
    assert_eq!(tol, Tolerance::new(1e-8, 0.0));
    assert!(tol.is_zero(5e-9));
}
