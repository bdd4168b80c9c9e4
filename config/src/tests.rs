//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_epsilon_larger_than_machine_epsilon() {
    // Tolerance must absorb rounding noise from a handful of operations
    assert!(EPSILON > f64::EPSILON);
}

#[test]
fn test_vector2_components_is_two() {
    assert_eq!(VECTOR2_COMPONENTS, 2);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal_absorbs_rounding() {
    assert!(approx_equal(0.1 + 0.2, 0.3));
    assert!(approx_equal(-1.0, -1.0));
}

#[test]
fn test_approx_equal_rejects_distinct_values() {
    assert!(!approx_equal(1.0, 1.0 + 1e-6));
}

#[test]
fn test_approx_equal_nan_and_infinity() {
    assert!(!approx_equal(f64::NAN, f64::NAN));
    assert!(!approx_equal(f64::NAN, 0.0));
    // inf - inf is NaN, so infinities are never approximately equal
    assert!(!approx_equal(f64::INFINITY, f64::INFINITY));
}
