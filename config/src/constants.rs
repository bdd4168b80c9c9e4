//! # Configuration Constants
//!
//! Numeric tolerances shared by the vector math crates.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Helpers**: Scalar comparisons built on those tolerances

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for approximate floating-point comparisons.
///
/// Exact comparisons (`==`) remain the default for vectors; this value is
/// only used by the explicitly approximate helpers.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Number of components stored by a 2D vector.
///
/// Used when converting from untyped slices.
///
/// # Example
///
/// ```rust
/// use config::constants::VECTOR2_COMPONENTS;
///
/// let data = [1.0, 2.0];
/// assert_eq!(data.len(), VECTOR2_COMPONENTS);
/// ```
pub const VECTOR2_COMPONENTS: usize = 2;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// NaN compares unequal to everything, including itself.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// assert!(!approx_equal(f64::NAN, f64::NAN));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
