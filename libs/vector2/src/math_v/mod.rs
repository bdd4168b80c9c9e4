//! Stateless vector math.
//!
//! Every function here is pure and total over its inputs. Numeric edge cases
//! are never reported as errors: division by zero, overflow and NaN inputs
//! produce IEEE-754 infinities and NaNs in the result, which callers detect
//! with [`is_nan`] and [`is_finite`].
//!
//! # Examples
//! ```
//! use vector2::{math_v, Vector2};
//!
//! let a = Vector2::new(1.0, 2.0);
//! let b = Vector2::new(3.0, 4.0);
//! assert_eq!(math_v::add(a, b), Vector2::new(4.0, 6.0));
//! assert_eq!(math_v::dot(a, b), 11.0);
//! assert!(!math_v::is_finite(math_v::divide(a, 0.0)));
//! ```

use config::constants::approx_equal;

use crate::Vector2;

// =============================================================================
// ARITHMETIC
// =============================================================================

/// Componentwise sum `a + b`.
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x() + b.x(), a.y() + b.y())
}

/// Componentwise difference `a - b`.
pub fn subtract(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x() - b.x(), a.y() - b.y())
}

/// Scales both components by `scalar`.
pub fn multiply(vector: Vector2, scalar: f64) -> Vector2 {
    Vector2::new(vector.x() * scalar, vector.y() * scalar)
}

/// Divides both components by `scalar`.
///
/// Dividing by zero yields infinities (or NaN for zero components), not an
/// error.
///
/// # Examples
/// ```
/// use vector2::{math_v, Vector2};
///
/// let q = math_v::divide(Vector2::new(1.0, 0.0), 0.0);
/// assert_eq!(q.x(), f64::INFINITY);
/// assert!(q.y().is_nan());
/// ```
pub fn divide(vector: Vector2, scalar: f64) -> Vector2 {
    Vector2::new(vector.x() / scalar, vector.y() / scalar)
}

/// Componentwise remainder of division by `scalar`.
///
/// Uses `f64`'s `%`: the result is truncated toward zero and takes the sign
/// of the dividend. A zero `scalar` or infinite component yields NaN.
///
/// # Examples
/// ```
/// use vector2::{math_v, Vector2};
/// assert_eq!(math_v::modulo(Vector2::new(7.0, -7.0), 3.0), Vector2::new(1.0, -1.0));
/// ```
pub fn modulo(vector: Vector2, scalar: f64) -> Vector2 {
    Vector2::new(vector.x() % scalar, vector.y() % scalar)
}

// =============================================================================
// PREDICATES
// =============================================================================

/// Exact equality of both components.
///
/// NaN is unequal to everything, so a NaN-bearing vector never equals
/// anything, itself included.
pub fn equals(a: Vector2, b: Vector2) -> bool {
    a.x() == b.x() && a.y() == b.y()
}

/// Both components within [`config::constants::EPSILON`] of each other.
///
/// # Examples
/// ```
/// use vector2::{math_v, Vector2};
///
/// let a = Vector2::new(0.1 + 0.2, 1.0);
/// let b = Vector2::new(0.3, 1.0);
/// assert!(!math_v::equals(a, b));
/// assert!(math_v::approx_equals(a, b));
/// ```
pub fn approx_equals(a: Vector2, b: Vector2) -> bool {
    approx_equal(a.x(), b.x()) && approx_equal(a.y(), b.y())
}

/// True if either component is NaN.
pub fn is_nan(vector: Vector2) -> bool {
    vector.x().is_nan() || vector.y().is_nan()
}

/// True if both components are finite.
pub fn is_finite(vector: Vector2) -> bool {
    vector.x().is_finite() && vector.y().is_finite()
}

// =============================================================================
// METRICS
// =============================================================================

/// Euclidean distance, `magnitude(a - b)`.
pub fn distance(a: Vector2, b: Vector2) -> f64 {
    subtract(a, b).magnitude()
}

/// Dot product `a.x*b.x + a.y*b.y`.
pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a.x() * b.x() + a.y() * b.y()
}

/// Cross product, defined here as `a.x*b.y + a.y*b.x`.
///
/// Note the addition: this is not the conventional 2D cross product
/// (`a.x*b.y - a.y*b.x`). Existing callers depend on this formula, so it is
/// symmetric in its arguments and does not encode orientation.
///
/// # Examples
/// ```
/// use vector2::{math_v, Vector2};
/// assert_eq!(math_v::cross(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)), 10.0);
/// ```
pub fn cross(a: Vector2, b: Vector2) -> f64 {
    a.x() * b.y() + a.y() * b.x()
}
