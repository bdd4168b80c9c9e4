//! Immutable 2D vector primitive.
//!
//! This crate provides the [`Vector2`] value type together with the
//! [`math_v`] module of stateless operations over it. All numeric edge cases
//! (NaN, infinities, division by zero) follow IEEE-754 and are reported as
//! values, never as errors; use [`math_v::is_nan`] and [`math_v::is_finite`]
//! to detect them.
//!
//! ```
//! use vector2::{math_v, Vector2};
//!
//! let a = Vector2::new(3.0, 4.0);
//! assert_eq!(a.magnitude(), 5.0);
//! assert_eq!(math_v::add(a, Vector2::ZERO), a);
//! assert_eq!(a.to_string(), "x: 3, y: 4");
//! ```

pub mod error;
pub mod math_v;
pub mod vector2;

pub use error::{Vector2Error, Vector2Result};
pub use vector2::Vector2;
