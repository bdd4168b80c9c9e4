//! # Config Crate
//!
//! Centralized numeric constants for the vector2 workspace.
//! Tolerances used for approximate floating-point comparison are defined
//! here so every crate compares values the same way.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, EPSILON};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! assert!(approx_equal(0.1 + 0.2, 0.3));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Compile-Time Only**: No environment variables or configuration files
//! - **IEEE-754 Aware**: Helpers never treat NaN as equal to anything

pub mod constants;

#[cfg(test)]
mod tests;
