//! # Error Types
//!
//! Errors for the non-numeric boundaries of the crate: building a vector
//! from an untyped slice and parsing its string form. Arithmetic itself is
//! total and never produces these.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when converting external data into a [`Vector2`].
///
/// ## Example
///
/// ```rust
/// use vector2::{Vector2, Vector2Error};
///
/// match "x: 1, y".parse::<Vector2>() {
///     Ok(v) => println!("parsed {v}"),
///     Err(Vector2Error::Parse { input, reason }) => eprintln!("{input:?}: {reason}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
///
/// [`Vector2`]: crate::Vector2
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Vector2Error {
    /// A slice with the wrong number of components was supplied.
    #[error("expected {expected} components, found {found}")]
    InvalidLength {
        /// Number of components a vector needs
        expected: usize,
        /// Number of components supplied
        found: usize,
    },

    /// A string did not match the `x: <x>, y: <y>` form.
    #[error("cannot parse vector from {input:?}: {reason}")]
    Parse {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

impl Vector2Error {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector conversions.
///
/// ## Example
///
/// ```rust
/// use vector2::{Vector2, Vector2Result};
///
/// fn from_pair(data: &[f64]) -> Vector2Result<Vector2> {
///     Vector2::try_from(data)
/// }
///
/// assert!(from_pair(&[1.0, 2.0]).is_ok());
/// assert!(from_pair(&[1.0]).is_err());
/// ```
pub type Vector2Result<T> = Result<T, Vector2Error>;

// =============================================================================
// TESTS
// =============================================================================
