//! 2D vector value type.
//!
//! [`Vector2`] is an immutable pair of `f64` components. Construction never
//! validates its input: NaN and infinite components are representable and
//! are detected downstream with [`math_v::is_nan`] / [`math_v::is_finite`].
//!
//! Arithmetic operators are provided for convenience and delegate to the
//! free functions in [`math_v`], so both spellings always agree.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use config::constants::VECTOR2_COMPONENTS;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Vector2Error, Vector2Result};
use crate::math_v;

/// A point or displacement in 2D Euclidean space.
///
/// Components are private and there are no mutating methods, so a value
/// never changes after construction. Every derived operation returns a
/// fresh vector.
///
/// `PartialEq` is exact IEEE-754 equality on both components, identical to
/// [`math_v::equals`]: a vector holding NaN is not equal to itself.
///
/// # Examples
/// ```
/// use vector2::Vector2;
///
/// let v = Vector2::new(1.0, 2.0);
/// assert_eq!(v.x(), 1.0);
/// assert_eq!(v.y(), 2.0);
/// assert_eq!(v.to_array(), [1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    /// The origin, `(0, 0)`.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// assert_eq!(Vector2::ZERO, Vector2::new(0.0, 0.0));
    /// ```
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Creates a vector from its components. Always succeeds.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The X component.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The Y component.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns `(-x, -y)`.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// assert_eq!(Vector2::new(1.0, -2.0).negative(), Vector2::new(-1.0, 2.0));
    /// ```
    pub fn negative(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Euclidean length, `sqrt(x*x + y*y)`.
    ///
    /// Computed literally rather than with `f64::hypot`, so very large
    /// components overflow to `+inf` and any NaN component yields NaN.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    /// assert_eq!(Vector2::new(1e200, 1e200).magnitude(), f64::INFINITY);
    /// ```
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, `divide(self, magnitude)`.
    ///
    /// No guard is applied for the zero vector: `0.0 / 0.0` is NaN, so
    /// `Vector2::ZERO.normal()` is `(NaN, NaN)`. Check against
    /// [`Vector2::ZERO`] first if a different result is needed.
    ///
    /// # Examples
    /// ```
    /// use vector2::{math_v, Vector2};
    ///
    /// assert_eq!(Vector2::new(0.0, 2.0).normal(), Vector2::new(0.0, 1.0));
    /// assert!(math_v::is_nan(Vector2::ZERO.normal()));
    /// ```
    pub fn normal(self) -> Self {
        math_v::divide(self, self.magnitude())
    }

    /// Returns the components as `[x, y]`.
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Formats as `x: <x>, y: <y>` using the default `f64` representation.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

/// Parses the [`Display`](fmt::Display) form back into a vector.
///
/// # Examples
/// ```
/// use vector2::Vector2;
///
/// let v: Vector2 = "x: 1.5, y: -2".parse().unwrap();
/// assert_eq!(v, Vector2::new(1.5, -2.0));
/// assert!("1.5, -2".parse::<Vector2>().is_err());
/// ```
impl FromStr for Vector2 {
    type Err = Vector2Error;

    fn from_str(s: &str) -> Vector2Result<Self> {
        let rest = s
            .trim()
            .strip_prefix("x:")
            .ok_or_else(|| Vector2Error::parse(s, "missing `x:` prefix"))?;
        let (x, y) = rest
            .split_once(", y:")
            .ok_or_else(|| Vector2Error::parse(s, "missing `, y:` separator"))?;
        Ok(Self::new(
            parse_component(s, "x", x)?,
            parse_component(s, "y", y)?,
        ))
    }
}

fn parse_component(input: &str, name: &str, text: &str) -> Vector2Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| Vector2Error::parse(input, format!("invalid {name} component: {e}")))
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

/// Builds a vector from a slice holding exactly two components.
///
/// # Examples
/// ```
/// use vector2::{Vector2, Vector2Error};
///
/// let data: [f64; 2] = [3.0, 4.0];
/// assert_eq!(Vector2::try_from(&data[..]), Ok(Vector2::new(3.0, 4.0)));
/// assert_eq!(
///     Vector2::try_from(&data[..1]),
///     Err(Vector2Error::InvalidLength { expected: 2, found: 1 })
/// );
/// ```
impl TryFrom<&[f64]> for Vector2 {
    type Error = Vector2Error;

    fn try_from(data: &[f64]) -> Vector2Result<Self> {
        match *data {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(Vector2Error::InvalidLength {
                expected: VECTOR2_COMPONENTS,
                found: data.len(),
            }),
        }
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        math_v::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        math_v::subtract(self, rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negative()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        math_v::multiply(self, scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        math_v::divide(self, scalar)
    }
}

impl Rem<f64> for Vector2 {
    type Output = Self;

    fn rem(self, scalar: f64) -> Self {
        math_v::modulo(self, scalar)
    }
}
