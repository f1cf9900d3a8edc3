//! Planar vector algebra.
//!
//! ## Rust Lesson #3: Operator Overloading
//!
//! Python-style `__add__`/`__mul__` become trait impls from `std::ops`.
//! Each impl names its right-hand operand type, so `v + 2.0` and `v + w`
//! are two different impls, and `v + "text"` simply does not compile.
//! The only operand check left for runtime is building a vector from
//! untyped coordinate data, see [`Vector2::try_from`].

use std::f64::consts::TAU;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::GeometryError;

/// A 2D vector in device units.
///
/// `Copy` makes every operation return a fresh value, there is no way to
/// mutate a vector through a shared reference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate counter-clockwise by `angle` radians.
    #[inline]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    #[inline]
    pub fn inner(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.inner(self).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vector2) -> f64 {
        (self - other).norm()
    }

    /// Point at fraction `t` of the way from `self` to `other`.
    #[inline]
    pub fn lerp(self, other: Vector2, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Polar angle in radians, in `(-PI, PI]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = GeometryError;

    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        match coords {
            [x, y] if x.is_finite() && y.is_finite() => Ok(Self::new(*x, *y)),
            [_, _] => Err(GeometryError::InvalidOperand(format!(
                "non-finite coordinates {coords:?}"
            ))),
            _ => Err(GeometryError::InvalidOperand(format!(
                "expected 2 coordinates, got {}",
                coords.len()
            ))),
        }
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x + rhs, self.y + rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x - rhs, self.y - rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

/// Orthonormal frame of the drawing: `unit_x` points right, `unit_y` points
/// up. Device coordinates grow downward, hence `unit_y = (0, -1)`.
pub const UNIT_X: Vector2 = Vector2::new(1.0, 0.0);
pub const UNIT_Y: Vector2 = Vector2::new(0.0, -1.0);

/// Vertices of a regular polygon around `center`.
///
/// Vertex `i` sits at angle `phase + i * TAU / count` measured in the
/// y-up frame. The ring is open: closing it is a style concern.
pub fn regular_polygon(center: Vector2, radius: f64, count: usize, phase: f64) -> Vec<Vector2> {
    (0..count)
        .map(|i| {
            let angle = phase + i as f64 * TAU / count as f64;
            center + radius * angle.cos() * UNIT_X + radius * angle.sin() * UNIT_Y
        })
        .collect()
}
