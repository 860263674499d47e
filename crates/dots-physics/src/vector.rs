//! Double-precision 2D vector used by the physics core

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::DVec2;

/// Plain 2D value with the arithmetic the integrator needs.
///
/// `length` goes through `f64::hypot` instead of `sqrt(x*x + y*y)`, so very large or very
/// small components neither overflow nor flush to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or [`Vector2D::ZERO`] for a zero-length input
    pub fn normal(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self::ZERO;
        }
        self / length
    }

    /// Component-wise product
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2D> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: Vector2D) -> Self {
        self.scale(rhs)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -4.0);

        assert_eq!(a + b, Vector2D::new(4.0, -2.0));
        assert_eq!(a - b, Vector2D::new(-2.0, 6.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(a * b, Vector2D::new(3.0, -8.0));
        assert_eq!(b / 2.0, Vector2D::new(1.5, -2.0));
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Vector2D::new(1.0, 1.0);
        v += Vector2D::new(0.5, -0.5);
        assert_eq!(v, Vector2D::new(1.5, 0.5));
        v -= Vector2D::new(1.5, 0.5);
        assert_eq!(v, Vector2D::ZERO);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2D::ZERO.length(), 0.0);
    }

    #[test]
    fn test_length_extreme_components() {
        // Naive squaring would overflow to infinity here
        let big = Vector2D::new(1e200, 1e200);
        assert!(big.length().is_finite());
        assert!((big.length() / 1e200 - 2f64.sqrt()).abs() < 1e-12);

        // ...and underflow to zero here
        let tiny = Vector2D::new(3e-200, 4e-200);
        assert!(tiny.length() > 0.0);
        assert!((tiny.length() / 1e-200 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_normal() {
        let n = Vector2D::new(0.0, -7.5).normal();
        assert_eq!(n, Vector2D::new(0.0, -1.0));

        let n = Vector2D::new(1.0, 1.0).normal();
        assert!((n.length() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_normal_of_zero_is_zero() {
        assert_eq!(Vector2D::ZERO.normal(), Vector2D::ZERO);
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vector2D::new(0.25, 0.75);
        let d: DVec2 = v.into();
        assert_eq!(d, DVec2::new(0.25, 0.75));
    }
}
