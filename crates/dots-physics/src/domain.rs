//! Rectangular wraparound domain

use crate::vector::Vector2D;

/// Axis-aligned rectangle whose opposite edges are glued together.
///
/// Positions wrap, distances do not: [`ToroidalDomain::distance`] is the straight-line
/// separation, so two particles on either side of a seam are far apart as far as the force
/// law is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToroidalDomain {
    min: Vector2D,
    max: Vector2D,
    size: Vector2D,
}

impl ToroidalDomain {
    /// # Panics
    ///
    /// Panics if `max` is not strictly greater than `min` on both axes.
    pub fn new(min: Vector2D, max: Vector2D) -> Self {
        let size = max - min;
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "domain must have positive extent, got {:?}",
            size
        );
        Self { min, max, size }
    }

    /// The `[0,1] x [0,1]` domain the simulation runs in
    pub fn unit() -> Self {
        Self::new(Vector2D::ZERO, Vector2D::new(1.0, 1.0))
    }

    pub fn min(&self) -> Vector2D {
        self.min
    }

    pub fn max(&self) -> Vector2D {
        self.max
    }

    pub fn size(&self) -> Vector2D {
        self.size
    }

    /// Bring a position that left the domain back in from the opposite edge.
    ///
    /// Only one domain width is added or subtracted per axis. A coordinate that overshot by
    /// more than a full width stays outside and keeps being corrected on later calls.
    pub fn wrap(&self, v: Vector2D) -> Vector2D {
        Vector2D::new(
            wrap_axis(v.x, self.min.x, self.max.x, self.size.x),
            wrap_axis(v.y, self.min.y, self.max.y, self.size.y),
        )
    }

    /// Straight-line distance, ignoring wraparound
    pub fn distance(&self, a: Vector2D, b: Vector2D) -> f64 {
        (b - a).length()
    }
}

impl Default for ToroidalDomain {
    fn default() -> Self {
        Self::unit()
    }
}

fn wrap_axis(value: f64, min: f64, max: f64, size: f64) -> f64 {
    if value < min {
        value + size
    } else if value > max {
        value - size
    } else {
        value
    }
}
