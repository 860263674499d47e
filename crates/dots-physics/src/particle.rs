//! Kinematic state of a single dot

use crate::vector::Vector2D;

/// Unit-mass point. Particles carry no identity beyond their index in the system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
}

impl Particle {
    /// A particle at rest
    pub fn at(position: Vector2D) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2D) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vector2D) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// `0.5 * |v|^2` for unit mass
    pub fn kinetic_energy(&self) -> f64 {
        let speed = self.velocity.length();
        0.5 * speed * speed
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.acceleration.is_finite()
    }
}
