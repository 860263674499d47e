//! # Dots Physics
//!
//! Value types and force laws for a 2D point-mass simulation on a wraparound domain.

pub mod constants;
pub mod domain;
pub mod forces;
pub mod particle;
pub mod vector;

pub use constants::*;
pub use domain::*;
pub use forces::*;
pub use particle::*;
pub use vector::*;
