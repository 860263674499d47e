//! # Dots Simulation
//!
//! CPU particle system: double-buffered semi-implicit Euler integration with brute-force
//! all-pairs forces, plus the pixel projection handed to the renderer.

pub mod params;
pub mod projection;
pub mod seeding;
pub mod simulation;

pub use params::*;
pub use projection::*;
pub use seeding::*;
pub use simulation::*;
